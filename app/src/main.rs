mod config;
mod render;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use noisemap_core::{Perlin2D, PermutationTable, StaticNoise};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use config::MapConfig;
use render::{render_field, render_static};

fn run(cfg: &MapConfig, out: &mut impl Write) -> anyhow::Result<()> {
    // Bad flags fail before anything is generated
    cfg.validate()?;

    // Log the seed so any run can be reproduced with --seed
    let seed = cfg.seed.unwrap_or_else(rand::random);
    info!("seed = {seed}");
    // One generator for the whole run: static noise first, then the table
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    if cfg.mode.wants_static() {
        writeln!(out, "Generating static noise map:\n")?;
        let start = Instant::now();
        let map = StaticNoise::generate(cfg.width, cfg.height, &mut rng)
            .context("could not complete static noise map")?;
        info!("static noise map done in {:.2?}", start.elapsed());
        if !cfg.quiet {
            write!(out, "{}", render_static(&map))?;
        }
    }

    if cfg.mode.wants_perlin() {
        writeln!(out, "\nNow for the perlin noise map:\n")?;
        let start = Instant::now();
        let table = PermutationTable::build(&mut rng);
        let perlin = Perlin2D::with_frequency(table, cfg.frequency)?;
        let map = perlin
            .generate(cfg.width, cfg.height)
            .context("could not complete perlin noise map")?;
        info!("perlin noise map done in {:.2?}", start.elapsed());
        if !cfg.quiet {
            write!(out, "{}", render_field(&map))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = MapConfig::parse();
    run(&cfg, &mut io::stdout().lock())
}
