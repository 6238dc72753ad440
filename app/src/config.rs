use clap::{Parser, ValueEnum};
use noisemap_core::DEFAULT_FREQUENCY;
use noisemap_core::perlin2::check_frequency;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    Static,
    Perlin,
    Both,
}

impl Mode {
    pub fn wants_static(self) -> bool {
        matches!(self, Mode::Static | Mode::Both)
    }

    pub fn wants_perlin(self) -> bool {
        matches!(self, Mode::Perlin | Mode::Both)
    }
}

/// Generate and print uncorrelated and gradient noise maps
#[derive(Parser, Debug, Clone)]
#[command(name = "noisemap", version, about)]
pub struct MapConfig {
    /// Map width in cells
    #[arg(long, default_value_t = 32)]
    pub width: usize,

    /// Map height in cells
    #[arg(long, default_value_t = 32)]
    pub height: usize,

    /// Grid cells per lattice cell for the perlin map
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: f64,

    /// Seed for the generator; drawn from OS entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which maps to generate
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,

    /// Generate without printing the grids (headers are still printed)
    #[arg(long, short)]
    pub quiet: bool,
}

impl MapConfig {
    // Catch flags clap accepts but generation would reject
    pub fn validate(&self) -> noisemap_core::Result<()> {
        check_frequency(self.frequency)?;
        Ok(())
    }
}
