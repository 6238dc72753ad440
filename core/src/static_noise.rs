use log::debug;
use rand::Rng;

use crate::error::Result;
use crate::grid::Grid2D;

// Uncorrelated noise: every cell is an independent uniform draw in [0, 255]
// There is no pattern or gradient between neighbours
pub struct StaticNoise;

impl StaticNoise {
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid2D<u8>> {
        debug!("generating {width}x{height} static noise");
        let mut grid = Grid2D::new(width, height)?;
        Self::fill(&mut grid, rng);
        Ok(grid)
    }

    // Draws happen row by row, left to right
    pub fn fill<R: Rng + ?Sized>(grid: &mut Grid2D<u8>, rng: &mut R) {
        grid.fill_with(|_, _| rng.gen_range(0..=u8::MAX));
    }
}
