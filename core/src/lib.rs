// core holds the grid buffer, the permutation table and the noise samplers
pub mod error;
pub mod grid;
pub mod perlin2;
pub mod permutation;
pub mod static_noise;

pub use error::{NoiseError, Result};
pub use grid::Grid2D;
pub use perlin2::{DEFAULT_FREQUENCY, Perlin2D};
pub use permutation::PermutationTable;
pub use static_noise::StaticNoise;

// coherent noise generator that can be sampled at any 2D point
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;
}
