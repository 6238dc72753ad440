use thiserror::Error;

pub type Result<T> = std::result::Result<T, NoiseError>;

// Every fallible path in the crate lives at an allocation or construction boundary.
// Sampling itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("could not allocate a grid of {cells} cells")]
    AllocationFailed { cells: usize },

    #[error("frequency must be finite and positive, got {0}")]
    InvalidFrequency(f64),

    #[error("base table is not a permutation of 0..=255: {value} appears more than once")]
    NotAPermutation { value: u8 },
}
