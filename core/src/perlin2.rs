use log::{debug, trace};

use crate::NoiseGenerator;
use crate::error::{NoiseError, Result};
use crate::grid::Grid2D;
use crate::permutation::PermutationTable;

// Grid cells per lattice cell when filling a field
pub const DEFAULT_FREQUENCY: f64 = 16.0;

// Fade function as defined by Ken Perlin: 6t^5 − 15t^4 + 10t^3
// First and second derivatives are zero at t=0 and t=1,
// so there are no visible seams along lattice lines
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Linear interpolation, t should already be faded
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// Reduced gradient set: the low 2 bits of the hash pick one of 4 directions.
// h < 2 keeps x as the primary axis, otherwise x and y swap.
// bit 0 negates the primary term, bit 1 negates the doubled secondary term.
// Result is ±u ± 2v, so it is not bounded by [-1, 1].
#[inline]
pub fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let u = if h < 2 { x } else { y };
    let v = if h < 2 { y } else { x };
    let sign_u = if h & 1 == 0 { u } else { -u };
    let sign_v = if h & 2 == 0 { 2.0 * v } else { -2.0 * v };
    sign_u + sign_v
}

#[inline]
fn lattice(t: f64) -> usize {
    (t.floor().rem_euclid(256.0) as usize) & 255
}

// Single-octave gradient noise at (x, y), mapped to roughly [0, 1]
// The field repeats every 256 lattice units on both axes.
// Non-finite input does not panic: NaN and ±inf land in lattice cell 0.
pub fn sample(x: f64, y: f64, table: &PermutationTable) -> f64 {
    // Which lattice cell? floor(x) mod 256, exact for any finite magnitude
    let xi = lattice(x);
    let yi = lattice(y);
    // Where inside the cell?
    let xf = x - x.floor();
    let yf = y - y.floor();

    let u = fade(xf);
    let v = fade(yf);

    // Hash the four corners; the 512 entry table absorbs the +1 lookahead
    let aa = table.hash(xi) + yi;
    let ab = table.hash(xi) + yi + 1;
    let ba = table.hash(xi + 1) + yi;
    let bb = table.hash(xi + 1) + yi + 1;

    let g1 = grad(table.hash(aa), xf, yf);
    let g2 = grad(table.hash(ba), xf - 1.0, yf);
    let g3 = grad(table.hash(ab), xf, yf - 1.0);
    let g4 = grad(table.hash(bb), xf - 1.0, yf - 1.0);

    // Interpolate both x pairs by u, then the results along y by v
    let x1 = lerp(g1, g2, u);
    let x2 = lerp(g3, g4, u);
    let result = lerp(x1, x2, v);

    // [-1, 1] → [0, 1]; the reduced gradient set can overshoot this slightly
    (result + 1.0) / 2.0
}

// Frequency must be finite and positive
pub fn check_frequency(frequency: f64) -> Result<f64> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(NoiseError::InvalidFrequency(frequency));
    }
    Ok(frequency)
}

// Coherent 2D noise field backed by one permutation table
pub struct Perlin2D {
    table: PermutationTable,
    frequency: f64, // grid cells per lattice cell
}

impl Perlin2D {
    pub fn new(table: PermutationTable) -> Self {
        Self {
            table,
            frequency: DEFAULT_FREQUENCY,
        }
    }

    pub fn with_frequency(table: PermutationTable, frequency: f64) -> Result<Self> {
        let frequency = check_frequency(frequency)?;
        Ok(Self { table, frequency })
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    // Fill a caller-owned grid: cell (row, col) samples (col / f, row / f)
    pub fn fill(&self, grid: &mut Grid2D<f64>) {
        let f = self.frequency;
        grid.fill_with(|row, col| sample(col as f64 / f, row as f64 / f, &self.table));

        if log::log_enabled!(log::Level::Trace) {
            let (min, max) = grid
                .as_slice()
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            trace!("perlin field range [{min:.4}, {max:.4}]");
        }
    }

    // Allocate and fill a width×height field
    pub fn generate(&self, width: usize, height: usize) -> Result<Grid2D<f64>> {
        debug!(
            "generating {width}x{height} perlin field, frequency {}",
            self.frequency
        );
        let mut grid = Grid2D::new(width, height)?;
        self.fill(&mut grid);
        Ok(grid)
    }
}

impl NoiseGenerator for Perlin2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        sample(x, y, &self.table)
    }
}
