use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, Result};

pub const TABLE_SIZE: usize = 256;

// Shuffled 0..=255 duplicated into 512 entries, so that `table[X + 1] + Y + 1`
// stays in range for any wrapped lattice coordinate without a modulo.
// Invariant: perm[i] == perm[i + 256] for i in 0..256
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    // Fisher–Yates shuffle of p[0..256] driven by the caller's generator
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut p: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        for i in (1..TABLE_SIZE).rev() {
            // j is drawn from [0, i] inclusive, otherwise the shuffle is biased
            let j = rng.gen_range(0..=i);
            p.swap(i, j);
        }
        debug!("built permutation table, head = {:?}", &p[..8]);
        Self::duplicate(&p)
    }

    // Same table for the same seed, on every platform
    pub fn from_seed(seed: u64) -> Self {
        Self::build(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    // Wrap an existing base permutation, checking it is a bijection on 0..=255
    pub fn from_permutation(base: [u8; TABLE_SIZE]) -> Result<Self> {
        let mut seen = [false; TABLE_SIZE];
        for &value in &base {
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(NoiseError::NotAPermutation { value });
            }
        }
        Ok(Self::duplicate(&base))
    }

    // The table a shuffle with no swaps would produce: p[i] = i
    pub fn identity() -> Self {
        Self::duplicate(&std::array::from_fn(|i| i as u8))
    }

    fn duplicate(base: &[u8; TABLE_SIZE]) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(base);
        perm[TABLE_SIZE..].copy_from_slice(base);
        Self { perm }
    }

    // Lookup used by the sampler; i must be < 512
    #[inline]
    pub fn hash(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    // The shuffled 256 entries
    pub fn base(&self) -> &[u8] {
        &self.perm[..TABLE_SIZE]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("base", &self.base())
            .finish()
    }
}
