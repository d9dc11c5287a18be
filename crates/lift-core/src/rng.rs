//! Deterministic RNG wrapper for candidate generation and search operators.
//!
//! The simulation itself never draws random numbers; only the search
//! procedure does, and it does so on one thread, so a single seed
//! reproduces a whole search run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded search-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Two distinct indices in `0..len`, ordered ascending.
    ///
    /// Returns `None` if `len < 2`.
    pub fn index_pair(&mut self, len: usize) -> Option<(usize, usize)> {
        if len < 2 {
            return None;
        }
        let a = self.0.gen_range(0..len);
        let mut b = self.0.gen_range(0..len - 1);
        if b >= a {
            b += 1;
        }
        Some((a.min(b), a.max(b)))
    }

    /// A non-empty half-open range `lo..hi` inside `0..len`; `hi` may equal
    /// `len`, so the last index can be covered.
    ///
    /// Returns `None` if `len == 0`.
    pub fn segment(&mut self, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let lo = self.0.gen_range(0..len);
        let hi = self.0.gen_range(lo + 1..=len);
        Some((lo, hi))
    }
}
