//! Random site selection for Monte Carlo trials.

use rand::Rng;

/// Uniform integer source used to pick sites to open.
///
/// Any [`rand::Rng`] is a sampler, so a seeded `ChaCha8Rng` gives reproducible
/// trials and `thread_rng()` gives fresh ones. Tests can plug in a scripted
/// implementation to force a particular opening order.
pub trait SiteSampler {
    /// A uniformly distributed value in `[0, bound)`. `bound` is never zero.
    fn draw(&mut self, bound: usize) -> usize;
}

impl<R: Rng> SiteSampler for R {
    fn draw(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Visits every site of an N×N grid in row-major order, then wraps around.
///
/// Each call to [`SiteSampler::draw`] yields one coordinate, so consecutive
/// pairs of draws produce `(0,0), (0,1), ..., (N-1,N-1)`.
#[derive(Debug, Clone, Default)]
pub struct SequentialSampler {
    draws: usize,
}

impl SequentialSampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SiteSampler for SequentialSampler {
    fn draw(&mut self, bound: usize) -> usize {
        let site = (self.draws / 2) % (bound * bound);
        let value = if self.draws % 2 == 0 { site / bound } else { site % bound };
        self.draws += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_sampler_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bound in 1..20 {
            for _ in 0..200 {
                assert!(rng.draw(bound) < bound);
            }
        }
    }

    #[test]
    fn test_rng_sampler_covers_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut hits = [0usize; 5];
        for _ in 0..5000 {
            hits[rng.draw(5)] += 1;
        }
        // ~1000 each; allow a wide band
        for (v, &h) in hits.iter().enumerate() {
            assert!(h > 700 && h < 1300, "value {} drawn {} times", v, h);
        }
    }

    #[test]
    fn test_sequential_sampler_row_major() {
        let mut s = SequentialSampler::new();
        let pairs: Vec<(usize, usize)> = (0..5).map(|_| (s.draw(2), s.draw(2))).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1), (0, 0)]);
    }
}
