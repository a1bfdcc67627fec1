//! Strategies for drawing row indices of a minibatch.
use crate::error::ReplayError;
use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draws row indices for a minibatch.
pub trait IndexSampler {
    /// Draws `count` indices from `[0, capacity)`.
    fn draw_indices(&mut self, count: usize, capacity: usize) -> Result<Vec<usize>>;

    /// Name of the strategy, used in logs.
    fn name(&self) -> &'static str;
}

/// Draws indices independently and uniformly, with replacement.
///
/// The whole capacity range is used, regardless of how many rows have been
/// written.
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Creates a sampler seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSampler for UniformSampler {
    fn draw_indices(&mut self, count: usize, capacity: usize) -> Result<Vec<usize>> {
        if capacity == 0 {
            return Err(ReplayError::InvalidConfig("capacity must be positive".to_string()).into());
        }
        Ok((0..count).map(|_| self.rng.gen_range(0..capacity)).collect())
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Priority-weighted sampling.
///
/// Only the wiring exists: it can be configured and constructed, but drawing
/// indices returns [`ReplayError::NotImplemented`].
pub struct PrioritizedSampler {
    alpha: f32,
}

impl PrioritizedSampler {
    /// Creates a sampler with prioritization exponent `alpha`.
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    /// Exponent for prioritization.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl IndexSampler for PrioritizedSampler {
    fn draw_indices(&mut self, _count: usize, _capacity: usize) -> Result<Vec<usize>> {
        Err(ReplayError::NotImplemented(format!(
            "prioritized sampling (alpha = {})",
            self.alpha
        ))
        .into())
    }

    fn name(&self) -> &'static str {
        "prioritized"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_uniform_range() {
        let mut sampler = UniformSampler::new(42);
        let ixs = sampler.draw_indices(1000, 7).unwrap();
        assert_eq!(ixs.len(), 1000);
        assert!(ixs.iter().all(|&ix| ix < 7));
    }

    #[test]
    fn test_uniform_is_reproducible() {
        let ixs1 = UniformSampler::new(7).draw_indices(32, 100).unwrap();
        let ixs2 = UniformSampler::new(7).draw_indices(32, 100).unwrap();
        assert_eq!(ixs1, ixs2);
    }

    #[test]
    fn test_uniform_chi_square() {
        let capacity = 100;
        let n_draws = 100_000;
        let mut sampler = UniformSampler::new(42);
        let mut counts = vec![0usize; capacity];
        for ix in sampler.draw_indices(n_draws, capacity).unwrap() {
            counts[ix] += 1;
        }

        let expected = n_draws as f64 / capacity as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();

        // 99 degrees of freedom; the 0.999 quantile is about 148.2
        assert!(chi2 < 160.0, "chi2 = {}", chi2);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_uniform_zero_capacity() {
        let err = UniformSampler::new(0).draw_indices(4, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_prioritized_not_implemented() {
        let mut sampler = PrioritizedSampler::new(0.6);
        assert_eq!(sampler.alpha(), 0.6);
        let err = sampler.draw_indices(4, 10).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::NotImplemented(_))
        ));
    }
}
