//! Configuration shared by all replay buffers.
use crate::{
    sampler::{IndexSampler, PrioritizedSampler, UniformSampler},
    util,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{default::Default, path::Path};

/// Strategy used to draw row indices.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum SamplingConfig {
    /// Uniform sampling with replacement over the whole capacity.
    Uniform,

    /// Priority-weighted sampling. Not built; sampling with it fails.
    Prioritized {
        /// Exponent for prioritization.
        alpha: f32,
    },
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::Uniform
    }
}

impl SamplingConfig {
    /// Builds the sampler.
    pub fn build(&self, seed: u64) -> Box<dyn IndexSampler> {
        match self {
            Self::Uniform => Box::new(UniformSampler::new(seed)),
            Self::Prioritized { alpha } => Box::new(PrioritizedSampler::new(*alpha)),
        }
    }
}

/// Configuration of [`Replay`](crate::Replay).
///
/// # Examples
///
/// ```rust
/// use cluster_replay::ReplayConfig;
///
/// let config = ReplayConfig::default()
///     .capacity(2000)
///     .batch_size(32)
///     .seed(42);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ReplayConfig {
    /// Number of rows. When the buffer is full, new rows replace the oldest ones.
    pub capacity: usize,

    /// Number of rows drawn by a single call of `sample()`.
    pub batch_size: usize,

    /// Random seed of the index sampler.
    pub seed: u64,

    /// Device on which sampled batches are meant to be placed, e.g. `"cuda:0"`.
    ///
    /// The buffer only records whether a device is set; storage always lives
    /// in host memory.
    pub device: Option<String>,

    /// Sampling strategy.
    pub sampling: SamplingConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            capacity: 10000,
            batch_size: 32,
            seed: 42,
            device: None,
            sampling: SamplingConfig::Uniform,
        }
    }
}

impl ReplayConfig {
    /// Sets the capacity of the replay buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the device name.
    pub fn device(mut self, device: Option<String>) -> Self {
        self.device = device;
        self
    }

    /// Sets the sampling strategy.
    pub fn sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        util::load_yaml(path)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        util::save_yaml(self, path)
    }
}
