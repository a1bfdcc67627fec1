//! Configuration of [`ClusterBuffer`](super::ClusterBuffer).
use crate::{util, ReplayConfig, SamplingConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{default::Default, path::Path};

/// Configuration of [`ClusterBuffer`](super::ClusterBuffer).
///
/// # Examples
///
/// ```rust
/// use cluster_replay::{ClusterBufferConfig, SamplingConfig};
///
/// let config = ClusterBufferConfig::default()
///     .capacity(2000)
///     .batch_size(32)
///     .state_dim(16)
///     .op_dim(4)
///     .sampling(SamplingConfig::Uniform);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ClusterBufferConfig {
    /// Capacity, batch size, seed, device and sampling strategy.
    pub replay: ReplayConfig,

    /// Length of a state vector without the operation columns.
    /// The action vector has the same length.
    pub state_dim: usize,

    /// Number of operation columns appended to the state and action slots.
    #[serde(default)]
    pub op_dim: usize,
}

impl Default for ClusterBufferConfig {
    fn default() -> Self {
        Self {
            replay: ReplayConfig::default(),
            state_dim: 1,
            op_dim: 0,
        }
    }
}

impl ClusterBufferConfig {
    /// Sets the capacity of the replay buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.replay = self.replay.capacity(capacity);
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.replay = self.replay.batch_size(batch_size);
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.replay = self.replay.seed(seed);
        self
    }

    /// Sets the device name.
    pub fn device(mut self, device: Option<String>) -> Self {
        self.replay = self.replay.device(device);
        self
    }

    /// Sets the sampling strategy.
    pub fn sampling(mut self, sampling: SamplingConfig) -> Self {
        self.replay = self.replay.sampling(sampling);
        self
    }

    /// Sets the length of a state vector.
    pub fn state_dim(mut self, state_dim: usize) -> Self {
        self.state_dim = state_dim;
        self
    }

    /// Sets the number of operation columns.
    pub fn op_dim(mut self, op_dim: usize) -> Self {
        self.op_dim = op_dim;
        self
    }

    /// Length of an action vector without the operation columns.
    pub fn action_dim(&self) -> usize {
        self.state_dim
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
