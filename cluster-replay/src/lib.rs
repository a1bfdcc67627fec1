#![warn(missing_docs)]
//! Ring replay memory for reinforcement learning.
//!
//! Transitions are packed into fixed-width `f32` rows of a preallocated
//! 2-D array. Rows are written at `write_cursor % capacity`, so the oldest rows
//! are overwritten first once the buffer is full. Minibatches are drawn
//! uniformly with replacement from the whole capacity range, including rows
//! that have never been written (they decode as zeros).
//!
//! Two buffers are provided:
//!
//! - [`OperationBuffer`]: `(state, operation, reward, next_state)`.
//! - [`ClusterBuffer`]: `(state, action, reward, next_state, next_action)`,
//!   where the optional `op_dim` columns widen the state and action slots.
//!
//! ```ignore
//! use cluster_replay::{
//!     OperationBuffer, OperationBufferConfig, OperationTransition, ReplayBufferBase,
//! };
//!
//! let config = OperationBufferConfig::default()
//!     .capacity(8)
//!     .batch_size(4)
//!     .state_dim(3);
//! let mut buffer = OperationBuffer::build(&config)?;
//! buffer.store(OperationTransition {
//!     state: vec![1., 2., 3.],
//!     operation: 5.,
//!     reward: 0.5,
//!     next_state: vec![4., 5., 6.],
//! })?;
//! let batch = buffer.sample()?;
//! ```
pub mod error;
pub mod layout;
pub mod sampler;
pub mod storage;
mod util;

mod base;
pub use base::{Replay, ReplayBufferBase};

mod config;
pub use config::{ReplayConfig, SamplingConfig};

pub mod cluster_buffer;
pub mod operation_buffer;
pub use cluster_buffer::{ClusterBatch, ClusterBuffer, ClusterBufferConfig, ClusterTransition};
pub use operation_buffer::{
    OperationBatch, OperationBuffer, OperationBufferConfig, OperationTransition,
};
