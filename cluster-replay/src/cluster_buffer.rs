//! Replay buffer of `(state, action, reward, next_state, next_action)` transitions.
//!
//! The action vector has as many elements as the state vector
//! (`action_dim == state_dim`). An optional `op_dim` widens both the state and
//! the action slots rather than adding separate columns. A row has width
//! `2 * state_dim + 2 * action_dim + 2 * op_dim + 1`:
//!
//! ```text
//! [ state (state_dim + op_dim) | action (action_dim + op_dim) | reward (1)
//!   | next_state (state_dim + op_dim) | next_action (action_dim + op_dim) ]
//! ```
//!
//! Actions are stored as `f32` and decoded by truncation toward zero.
mod base;
mod batch;
mod config;
pub use base::{ClusterBuffer, ClusterTransition};
pub use batch::ClusterBatch;
pub use config::ClusterBufferConfig;
