//! Replay buffer of `(state, operation, reward, next_state)` transitions.
//!
//! Each transition is packed into one row of width `2 * state_dim + 2`:
//!
//! ```text
//! [ state (state_dim) | operation (1) | reward (1) | next_state (state_dim) ]
//! ```
//!
//! The operation is stored as `f32` and decoded by truncation toward zero.
mod base;
mod batch;
mod config;
pub use base::{OperationBuffer, OperationTransition};
pub use batch::OperationBatch;
pub use config::OperationBufferConfig;
