//! Core functionalities.
mod replay_buffer;
pub use replay_buffer::{Replay, ReplayBufferBase};
