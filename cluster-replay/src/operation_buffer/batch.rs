//! Minibatch of [`OperationBuffer`](super::OperationBuffer).
use ndarray::Array2;

/// Minibatch of `(state, operation, reward, next_state)` transitions.
///
/// Every array has `batch_size` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationBatch {
    /// States, `(batch_size, state_dim)`.
    pub states: Array2<f32>,

    /// Operations truncated toward zero, `(batch_size, 1)`.
    pub actions: Array2<i64>,

    /// Rewards, `(batch_size, 1)`.
    pub rewards: Array2<f32>,

    /// Next states, `(batch_size, state_dim)`.
    pub next_states: Array2<f32>,

    /// Rows the batch was taken from.
    pub ix_sample: Vec<usize>,
}

impl OperationBatch {
    /// Decomposes the batch into `(states, actions, rewards, next_states)`.
    pub fn unpack(self) -> (Array2<f32>, Array2<i64>, Array2<f32>, Array2<f32>) {
        (self.states, self.actions, self.rewards, self.next_states)
    }

    /// Number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.states.nrows()
    }

    /// Returns `true` if the batch has no transitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
