//! Minibatch of [`ClusterBuffer`](super::ClusterBuffer).
use ndarray::Array2;

/// Minibatch of `(state, action, reward, next_state, next_action)` transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterBatch {
    /// States, `(batch_size, state_dim + op_dim)`.
    pub states: Array2<f32>,

    /// Actions truncated toward zero, `(batch_size, action_dim + op_dim)`.
    pub actions: Array2<i64>,

    /// Rewards, `(batch_size, 1)`.
    pub rewards: Array2<f32>,

    /// Next states, `(batch_size, state_dim + op_dim)`.
    pub next_states: Array2<f32>,

    /// Next actions truncated toward zero, `(batch_size, action_dim + op_dim)`.
    pub next_actions: Array2<i64>,

    /// Rows the batch was taken from.
    pub ix_sample: Vec<usize>,
}

impl ClusterBatch {
    /// Decomposes the batch into `(states, actions, rewards, next_states, next_actions)`.
    pub fn unpack(
        self,
    ) -> (
        Array2<f32>,
        Array2<i64>,
        Array2<f32>,
        Array2<f32>,
        Array2<i64>,
    ) {
        (
            self.states,
            self.actions,
            self.rewards,
            self.next_states,
            self.next_actions,
        )
    }

    /// Number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.rewards.nrows()
    }

    /// Returns `true` if the batch has no transitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
