//! Replay buffer of cluster transitions.
use super::{ClusterBatch, ClusterBufferConfig};
use crate::{
    layout::RowLayout,
    storage::{float_columns, int_columns, RowStorage},
    Replay, ReplayBufferBase,
};
use anyhow::Result;
use log::{info, trace};
use ndarray::ArrayView1;

const STATE: usize = 0;
const ACTION: usize = 1;
const REWARD: usize = 2;
const NEXT_STATE: usize = 3;

/// A single `(state, action, reward, next_state, next_action)` transition.
///
/// `state` and `next_state` have `state_dim + op_dim` elements, `action` and
/// `next_action` have `action_dim + op_dim` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterTransition {
    /// State.
    pub state: Vec<f32>,

    /// Action taken in `state`.
    ///
    /// Decoded by truncation to `i64`. Integers are exact only while
    /// `|value| <= 2^24` (16,777,216); larger values are rounded to the
    /// nearest representable `f32` when stored.
    pub action: Vec<f32>,

    /// Reward.
    pub reward: f32,

    /// Next state.
    pub next_state: Vec<f32>,

    /// Action taken in `next_state`. Same integer range as `action`.
    pub next_action: Vec<f32>,
}

/// Ring replay buffer of [`ClusterTransition`]s.
pub struct ClusterBuffer {
    replay: Replay,
    state_dim: usize,
    action_dim: usize,
    op_dim: usize,
    layout: RowLayout,
    storage: RowStorage,
}

impl ClusterBuffer {
    /// Shared replay state.
    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Length of a state vector without the operation columns.
    pub fn state_dim(&self) -> usize {
        self.state_dim
    }

    /// Length of an action vector without the operation columns.
    pub fn action_dim(&self) -> usize {
        self.action_dim
    }

    /// Number of operation columns in the state and action slots.
    pub fn op_dim(&self) -> usize {
        self.op_dim
    }

    /// Layout of the rows.
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Number of columns of a row.
    pub fn row_width(&self) -> usize {
        self.layout.width()
    }

    /// Number of rows ever written.
    pub fn write_cursor(&self) -> u64 {
        self.replay.write_cursor()
    }

    /// Returns `true` once every row has been written at least once.
    pub fn is_full(&self) -> bool {
        self.replay.is_full()
    }

    /// A view of the `ix`-th physical row.
    pub fn row(&self, ix: usize) -> Result<ArrayView1<'_, f32>> {
        Ok(self.storage.row(ix)?)
    }

    /// Decodes the rows at `ixs` into a batch.
    ///
    /// The next action is read from the tail of the row.
    pub fn batch_at(&self, ixs: &[usize]) -> Result<ClusterBatch> {
        let rows = self.storage.gather(ixs)?;
        let l = &self.layout;

        Ok(ClusterBatch {
            states: float_columns(&rows, l.segment(STATE).range()),
            actions: int_columns(&rows, l.segment(ACTION).range()),
            rewards: float_columns(&rows, l.segment(REWARD).range()),
            next_states: float_columns(&rows, l.segment(NEXT_STATE).range()),
            next_actions: int_columns(&rows, l.tail(self.action_dim + self.op_dim)),
            ix_sample: ixs.to_vec(),
        })
    }
}

impl ReplayBufferBase for ClusterBuffer {
    type Config = ClusterBufferConfig;
    type Item = ClusterTransition;
    type Batch = ClusterBatch;

    fn build(config: &Self::Config) -> Result<Self> {
        let replay = Replay::new(&config.replay)?;
        let state_dim = config.state_dim;
        let action_dim = config.action_dim();
        let op_dim = config.op_dim;
        let layout = RowLayout::new(&[
            ("state", state_dim + op_dim),
            ("action", action_dim + op_dim),
            ("reward", 1),
            ("next_state", state_dim + op_dim),
            ("next_action", action_dim + op_dim),
        ]);
        let storage = RowStorage::new(replay.capacity(), layout.width());
        info!(
            "Construct cluster buffer with state_dim = {}, op_dim = {}, row width = {}",
            state_dim,
            op_dim,
            layout.width()
        );

        Ok(Self {
            replay,
            state_dim,
            action_dim,
            op_dim,
            layout,
            storage,
        })
    }

    fn store(&mut self, tr: Self::Item) -> Result<()> {
        trace!("ClusterBuffer::store()");
        let row = self.layout.pack(&[
            tr.state.as_slice(),
            tr.action.as_slice(),
            &[tr.reward],
            tr.next_state.as_slice(),
            tr.next_action.as_slice(),
        ])?;
        self.storage.write(self.replay.next_index(), &row)?;
        self.replay.advance();
        Ok(())
    }

    fn sample(&mut self) -> Result<Self::Batch> {
        trace!("ClusterBuffer::sample()");
        let ixs = self.replay.sample_indices()?;
        self.batch_at(&ixs)
    }

    fn len(&self) -> usize {
        self.replay.len()
    }
}
