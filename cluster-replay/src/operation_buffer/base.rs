//! Replay buffer of operation transitions.
use super::{OperationBatch, OperationBufferConfig};
use crate::{
    layout::RowLayout,
    storage::{float_columns, int_columns, RowStorage},
    Replay, ReplayBufferBase,
};
use anyhow::Result;
use log::{info, trace};
use ndarray::ArrayView1;

const STATE: usize = 0;
const OPERATION: usize = 1;
const REWARD: usize = 2;

/// A single `(state, operation, reward, next_state)` transition.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTransition {
    /// State, of length `state_dim`.
    pub state: Vec<f32>,

    /// Discrete operation taken in `state`.
    ///
    /// Stored as `f32` and decoded by truncation to `i64`, so operation ids
    /// are exact only while `|operation| <= 2^24` (16,777,216).
    pub operation: f32,

    /// Reward.
    pub reward: f32,

    /// Next state, of length `state_dim`.
    pub next_state: Vec<f32>,
}

/// Ring replay buffer of [`OperationTransition`]s.
///
/// # Examples
///
/// ```ignore
/// let config = OperationBufferConfig::default()
///     .capacity(8)
///     .batch_size(1)
///     .state_dim(3);
/// let mut buffer = OperationBuffer::build(&config)?;
///
/// buffer.store(OperationTransition {
///     state: vec![1., 2., 3.],
///     operation: 5.,
///     reward: 0.5,
///     next_state: vec![4., 5., 6.],
/// })?;
/// let batch = buffer.sample()?;
/// assert_eq!(batch.len(), 1);
/// ```
pub struct OperationBuffer {
    replay: Replay,
    state_dim: usize,
    layout: RowLayout,
    storage: RowStorage,
}

impl OperationBuffer {
    /// Shared replay state.
    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Length of a state vector.
    pub fn state_dim(&self) -> usize {
        self.state_dim
    }

    /// Layout of the rows.
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Number of columns of a row, `2 * state_dim + 2`.
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
    /// Rows are not checked for having been written.
    pub fn batch_at(&self, ixs: &[usize]) -> Result<OperationBatch> {
        let rows = self.storage.gather(ixs)?;

        Ok(OperationBatch {
            states: float_columns(&rows, self.layout.segment(STATE).range()),
            actions: int_columns(&rows, self.layout.segment(OPERATION).range()),
            rewards: float_columns(&rows, self.layout.segment(REWARD).range()),
            next_states: float_columns(&rows, self.layout.tail(self.state_dim)),
            ix_sample: ixs.to_vec(),
        })
    }
}

impl ReplayBufferBase for OperationBuffer {
    type Config = OperationBufferConfig;
    type Item = OperationTransition;
    type Batch = OperationBatch;

    fn build(config: &Self::Config) -> Result<Self> {
        let replay = Replay::new(&config.replay)?;
        let state_dim = config.state_dim;
        let layout = RowLayout::new(&[
            ("state", state_dim),
            ("operation", 1),
            ("reward", 1),
            ("next_state", state_dim),
        ]);
        let storage = RowStorage::new(replay.capacity(), layout.width());
        info!(
            "Construct operation buffer with state_dim = {}, row width = {}",
            state_dim,
            layout.width()
        );

        Ok(Self {
            replay,
            state_dim,
            layout,
            storage,
        })
    }

    fn store(&mut self, tr: Self::Item) -> Result<()> {
        trace!("OperationBuffer::store()");
        let row = self.layout.pack(&[
            tr.state.as_slice(),
            &[tr.operation],
            &[tr.reward],
            tr.next_state.as_slice(),
        ])?;
        self.storage.write(self.replay.next_index(), &row)?;
        self.replay.advance();
        Ok(())
    }

    fn sample(&mut self) -> Result<Self::Batch> {
        trace!("OperationBuffer::sample()");
        let ixs = self.replay.sample_indices()?;
        self.batch_at(&ixs)
    }

    fn len(&self) -> usize {
        self.replay.len()
    }
}
