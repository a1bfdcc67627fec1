//! Replay buffer interface.
//!
//! [`ReplayBufferBase`] is the contract shared by all buffers: they are built
//! from a configuration, accept one transition per [`store`] call and return a
//! minibatch of fixed size from [`sample`].
//!
//! [`Replay`] holds the state every buffer carries: capacity, batch size, the
//! write cursor, the device flag and the index sampler. Concrete buffers own a
//! [`Replay`] and add row storage and a layout on top of it.
//!
//! [`store`]: ReplayBufferBase::store
//! [`sample`]: ReplayBufferBase::sample
use crate::{error::ReplayError, sampler::IndexSampler, ReplayConfig};
use anyhow::Result;
use log::{debug, info};

/// Interface of replay buffers.
///
/// The default implementations of [`store`](Self::store) and
/// [`sample`](Self::sample) return [`ReplayError::NotImplemented`].
pub trait ReplayBufferBase {
    /// Configuration parameters for the replay buffer.
    type Config: Clone;

    /// A single transition accepted by [`store`](Self::store).
    type Item;

    /// The type of batch returned by [`sample`](Self::sample).
    type Batch;

    /// Builds a new replay buffer from the given configuration.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Writes a transition at the current write position.
    #[allow(unused_variables)]
    fn store(&mut self, item: Self::Item) -> Result<()> {
        Err(ReplayError::NotImplemented("store".to_string()).into())
    }

    /// Draws a minibatch of `batch_size` rows.
    fn sample(&mut self) -> Result<Self::Batch> {
        Err(ReplayError::NotImplemented("sample".to_string()).into())
    }

    /// Returns the number of rows holding data, at most the capacity.
    fn len(&self) -> usize;
}

/// State shared by all replay buffers.
pub struct Replay {
    capacity: usize,
    batch_size: usize,
    write_cursor: u64,
    device_placed: bool,
    sampler: Box<dyn IndexSampler>,
}

impl Replay {
    /// Creates the shared state.
    ///
    /// Fails if `capacity` or `batch_size` is zero.
    pub fn new(config: &ReplayConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(ReplayError::InvalidConfig("capacity must be positive".to_string()).into());
        }
        if config.batch_size == 0 {
            return Err(
                ReplayError::InvalidConfig("batch_size must be positive".to_string()).into(),
            );
        }

        let sampler = config.sampling.build(config.seed);
        info!(
            "Construct replay with capacity = {}, batch_size = {}, sampling = {}",
            config.capacity,
            config.batch_size,
            sampler.name()
        );

        Ok(Self {
            capacity: config.capacity,
            batch_size: config.batch_size,
            write_cursor: 0,
            device_placed: config.device.is_some(),
            sampler,
        })
    }

    /// Number of rows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of rows drawn per sample.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of rows ever written. Never wraps and never decreases.
    pub fn write_cursor(&self) -> u64 {
        self.write_cursor
    }

    /// Whether a device was configured. Storage is not affected.
    pub fn is_device_placed(&self) -> bool {
        self.device_placed
    }

    /// Number of rows holding data.
    pub fn len(&self) -> usize {
        self.write_cursor.min(self.capacity as u64) as usize
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.write_cursor == 0
    }

    /// Returns `true` once every row has been written at least once.
    pub fn is_full(&self) -> bool {
        self.write_cursor >= self.capacity as u64
    }

    /// Draws `batch_size` row indices from `[0, capacity)`.
    pub fn sample_indices(&mut self) -> Result<Vec<usize>> {
        self.sampler.draw_indices(self.batch_size, self.capacity)
    }

    /// Row the next transition is written to, `write_cursor % capacity`.
    pub fn next_index(&self) -> usize {
        (self.write_cursor % self.capacity as u64) as usize
    }

    /// Returns the row to write next and advances the cursor.
    ///
    /// Call only once the row has been written.
    pub(crate) fn advance(&mut self) -> usize {
        if self.write_cursor == self.capacity as u64 {
            debug!("Replay is full, overwriting the oldest rows");
        }
        let ix = self.next_index();
        self.write_cursor += 1;
        ix
    }
}

impl ReplayBufferBase for Replay {
    type Config = ReplayConfig;
    type Item = ();
    type Batch = ();

    fn build(config: &Self::Config) -> Result<Self> {
        Self::new(config)
    }

    fn len(&self) -> usize {
        Replay::len(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SamplingConfig;
    use test_log::test;

    fn config() -> ReplayConfig {
        ReplayConfig::default().capacity(4).batch_size(3)
    }

    #[test]
    fn test_store_and_sample_not_implemented() -> Result<()> {
        let mut replay = Replay::build(&config())?;

        let err = replay.store(()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::NotImplemented(_))
        ));

        let err = replay.sample().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::NotImplemented(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        for config in [config().capacity(0), config().batch_size(0)].iter() {
            let err = Replay::new(config).err().unwrap();
            assert!(matches!(
                err.downcast_ref::<ReplayError>(),
                Some(ReplayError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_cursor_wraps_but_never_decreases() -> Result<()> {
        let mut replay = Replay::new(&config())?;
        let ixs = (0..10).map(|_| replay.advance()).collect::<Vec<_>>();
        assert_eq!(ixs, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
        assert_eq!(replay.write_cursor(), 10);
        assert_eq!(replay.len(), 4);
        assert!(replay.is_full());
        assert_eq!(replay.next_index(), 2);
        Ok(())
    }

    #[test]
    fn test_sample_indices() -> Result<()> {
        let mut replay = Replay::new(&config().batch_size(16))?;
        assert!(replay.is_empty());
        let ixs = replay.sample_indices()?;
        assert_eq!(ixs.len(), 16);
        assert!(ixs.iter().all(|&ix| ix < 4));
        Ok(())
    }

    #[test]
    fn test_sample_indices_chi_square() -> Result<()> {
        let capacity = 100;
        let mut replay = Replay::new(&config().capacity(capacity).batch_size(1000))?;
        let mut counts = vec![0usize; capacity];
        for _ in 0..100 {
            for ix in replay.sample_indices()? {
                counts[ix] += 1;
            }
        }

        // 99 degrees of freedom, p ~ 1e-4 at 160
        let expected = 100_000. / capacity as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi2 < 160., "chi2 = {}", chi2);
        assert!(counts.iter().all(|&c| c > 0));
        Ok(())
    }

    #[test]
    fn test_prioritized_sample_indices_not_implemented() -> Result<()> {
        let config = config().sampling(SamplingConfig::Prioritized { alpha: 0.6 });
        let mut replay = Replay::new(&config)?;
        let err = replay.sample_indices().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReplayError>(),
            Some(ReplayError::NotImplemented(_))
        ));
        Ok(())
    }

    #[test]
    fn test_device_flag_is_recorded() -> Result<()> {
        assert!(!Replay::new(&config())?.is_device_placed());
        let replay = Replay::new(&config().device(Some("cuda:0".to_string())))?;
        assert!(replay.is_device_placed());
        Ok(())
    }
}
