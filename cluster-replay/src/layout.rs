//! Fixed-width row layout.
//!
//! A [`RowLayout`] is an ordered list of named segments. Segment offsets are
//! cumulative, so the write path ([`RowLayout::pack`]) and the read path
//! ([`RowLayout::segment`], [`RowLayout::tail`]) share one source of truth.
use crate::error::ReplayError;
use std::ops::Range;

/// A contiguous run of columns in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Name of the field stored in the segment.
    pub name: &'static str,

    /// First column of the segment.
    pub start: usize,

    /// Number of columns.
    pub len: usize,
}

impl Segment {
    /// Column range of the segment.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Layout of the rows of a replay buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    segments: Vec<Segment>,
    width: usize,
}

impl RowLayout {
    /// Builds a layout from `(name, len)` pairs, in column order.
    pub fn new(fields: &[(&'static str, usize)]) -> Self {
        let mut start = 0;
        let segments = fields
            .iter()
            .map(|&(name, len)| {
                let segment = Segment { name, start, len };
                start += len;
                segment
            })
            .collect();

        Self {
            segments,
            width: start,
        }
    }

    /// Total number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// All segments in column order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The `ix`-th segment.
    ///
    /// Panics if `ix` is not smaller than the number of segments.
    pub fn segment(&self, ix: usize) -> &Segment {
        &self.segments[ix]
    }

    /// The last `len` columns of a row.
    pub fn tail(&self, len: usize) -> Range<usize> {
        self.width - len.min(self.width)..self.width
    }

    /// Checks that `fields` match the segment lengths.
    pub fn check(&self, fields: &[&[f32]]) -> Result<(), ReplayError> {
        debug_assert_eq!(fields.len(), self.segments.len());

        for (segment, field) in self.segments.iter().zip(fields.iter()) {
            if segment.len != field.len() {
                return Err(ReplayError::DimensionMismatch {
                    field: segment.name,
                    expected: segment.len,
                    actual: field.len(),
                });
            }
        }
        Ok(())
    }

    /// Concatenates `fields` into a single row.
    ///
    /// Lengths are checked before anything is copied.
    pub fn pack(&self, fields: &[&[f32]]) -> Result<Vec<f32>, ReplayError> {
        self.check(fields)?;

        let mut row = Vec::with_capacity(self.width);
        for field in fields {
            row.extend_from_slice(field);
        }
        Ok(row)
    }
}
