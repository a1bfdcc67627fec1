//! Row storage backed by a 2-D array.
use crate::error::ReplayError;
use ndarray::{s, Array2, ArrayView1, Axis};
use std::ops::Range;

/// A zero-filled `(capacity, width)` array of `f32`, allocated once.
#[derive(Debug, Clone)]
pub struct RowStorage {
    rows: Array2<f32>,
}

impl RowStorage {
    /// Allocates `capacity` zero rows of `width` columns.
    pub fn new(capacity: usize, width: usize) -> Self {
        Self {
            rows: Array2::zeros((capacity, width)),
        }
    }

    /// Number of rows.
    pub fn capacity(&self) -> usize {
        self.rows.nrows()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.ncols()
    }

    /// Overwrites the `ix`-th row.
    ///
    /// Nothing is written unless `ix < capacity` and `row.len() == width`.
    pub fn write(&mut self, ix: usize, row: &[f32]) -> Result<(), ReplayError> {
        self.check_index(ix)?;
        if row.len() != self.width() {
            return Err(ReplayError::DimensionMismatch {
                field: "row",
                expected: self.width(),
                actual: row.len(),
            });
        }
        self.rows.row_mut(ix).assign(&ArrayView1::from(row));
        Ok(())
    }

    /// A view of the `ix`-th row.
    pub fn row(&self, ix: usize) -> Result<ArrayView1<'_, f32>, ReplayError> {
        self.check_index(ix)?;
        Ok(self.rows.row(ix))
    }

    /// Copies the rows at `ixs`, in order and with repetition.
    pub fn gather(&self, ixs: &[usize]) -> Result<Array2<f32>, ReplayError> {
        for &ix in ixs {
            self.check_index(ix)?;
        }
        Ok(self.rows.select(Axis(0), ixs))
    }

    fn check_index(&self, ix: usize) -> Result<(), ReplayError> {
        if ix < self.capacity() {
            Ok(())
        } else {
            Err(ReplayError::IndexOutOfRange {
                index: ix,
                capacity: self.capacity(),
            })
        }
    }
}

/// Copies the columns in `cols` of a gathered batch.
pub fn float_columns(rows: &Array2<f32>, cols: Range<usize>) -> Array2<f32> {
    rows.slice(s![.., cols]).to_owned()
}

/// Copies the columns in `cols` of a gathered batch, truncating toward zero.
pub fn int_columns(rows: &Array2<f32>, cols: Range<usize>) -> Array2<i64> {
    rows.slice(s![.., cols]).mapv(|v| v as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_and_gather() {
        let mut storage = RowStorage::new(3, 2);
        storage.write(1, &[1., 2.]).unwrap();
        storage.write(2, &[3., 4.]).unwrap();

        let rows = storage.gather(&[2, 0, 2]).unwrap();
        assert_eq!(rows, array![[3f32, 4.], [0., 0.], [3., 4.]]);
        assert_eq!(storage.row(1).unwrap().to_vec(), vec![1f32, 2.]);
    }

    #[test]
    fn test_out_of_range() {
        let storage = RowStorage::new(3, 2);
        assert_eq!(
            storage.gather(&[0, 3]).unwrap_err(),
            ReplayError::IndexOutOfRange {
                index: 3,
                capacity: 3
            }
        );
    }

    #[test]
    fn test_write_rejects_short_row() {
        let mut storage = RowStorage::new(2, 4);
        assert_eq!(
            storage.write(0, &[7.]).unwrap_err(),
            ReplayError::DimensionMismatch {
                field: "row",
                expected: 4,
                actual: 1
            }
        );
        assert_eq!(
            storage.write(0, &[7.; 5]).unwrap_err(),
            ReplayError::DimensionMismatch {
                field: "row",
                expected: 4,
                actual: 5
            }
        );
        assert!(storage.row(0).unwrap().iter().all(|&v| v == 0.));
    }

    #[test]
    fn test_write_rejects_out_of_range() {
        let mut storage = RowStorage::new(2, 4);
        assert_eq!(
            storage.write(2, &[7.; 4]).unwrap_err(),
            ReplayError::IndexOutOfRange {
                index: 2,
                capacity: 2
            }
        );
        assert_eq!(storage.gather(&[0, 1]).unwrap(), Array2::<f32>::zeros((2, 4)));
    }

    #[test]
    fn test_int_columns_truncate() {
        let rows = array![[2.9f32, -2.9, 0.5], [7.0, -0.4, 3.99]];
        assert_eq!(int_columns(&rows, 0..3), array![[2i64, -2, 0], [7, 0, 3]]);
        assert_eq!(float_columns(&rows, 1..2), array![[-2.9f32], [-0.4]]);
    }
}
