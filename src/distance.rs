//! Dense distance matrix.
//!
//! The engine only reads this matrix; it is built once by the caller and
//! shared immutably for the whole run.

use crate::error::{GaError, GaResult};

/// A dense n×n distance matrix stored in row-major order.
///
/// Construction checks only the shape. Cells must be finite and
/// non-negative; [`TourLength`](crate::ga::TourLength) checks this lazily
/// when a cell is read, so a bad cell aborts the run with the exact
/// coordinates that were touched.
///
/// # Examples
///
/// ```
/// use u_tourga::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 9.0],
///     vec![5.0, 0.0, 4.0],
///     vec![9.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `size` is zero or the data
    /// length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> GaResult<Self> {
        if size == 0 {
            return Err(GaError::config("distance_matrix", "must not be empty"));
        }
        if data.len() != size * size {
            return Err(GaError::config(
                "distance_matrix",
                format!("expected {} cells for size {size}, got {}", size * size, data.len()),
            ));
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if there are no rows or any row
    /// length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> GaResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GaError::config(
                "distance_matrix",
                format!("row {i} has {} columns, expected {size}", row.len()),
            ));
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Builds a symmetric matrix from a distance function over index pairs.
    ///
    /// `f(i, j)` is called once per unordered pair with `i < j`; the diagonal
    /// is zero.
    pub fn symmetric_from_fn<F>(size: usize, mut f: F) -> GaResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = f(i, j);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self::from_data(size, data)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
