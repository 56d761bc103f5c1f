//! Tour length evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{GaError, GaResult};

use super::types::FitnessEvaluator;

/// One leg of a tour, for presenting a cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// City the leg starts at.
    pub from: usize,
    /// City the leg ends at.
    pub to: usize,
    /// Distance of the leg.
    pub distance: f64,
}

/// Closed-tour length over a distance matrix.
///
/// The cost of `[c0, c1, ..., c(n-1)]` is the sum of `d[ci][ci+1]` plus the
/// closing leg `d[c(n-1)][c0]`. Any non-finite or negative cell read along
/// the way aborts with [`GaError::Evaluation`]; a sum that overflows aborts
/// with [`GaError::NonFiniteTotal`].
///
/// # Examples
///
/// ```
/// use u_tourga::DistanceMatrix;
/// use u_tourga::ga::{FitnessEvaluator, TourLength};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let eval = TourLength::new(dm);
/// assert_eq!(eval.evaluate(&[0, 1, 2]).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct TourLength {
    distances: DistanceMatrix,
}

impl TourLength {
    /// Wraps a distance matrix. The matrix is never modified afterwards.
    pub fn new(distances: DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Returns the underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Returns every leg of the closed tour, the closing leg last.
    ///
    /// # Errors
    /// Same as [`evaluate`](FitnessEvaluator::evaluate).
    pub fn edges(&self, genes: &[usize]) -> GaResult<Vec<Edge>> {
        self.check_shape(genes)?;
        let n = genes.len();
        (0..n)
            .map(|i| {
                let from = genes[i];
                let to = genes[(i + 1) % n];
                self.leg(from, to).map(|distance| Edge { from, to, distance })
            })
            .collect()
    }

    fn leg(&self, from: usize, to: usize) -> GaResult<f64> {
        let value = self.distances.get(from, to);
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(GaError::Evaluation { from, to, value })
        }
    }

    fn check_shape(&self, genes: &[usize]) -> GaResult<()> {
        let n = self.distances.size();
        if genes.len() != n {
            return Err(GaError::invariant(
                "evaluate",
                format!("tour has {} cities, matrix has {n}", genes.len()),
            ));
        }
        if let Some(&bad) = genes.iter().find(|&&g| g >= n) {
            return Err(GaError::invariant(
                "evaluate",
                format!("city index {bad} out of range 0..{n}"),
            ));
        }
        Ok(())
    }
}

impl FitnessEvaluator for TourLength {
    fn chromosome_len(&self) -> usize {
        self.distances.size()
    }

    fn evaluate(&self, genes: &[usize]) -> GaResult<f64> {
        self.check_shape(genes)?;
        let Some(&last) = genes.last() else {
            return Ok(0.0);
        };
        let mut total = self.leg(last, genes[0])?;
        for pair in genes.windows(2) {
            total += self.leg(pair[0], pair[1])?;
        }
        if !total.is_finite() {
            return Err(GaError::NonFiniteTotal {
                genes: genes.to_vec(),
            });
        }
        Ok(total)
    }
}
