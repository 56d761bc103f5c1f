//! Best-ever archive.

use crate::error::GaResult;

use super::types::Tour;

/// Archive of the single best tour observed across all generations.
///
/// The archived fitness never gets worse: a tour replaces the current one
/// only on strict improvement.
#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    best: Option<Tour>,
}

impl HallOfFame {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a generation to the archive.
    ///
    /// The generation's best tour (lowest fitness, first on ties) replaces
    /// the archived one if strictly better. Returns `true` on replacement.
    ///
    /// # Errors
    /// Returns [`GaError::InvariantViolation`](crate::GaError::InvariantViolation)
    /// if any tour is unevaluated.
    pub fn update(&mut self, population: &[Tour]) -> GaResult<bool> {
        let mut gen_best: Option<(&Tour, f64)> = None;
        for tour in population {
            let fit = tour.evaluated_fitness("hall_of_fame")?;
            match gen_best {
                Some((_, best)) if fit >= best => {}
                _ => gen_best = Some((tour, fit)),
            }
        }

        let Some((candidate, fit)) = gen_best else {
            return Ok(false);
        };
        if self.fitness().is_some_and(|current| fit >= current) {
            return Ok(false);
        }
        self.best = Some(candidate.clone());
        Ok(true)
    }

    /// Returns the archived tour, if any.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Returns the archived fitness, if any.
    pub fn fitness(&self) -> Option<f64> {
        self.best.as_ref().and_then(Tour::fitness)
    }

    /// Consumes the archive and returns the archived tour.
    pub fn into_best(self) -> Option<Tour> {
        self.best
    }
}
