use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot compute a score for a quiz with no questions")]
    DivisionUndefined,
}

//
// ─── SCORE ────────────────────────────────────────────────────────────────────
//

/// Share of correct answers, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScorePercentage(f64);

impl ScorePercentage {
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ScorePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes `correct / total * 100`.
///
/// # Errors
///
/// Returns `ScoreError::DivisionUndefined` if `total` is zero.
pub fn score(correct: u32, total: u32) -> Result<ScorePercentage, ScoreError> {
    if total == 0 {
        return Err(ScoreError::DivisionUndefined);
    }
    Ok(ScorePercentage(
        f64::from(correct) / f64::from(total) * 100.0,
    ))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
