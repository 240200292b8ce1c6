use std::fmt;

use crate::model::{ScoreError, ScorePercentage, SessionTally, score};

/// Final outcome of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizReport {
    tally: SessionTally,
    score: ScorePercentage,
}

impl QuizReport {
    /// Scores a finished tally.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::DivisionUndefined` if no questions were asked.
    pub fn from_tally(tally: SessionTally) -> Result<Self, ScoreError> {
        let score = score(tally.correct(), tally.total())?;
        Ok(Self { tally, score })
    }

    #[must_use]
    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    #[must_use]
    pub fn score(&self) -> ScorePercentage {
        self.score
    }
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You got {} out of {}, which means {}% right",
            self.tally.correct(),
            self.tally.total(),
            self.score
        )
    }
}
