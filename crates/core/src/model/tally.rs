/// Running counts for one quiz session.
///
/// `correct <= total` always holds: every mutation bumps `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    correct: u32,
    total: u32,
}

impl SessionTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a question that was answered correctly.
    pub fn record_correct(&mut self) {
        self.total = self.total.saturating_add(1);
        self.correct = self.correct.saturating_add(1);
    }

    /// Count a question that was answered incorrectly.
    pub fn record_incorrect(&mut self) {
        self.total = self.total.saturating_add(1);
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tally = SessionTally::new();
        assert_eq!(tally.correct(), 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn counts_both_outcomes() {
        let mut tally = SessionTally::new();
        tally.record_correct();
        tally.record_incorrect();
        tally.record_correct();
        assert_eq!(tally.correct(), 2);
        assert_eq!(tally.total(), 3);
    }
}
