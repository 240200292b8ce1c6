/// Whether a typed answer matched the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Line shown to the user after answering.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Great answer!",
            Verdict::Incorrect => "Dumb answer!",
        }
    }
}

/// Compare a raw input line against the answer key.
///
/// Only trailing `\n` characters are removed. Case, spaces and `\r` are significant.
#[must_use]
pub fn judge(answer: &str, answer_key: &str) -> Verdict {
    if answer.trim_end_matches('\n') == answer_key {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
