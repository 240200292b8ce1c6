use serde::Deserialize;

/// One question/answer pair read from the quiz data file.
///
/// Field order matches the column order of the file, so rows deserialize positionally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    question: String,
    answer_key: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(question: impl Into<String>, answer_key: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer_key: answer_key.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer_key(&self) -> &str {
        &self.answer_key
    }
}
