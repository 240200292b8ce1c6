use std::path::{Path, PathBuf};

/// File the quiz questions are read from when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "problems.csv";

/// Message shown before the first question.
pub const DEFAULT_INTRO: &str = "Welcome to Quiz v1! In this first version, the questions of the quiz are \
preset in the problems.csv file in the root of this repository, and this test is not timed. \
Press enter to start.";

/// Process-wide quiz settings.
///
/// The binary always runs with `QuizConfig::default()`; the builder methods exist so
/// tests and embedders can point the runner at another file or intro text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    data_path: PathBuf,
    intro: String,
}

impl QuizConfig {
    #[must_use]
    pub fn new(data_path: impl Into<PathBuf>, intro: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            intro: intro.into(),
        }
    }

    #[must_use]
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, DEFAULT_INTRO)
    }
}
