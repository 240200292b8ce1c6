#![forbid(unsafe_code)]

pub mod config;
pub mod model;

pub use config::QuizConfig;
pub use model::{QuestionRecord, QuizReport, ScoreError, ScorePercentage, SessionTally, score};
