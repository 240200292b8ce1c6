//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::ScoreError;
use storage::StorageError;

/// Failures reading a line of user input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("reading answer: unexpected end of input")]
    UnexpectedEof,
    #[error("reading answer: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `InteractiveSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("writing prompt: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors emitted while running a whole quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("writing report: {0}")]
    Report(#[source] std::io::Error),
}
