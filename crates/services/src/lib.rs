#![forbid(unsafe_code)]

pub mod error;
pub mod judge;
pub mod quiz;
pub mod session;

pub use error::{InputError, QuizError, SessionError};
pub use judge::{Verdict, judge};
pub use quiz::{run_from_config, run_quiz};
pub use session::InteractiveSession;
