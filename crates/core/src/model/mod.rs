mod record;
mod report;
mod score;
mod tally;

pub use record::QuestionRecord;
pub use report::QuizReport;
pub use score::{ScoreError, ScorePercentage, score};
pub use tally::SessionTally;
