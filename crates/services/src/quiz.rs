use std::io::{BufRead, Write};

use log::info;
use quiz_core::QuizConfig;
use quiz_core::model::QuizReport;
use storage::{CsvRecordSource, RecordSource};

use crate::error::QuizError;
use crate::session::InteractiveSession;

/// Run a whole quiz: load, intro, questions, score, report line.
///
/// Records are loaded before anything is written, so a bad data file fails
/// without showing the intro. The report line is written without a trailing newline.
///
/// # Errors
///
/// Returns `QuizError` on the first failure; the report line is not written then.
pub fn run_quiz<S, R, W>(
    intro: &str,
    source: &S,
    input: R,
    output: W,
) -> Result<QuizReport, QuizError>
where
    S: RecordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let records = source.load()?;
    info!("starting quiz with {} questions", records.len());

    let mut session = InteractiveSession::new(input, output);
    let tally = session.run(intro, &records)?;
    let report = QuizReport::from_tally(tally)?;

    let mut output = session.into_output();
    write!(output, "{report}").map_err(QuizError::Report)?;
    output.flush().map_err(QuizError::Report)?;

    info!(
        "quiz finished: {} of {} correct",
        report.tally().correct(),
        report.tally().total()
    );
    Ok(report)
}

/// Run a quiz backed by the CSV file named in `config`.
///
/// # Errors
///
/// Returns `QuizError` on the first failure.
pub fn run_from_config<R, W>(
    config: &QuizConfig,
    input: R,
    output: W,
) -> Result<QuizReport, QuizError>
where
    R: BufRead,
    W: Write,
{
    let source = CsvRecordSource::new(config.data_path());
    run_quiz(config.intro(), &source, input, output)
}
