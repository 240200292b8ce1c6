use std::io::{BufRead, Write};

use log::debug;
use quiz_core::model::{QuestionRecord, SessionTally};

use crate::error::{InputError, SessionError};
use crate::judge::{Verdict, judge};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Terminal dialogue for one pass through a list of questions.
///
/// Every read blocks until a full line arrives. Any read or write failure ends the
/// session; there are no retries and no partial tally.
pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the intro and wait for the user to press enter.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Input` if no line can be read.
    pub fn run_intro(&mut self, intro: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{intro}").map_err(SessionError::Output)?;
        self.output.flush().map_err(SessionError::Output)?;
        self.read_line()?;
        Ok(())
    }

    /// Ask one question and judge the reply. `number` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the prompt cannot be written or the answer read.
    pub fn ask(&mut self, number: u32, record: &QuestionRecord) -> Result<Verdict, SessionError> {
        write!(self.output, "Question {number}\n{}:\n", record.question())
            .map_err(SessionError::Output)?;
        self.output.flush().map_err(SessionError::Output)?;

        let answer = self.read_line()?;
        let verdict = judge(&answer, record.answer_key());
        debug!("question {number}: {verdict:?}");

        writeln!(self.output, "{}", verdict.message()).map_err(SessionError::Output)?;
        Ok(verdict)
    }

    /// Ask every question in order and return the final tally.
    ///
    /// # Errors
    ///
    /// Returns the first `SessionError` encountered; no tally is produced in that case.
    pub fn ask_all<'a, I>(&mut self, records: I) -> Result<SessionTally, SessionError>
    where
        I: IntoIterator<Item = &'a QuestionRecord>,
    {
        let mut tally = SessionTally::new();
        for record in records {
            let number = tally.total().saturating_add(1);
            if self.ask(number, record)?.is_correct() {
                tally.record_correct();
            } else {
                tally.record_incorrect();
            }
        }
        Ok(tally)
    }

    /// Intro gate followed by every question.
    ///
    /// # Errors
    ///
    /// Returns the first `SessionError` encountered.
    pub fn run<'a, I>(&mut self, intro: &str, records: I) -> Result<SessionTally, SessionError>
    where
        I: IntoIterator<Item = &'a QuestionRecord>,
    {
        self.run_intro(intro)?;
        self.ask_all(records)
    }

    /// Give back the output sink, e.g. to append the final report.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if !line.ends_with('\n') {
            return Err(InputError::UnexpectedEof);
        }
        Ok(line)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
