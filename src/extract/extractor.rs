//! Line-driven record assembly.
//!
//! The extractor is a two-state machine: waiting for a question, or
//! accumulating one. A question line (re)opens a record, choice lines append
//! choices, unmarked lines are folded into whichever field was opened last,
//! and an answer line closes the record and emits it.
//!
//! Lenient mode never fails on malformed input, it only loses data (logged
//! through `tracing`). Strict mode turns each of those losses into a
//! [`MalformedRecordError`].

use crate::core::error::MalformedRecordError;
use crate::core::model::Record;
use crate::extract::markers::{answer_index, classify, LineKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Default)]
pub struct RecordExtractor {
    mode: ExtractMode,
    current_question: Option<String>,
    current_choices: Vec<String>,
    line_no: usize,
}

impl RecordExtractor {
    pub fn new(mode: ExtractMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Consume one trimmed line, returning a record when the line closes one.
    pub fn feed(&mut self, line: &str) -> Result<Option<Record>, MalformedRecordError> {
        self.line_no += 1;

        match classify(line) {
            LineKind::Question(text) => self.open_question(line, text).map(|_| None),
            LineKind::Choice(text) => self.push_choice(line, text).map(|_| None),
            LineKind::Answer(letter) => self.close_record(line, letter),
            LineKind::Continuation(text) => self.continue_field(text).map(|_| None),
        }
    }

    /// Signal end of input. An open record is dropped.
    pub fn finish(mut self) -> Result<(), MalformedRecordError> {
        let Some(question) = self.current_question.take() else {
            return Ok(());
        };

        if self.strict() {
            return Err(MalformedRecordError::UnterminatedRecord {
                line: self.line_no,
                question,
            });
        }
        tracing::warn!(
            "input ended before question {:?} was answered; dropping it",
            question
        );
        Ok(())
    }

    fn strict(&self) -> bool {
        self.mode == ExtractMode::Strict
    }

    fn open_question(&mut self, line: &str, text: Option<&str>) -> Result<(), MalformedRecordError> {
        if let Some(previous) = self.current_question.take() {
            if self.strict() {
                return Err(MalformedRecordError::AbandonedRecord {
                    line: self.line_no,
                    question: previous,
                });
            }
            tracing::warn!(
                line = self.line_no,
                "question {:?} was never answered; discarding it",
                previous
            );
        }
        self.current_choices.clear();

        let text = match text {
            Some(text) => text,
            None if self.strict() => {
                return Err(MalformedRecordError::MissingQuestionText {
                    line: self.line_no,
                    text: line.to_string(),
                });
            }
            None => {
                tracing::debug!(line = self.line_no, "question marker without text: {:?}", line);
                ""
            }
        };

        self.current_question = Some(text.to_string());
        Ok(())
    }

    fn push_choice(&mut self, line: &str, text: &str) -> Result<(), MalformedRecordError> {
        if self.current_question.is_none() {
            if self.strict() {
                return Err(MalformedRecordError::ChoiceWithoutQuestion {
                    line: self.line_no,
                    text: line.to_string(),
                });
            }
            // The first fragment of a record is always its question.
            tracing::debug!(line = self.line_no, "choice outside of a question opens one: {:?}", line);
            self.current_question = Some(text.to_string());
            return Ok(());
        }

        self.current_choices.push(text.to_string());
        Ok(())
    }

    fn continue_field(&mut self, text: &str) -> Result<(), MalformedRecordError> {
        let strict = self.strict();
        let line_no = self.line_no;

        let field = match self.current_choices.last_mut() {
            Some(choice) => choice,
            None => match self.current_question.as_mut() {
                Some(question) => question,
                None if strict => {
                    return Err(MalformedRecordError::OrphanLine {
                        line: line_no,
                        text: text.to_string(),
                    });
                }
                None => {
                    tracing::debug!(line = line_no, "dropping text outside of a question: {:?}", text);
                    return Ok(());
                }
            },
        };

        field.push(' ');
        field.push_str(text);
        Ok(())
    }

    fn close_record(
        &mut self,
        line: &str,
        letter: Option<char>,
    ) -> Result<Option<Record>, MalformedRecordError> {
        let Some(question) = self.current_question.take() else {
            if self.strict() {
                return Err(MalformedRecordError::AnswerWithoutQuestion {
                    line: self.line_no,
                    text: line.to_string(),
                });
            }
            tracing::warn!(line = self.line_no, "answer line outside of a question: {:?}", line);
            return Ok(None);
        };
        let choices = std::mem::take(&mut self.current_choices);

        let Some(answer) = letter.map(answer_index) else {
            if self.strict() {
                return Err(MalformedRecordError::InvalidAnswerLetter {
                    line: self.line_no,
                    text: line.to_string(),
                });
            }
            tracing::warn!(
                line = self.line_no,
                "answer line {:?} has no letter; discarding question {:?}",
                line,
                question
            );
            return Ok(None);
        };

        let record = Record::new(question, choices, answer);
        if !record.answer_in_range() {
            if self.strict() {
                return Err(MalformedRecordError::AnswerOutOfRange {
                    line: self.line_no,
                    answer,
                    choices: record.choices.len(),
                });
            }
            tracing::warn!(
                line = self.line_no,
                "answer index {} is out of range for {} choice(s)",
                answer,
                record.choices.len()
            );
        }

        Ok(Some(record))
    }
}

/// Lazy record stream over a sequence of lines.
///
/// Yields records as their answer lines are reached. In strict mode the
/// stream ends after the first error; in lenient mode it never yields one.
pub struct Records<I> {
    lines: I,
    extractor: Option<RecordExtractor>,
}

impl<I> Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L>(lines: L, mode: ExtractMode) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            extractor: Some(RecordExtractor::new(mode)),
        }
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Record, MalformedRecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        let extractor = self.extractor.as_mut()?;

        for line in self.lines.by_ref() {
            match extractor.feed(line.as_ref()) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(err) => {
                    self.extractor = None;
                    return Some(Err(err));
                }
            }
        }

        let extractor = self.extractor.take()?;
        extractor.finish().err().map(Err)
    }
}

/// Extract every record with lenient handling of malformed input.
pub fn extract_records<L>(lines: L) -> Vec<Record>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Records::new(lines, ExtractMode::Lenient)
        .filter_map(Result::ok)
        .collect()
}

pub fn try_extract_records<L>(lines: L, mode: ExtractMode) -> Result<Vec<Record>, MalformedRecordError>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Records::new(lines, mode).collect()
}
