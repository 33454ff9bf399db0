//! Errors raised by the extractor in strict mode.
//!
//! Every variant carries the 1-based position of the offending line among
//! the lines handed to the extractor. Line sources drop blank lines first,
//! so this counts non-blank lines. Lenient mode never produces these.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecordError {
    /// Question marker without a `": "` separator.
    #[error("non-blank line {line}: question marker has no text after ': ' ({text:?})")]
    MissingQuestionText { line: usize, text: String },

    /// A new question started before the previous one reached its answer line.
    #[error("non-blank line {line}: question {question:?} was never answered before the next question")]
    AbandonedRecord { line: usize, question: String },

    #[error("non-blank line {line}: text outside of any question ({text:?})")]
    OrphanLine { line: usize, text: String },

    #[error("non-blank line {line}: choice line outside of any question ({text:?})")]
    ChoiceWithoutQuestion { line: usize, text: String },

    #[error("non-blank line {line}: answer line outside of any question ({text:?})")]
    AnswerWithoutQuestion { line: usize, text: String },

    /// Answer marker with nothing after it.
    #[error("non-blank line {line}: answer line has no letter ({text:?})")]
    InvalidAnswerLetter { line: usize, text: String },

    #[error("non-blank line {line}: answer index {answer} is out of range for {choices} choice(s)")]
    AnswerOutOfRange {
        line: usize,
        answer: i64,
        choices: usize,
    },

    /// Input ended while a record was still being assembled.
    #[error("non-blank line {line}: input ended before question {question:?} was answered")]
    UnterminatedRecord { line: usize, question: String },
}

impl MalformedRecordError {
    pub fn line(&self) -> usize {
        match self {
            Self::MissingQuestionText { line, .. }
            | Self::AbandonedRecord { line, .. }
            | Self::OrphanLine { line, .. }
            | Self::ChoiceWithoutQuestion { line, .. }
            | Self::AnswerWithoutQuestion { line, .. }
            | Self::InvalidAnswerLetter { line, .. }
            | Self::AnswerOutOfRange { line, .. }
            | Self::UnterminatedRecord { line, .. } => *line,
        }
    }
}
