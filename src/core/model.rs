use serde::{Deserialize, Serialize};

/// One finished quiz question.
///
/// `answer` is a zero-based index into `choices`, computed from the answer
/// letter. It is not checked against the choices and can be negative when
/// the letter sorts before `'A'`; see [`Record::answer_in_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: i64,
}

impl Record {
    pub fn new(question: impl Into<String>, choices: Vec<String>, answer: i64) -> Self {
        Self {
            question: question.into(),
            choices,
            answer,
        }
    }

    /// Answer as a usable index into `choices`.
    pub fn answer_slot(&self) -> Option<usize> {
        usize::try_from(self.answer)
            .ok()
            .filter(|&idx| idx < self.choices.len())
    }

    pub fn answer_in_range(&self) -> bool {
        self.answer_slot().is_some()
    }

    pub fn answer_text(&self) -> Option<&str> {
        self.answer_slot().map(|idx| self.choices[idx].as_str())
    }
}

/// Scalar-answer layout written by older exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRecord {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: i64,
}

/// Current layout: `answer` is a list so a question may carry several
/// correct choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAnswerRecord {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: Vec<i64>,
}

impl From<Record> for LegacyRecord {
    fn from(record: Record) -> Self {
        Self {
            question: record.question,
            choices: record.choices,
            answer: record.answer,
        }
    }
}

impl From<LegacyRecord> for MultiAnswerRecord {
    fn from(legacy: LegacyRecord) -> Self {
        Self {
            question: legacy.question,
            choices: legacy.choices,
            answer: vec![legacy.answer],
        }
    }
}
