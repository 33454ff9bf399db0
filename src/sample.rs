//! Building a practice quiz out of an extracted question list, and scoring
//! the answers given to it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleOptions {
    /// 1-based, inclusive question numbers to draw from.
    pub from: Option<usize>,
    pub to: Option<usize>,
    /// Draw this many questions at random; `None` keeps the whole range in order.
    pub count: Option<usize>,
    pub shuffle_choices: bool,
}

/// Records numbered `from..=to` (1-based), clamped to the list.
pub fn select_range(records: &[Record], from: Option<usize>, to: Option<usize>) -> &[Record] {
    let start = from.unwrap_or(1).max(1) - 1;
    let end = to.unwrap_or(records.len()).min(records.len());
    if start >= end {
        return &[];
    }
    &records[start..end]
}

/// Reorder the choices and move `answer` along with the correct one.
/// An answer that points at no choice is left untouched.
pub fn shuffle_choices<R: Rng + ?Sized>(record: &Record, rng: &mut R) -> Record {
    let mut order: Vec<usize> = (0..record.choices.len()).collect();
    order.shuffle(rng);

    let choices = order.iter().map(|&i| record.choices[i].clone()).collect();
    let answer = match record.answer_slot() {
        Some(slot) => order
            .iter()
            .position(|&i| i == slot)
            .and_then(|pos| i64::try_from(pos).ok())
            .unwrap_or(record.answer),
        None => record.answer,
    };

    Record::new(record.question.clone(), choices, answer)
}

/// Pick questions according to `options`. Random draws never repeat a question.
pub fn sample<R: Rng + ?Sized>(records: &[Record], options: &SampleOptions, rng: &mut R) -> Vec<Record> {
    let pool = select_range(records, options.from, options.to);

    let mut picked: Vec<Record> = match options.count {
        Some(count) => {
            if count > pool.len() {
                tracing::warn!(
                    "asked for {} question(s) but only {} are in range",
                    count,
                    pool.len()
                );
            }
            pool.choose_multiple(rng, count).cloned().collect()
        }
        None => pool.to_vec(),
    };

    if options.shuffle_choices {
        picked = picked.iter().map(|r| shuffle_choices(r, rng)).collect();
    }

    tracing::debug!("sampled {} of {} question(s)", picked.len(), records.len());
    picked
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// 1-based numbers of the questions answered wrongly or not at all.
    pub missed: Vec<usize>,
}

/// Compare responses (choice indices, `None` for unanswered) with the quiz.
/// Questions without a response count as missed.
pub fn score(records: &[Record], responses: &[Option<usize>]) -> Score {
    let mut correct = 0;
    let mut missed = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let response = responses.get(idx).copied().flatten();
        match (response, record.answer_slot()) {
            (Some(given), Some(expected)) if given == expected => correct += 1,
            _ => missed.push(idx + 1),
        }
    }

    Score {
        correct,
        total: records.len(),
        missed,
    }
}

/// Parse responses written as answer letters, e.g. `"ABD-C"`, where `-` or
/// `_` marks an unanswered question. Whitespace and commas are ignored.
pub fn parse_responses(text: &str) -> anyhow::Result<Vec<Option<usize>>> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_uppercase() {
            '-' | '_' => Ok(None),
            letter if letter.is_ascii_uppercase() => Ok(Some(letter as usize - 'A' as usize)),
            other => anyhow::bail!("not an answer letter: {other:?}"),
        })
        .collect()
}
