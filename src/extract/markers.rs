/// Literal prefixes that give a text line its role.
pub const QUESTION_MARKER: &str = "Câu ";
pub const QUESTION_SEPARATOR: &str = ": ";
pub const CHOICE_MARKERS: [&str; 4] = ["A. ", "B. ", "C. ", "D. "];
pub const ANSWER_MARKER: &str = "Đáp án: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Câu N: text`; `None` when the line has no `": "` separator.
    Question(Option<&'a str>),
    /// Remainder after an `A. `..`D. ` prefix.
    Choice(&'a str),
    /// Character right after `Đáp án: `, if any.
    Answer(Option<char>),
    /// Anything else; folded into the open field.
    Continuation(&'a str),
}

/// Classify one trimmed line. Markers are tried in priority order:
/// question, choice, answer, then continuation.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(QUESTION_MARKER) {
        let text = line
            .split_once(QUESTION_SEPARATOR)
            .map(|(_, rest)| rest.trim());
        return LineKind::Question(text);
    }

    if let Some(rest) = CHOICE_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
    {
        return LineKind::Choice(rest);
    }

    if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
        return LineKind::Answer(rest.chars().next());
    }

    LineKind::Continuation(line)
}

/// Zero-based choice index for an answer letter (`'A'` is 0).
///
/// Computed as a plain code point difference: letters past `'D'` give
/// indices past the last choice, characters before `'A'` give negative ones.
pub fn answer_index(letter: char) -> i64 {
    i64::from(u32::from(letter)) - i64::from(u32::from('A'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_follows_first_separator() {
        assert_eq!(
            classify("Câu 12: Vật chất là gì: theo Lênin?"),
            LineKind::Question(Some("Vật chất là gì: theo Lênin?"))
        );
        assert_eq!(classify("Câu 2:"), LineKind::Question(None));
        assert_eq!(classify("Câu 3:   "), LineKind::Question(Some("")));
        assert_eq!(classify("Câu 4:  padded "), LineKind::Question(Some("padded")));
    }

    #[test]
    fn only_four_choice_prefixes_are_recognised() {
        assert_eq!(classify("A. One"), LineKind::Choice("One"));
        assert_eq!(classify("D. Four"), LineKind::Choice("Four"));
        assert_eq!(classify("E. Five"), LineKind::Continuation("E. Five"));
        assert_eq!(classify("A.One"), LineKind::Continuation("A.One"));
    }

    #[test]
    fn question_marker_beats_choice_prefix() {
        // "Câu " starts with 'C' but is never a choice.
        assert!(matches!(classify("Câu 1: x"), LineKind::Question(_)));
    }

    #[test]
    fn answer_letter_is_first_char_after_marker() {
        assert_eq!(classify("Đáp án: B"), LineKind::Answer(Some('B')));
        assert_eq!(classify("Đáp án: C."), LineKind::Answer(Some('C')));
        assert_eq!(classify("Đáp án: "), LineKind::Answer(None));
        assert_eq!(classify("Đáp án:B"), LineKind::Continuation("Đáp án:B"));
    }

    #[test]
    fn answer_index_from_letter() {
        assert_eq!(answer_index('A'), 0);
        assert_eq!(answer_index('D'), 3);
        assert_eq!(answer_index('F'), 5);
        assert_eq!(answer_index('a'), 32);
        assert_eq!(answer_index('1'), -16);
        assert_eq!(answer_index(' '), -33);
    }
}
