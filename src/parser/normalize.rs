//! Unicode cleanup for extracted text lines.
//!
//! PDF text layers frequently store Vietnamese letters decomposed
//! (`a` + U+0302 instead of `â`), which would keep `Câu ` and `Đáp án: `
//! from matching. Lines are composed to NFC before they reach the extractor.

use unicode_normalization::UnicodeNormalization;

pub fn normalize_line(line: &str) -> String {
    let composed = line.nfc().collect::<String>();
    composed.trim().to_string()
}

/// Normalize every line and drop the ones left empty, including the
/// form feeds `pdftotext` emits between pages.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_decomposed_marks() {
        // "Câu" with a combining circumflex, "án" with a combining acute.
        assert_eq!(normalize_line("Ca\u{302}u 1: x"), "Câu 1: x");
        assert_eq!(normalize_line("Đáp a\u{301}n: A"), "Đáp án: A");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_line("  A. One \t"), "A. One");
        assert_eq!(normalize_line("\u{c}Câu 2: y"), "Câu 2: y");
    }

    #[test]
    fn drops_blank_lines() {
        let lines = normalize_lines(["Câu 1: x", "", "   ", "\u{c}", "A. y"]);
        assert_eq!(lines, vec!["Câu 1: x", "A. y"]);
    }
}
