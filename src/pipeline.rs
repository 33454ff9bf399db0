use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::model::Record;
use crate::export::json_export::JsonExporter;
use crate::export::Exporter;
use crate::extract::{try_extract_records, ExtractMode};
use crate::parser::{open_source, PageRange};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ExtractMode,
    pub pages: PageRange,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            mode: ExtractMode::default(),
            pages: PageRange::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_pages(mut self, pages: PageRange) -> Self {
        self.pages = pages;
        self
    }
}

/// Counts a consumer needs to judge an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityReport {
    pub records: usize,
    pub out_of_range: usize,
    pub empty_questions: usize,
}

impl QualityReport {
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            records: records.len(),
            out_of_range: records.iter().filter(|r| !r.answer_in_range()).count(),
            empty_questions: records.iter().filter(|r| r.question.is_empty()).count(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.out_of_range == 0 && self.empty_questions == 0
    }
}

/// Read the input, run the extractor over its lines, and return the records.
pub fn build_quiz(config: &PipelineConfig) -> Result<Vec<Record>> {
    let source = open_source(&config.input, config.pages)?;
    let lines = source.lines()?;

    let records = try_extract_records(&lines, config.mode)
        .with_context(|| format!("malformed question in {}", config.input.display()))?;

    let report = QualityReport::from_records(&records);
    tracing::info!(
        "extracted {} record(s) from {} line(s)",
        report.records,
        lines.len()
    );
    if !report.is_clean() {
        tracing::warn!(
            "{} record(s) with out-of-range answers, {} with empty questions",
            report.out_of_range,
            report.empty_questions
        );
    }

    Ok(records)
}

pub fn export_quiz(records: &[Record], output: &Path) -> Result<()> {
    let exporter = JsonExporter::new(output.to_path_buf());
    exporter.export(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(prefix: &str, ext: &str) -> PathBuf {
        let mut out = std::env::temp_dir();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let pid = std::process::id();
        out.push(format!("{prefix}-{pid}-{now}.{ext}"));
        out
    }

    #[test]
    fn quality_report_counts_defects() {
        let records = vec![
            Record::new("Q", vec!["a".into()], 0),
            Record::new("", vec!["a".into()], 0),
            Record::new("R", vec!["a".into()], 3),
        ];
        let report = QualityReport::from_records(&records);
        assert_eq!(
            report,
            QualityReport {
                records: 3,
                out_of_range: 1,
                empty_questions: 1
            }
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn builds_and_exports_from_text_input() -> Result<()> {
        let input = temp_path("quizstruct-pipeline-in", "txt");
        let output = temp_path("quizstruct-pipeline-out", "json");
        fs::write(&input, "Câu 1: What?\nA. One\nB. Two\nĐáp án: B\n")?;

        let config = PipelineConfig::new(input.clone(), output.clone());
        let records = build_quiz(&config)?;
        export_quiz(&records, &config.output)?;

        let written: Vec<Record> = serde_json::from_str(&fs::read_to_string(&output)?)?;
        assert_eq!(written, records);
        assert_eq!(written[0].answer, 1);

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
        Ok(())
    }

    #[test]
    fn strict_mode_surfaces_malformed_input() -> Result<()> {
        let input = temp_path("quizstruct-pipeline-strict", "txt");
        fs::write(&input, "Câu 2:\nA. X\nĐáp án: A\n")?;

        let config = PipelineConfig::new(input.clone(), temp_path("unused", "json"))
            .with_mode(ExtractMode::Strict);
        let err = build_quiz(&config).unwrap_err();
        assert!(err
            .downcast_ref::<crate::core::error::MalformedRecordError>()
            .is_some());

        let _ = fs::remove_file(&input);
        Ok(())
    }
}
