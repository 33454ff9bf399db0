use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::parser::normalize::normalize_lines;
use crate::parser::LineSource;

/// Plain UTF-8 text, one document line per line. Useful for text that was
/// already pulled out of a PDF, or typed by hand.
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LineSource for TextFileSource {
    fn lines(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let lines = normalize_lines(text.lines());
        tracing::info!("read {} line(s) from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}
