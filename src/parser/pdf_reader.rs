use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::parser::normalize::normalize_lines;
use crate::parser::text_extractor::extract_page_text;
use crate::parser::LineSource;

/// 1-based, inclusive page bounds. `None` means "from the first" / "to the last".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRange {
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl PageRange {
    pub fn new(first: Option<usize>, last: Option<usize>) -> Self {
        Self { first, last }
    }

    /// Zero-based page indices to read from a document of `page_count` pages.
    pub fn indices(&self, page_count: usize) -> std::ops::Range<usize> {
        let start = self.first.unwrap_or(1).max(1) - 1;
        let end = self.last.unwrap_or(page_count).min(page_count);
        start..end.max(start)
    }
}

#[derive(Debug, Clone)]
pub struct PdfReader {
    path: PathBuf,
    pages: PageRange,
}

impl PdfReader {
    pub fn new(path: PathBuf) -> Result<Self> {
        Ok(Self {
            path,
            pages: PageRange::default(),
        })
    }

    pub fn with_pages(mut self, pages: PageRange) -> Self {
        self.pages = pages;
        self
    }

    pub fn page_count(&self) -> Result<usize> {
        get_page_count(&self.path)
    }

    /// Raw text of one page (zero-based index).
    pub fn page_text(&self, page_idx: usize) -> Result<String> {
        extract_page_text(&self.path, page_idx)
    }
}

impl LineSource for PdfReader {
    fn lines(&self) -> Result<Vec<String>> {
        let page_count = self.page_count()?;
        let range = self.pages.indices(page_count);
        tracing::info!(
            "reading pages {}..={} of {} from {}",
            range.start + 1,
            range.end,
            page_count,
            self.path.display()
        );

        let mut lines = Vec::new();
        for page_idx in range {
            let text = self
                .page_text(page_idx)
                .with_context(|| format!("failed to extract text of page {}", page_idx + 1))?;
            let page_lines = normalize_lines(text.lines());
            tracing::debug!("page {}: {} line(s)", page_idx + 1, page_lines.len());
            lines.extend(page_lines);
        }

        Ok(lines)
    }
}

fn get_page_count(pdf_path: &Path) -> Result<usize> {
    let output = Command::new("pdfinfo")
        .arg(pdf_path)
        .output()
        .with_context(|| format!("failed to invoke pdfinfo on {}", pdf_path.display()))?;

    if !output.status.success() {
        anyhow::bail!("pdfinfo failed with status: {}", output.status);
    }

    parse_page_count(&String::from_utf8_lossy(&output.stdout)).with_context(|| {
        format!(
            "pdfinfo output did not contain a usable 'Pages:' line for {}",
            pdf_path.display()
        )
    })
}

fn parse_page_count(pdfinfo: &str) -> Result<usize> {
    let rest = pdfinfo
        .lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .ok_or_else(|| anyhow::anyhow!("missing 'Pages:' line"))?;
    let num_str = rest.trim();
    num_str
        .parse()
        .with_context(|| format!("failed to parse page count: {num_str}"))
}
