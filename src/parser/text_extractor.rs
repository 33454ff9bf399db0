use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Text of a single page via poppler's `pdftotext`, written to stdout.
pub fn extract_page_text(pdf_path: &Path, page_idx: usize) -> Result<String> {
    // pdftotext uses 1-based page numbers
    let page_number = (page_idx + 1).to_string();

    let output = Command::new("pdftotext")
        .arg("-f")
        .arg(&page_number)
        .arg("-l")
        .arg(&page_number)
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .with_context(|| "failed to invoke pdftotext; is poppler-utils installed?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("pdftotext failed with status {}: {stderr}", output.status);
    }

    String::from_utf8(output.stdout).with_context(|| "pdftotext produced invalid UTF-8")
}
