pub mod normalize;
pub mod pdf_reader;
pub mod text_extractor;
pub mod text_file;

pub use pdf_reader::{PageRange, PdfReader};
pub use text_file::TextFileSource;

use anyhow::Result;
use std::path::Path;

/// Supplies a document as trimmed, non-empty lines in reading order.
/// Page boundaries are not visible to the caller.
pub trait LineSource {
    fn lines(&self) -> Result<Vec<String>>;
}

pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Pick a line source from the input's extension: PDFs go through poppler,
/// everything else is read as UTF-8 text.
pub fn open_source(path: &Path, pages: PageRange) -> Result<Box<dyn LineSource>> {
    if is_pdf(path) {
        Ok(Box::new(PdfReader::new(path.to_path_buf())?.with_pages(pages)))
    } else {
        Ok(Box::new(TextFileSource::new(path.to_path_buf())))
    }
}
