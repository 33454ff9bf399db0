pub mod extractor;
pub mod markers;

pub use extractor::{extract_records, try_extract_records, ExtractMode, RecordExtractor, Records};
pub use markers::{classify, LineKind};
