pub mod core;
pub mod export;
pub mod extract;
pub mod migrate;
pub mod parser;
pub mod pipeline;
pub mod sample;

pub use crate::core::error::MalformedRecordError;
pub use crate::core::model::{LegacyRecord, MultiAnswerRecord, Record};
pub use extract::{extract_records, try_extract_records, ExtractMode, RecordExtractor, Records};
