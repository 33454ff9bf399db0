pub mod error;
pub mod model;

pub use error::MalformedRecordError;
pub use model::{LegacyRecord, MultiAnswerRecord, Record};
