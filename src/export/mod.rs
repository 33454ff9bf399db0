pub mod json_export;

use anyhow::Result;

use crate::core::model::Record;

pub use json_export::{read_json, to_json_string, JsonExporter};

pub trait Exporter {
    fn export(&self, records: &[Record]) -> Result<()>;
}
