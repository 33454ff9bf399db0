use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::model::Record;
use crate::export::Exporter;

/// Serialize with 4-space indentation. Non-ASCII text is written as-is.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let data = to_json_string(value)?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_path: PathBuf,
}

impl JsonExporter {
    pub fn new(out_path: PathBuf) -> Self {
        Self { out_path }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, records: &[Record]) -> Result<()> {
        write_json(&self.out_path, records)?;
        tracing::info!(
            "wrote {} record(s) to {}",
            records.len(),
            self.out_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_with_four_spaces_and_keeps_unicode() -> Result<()> {
        let records = vec![Record::new("Vật chất là gì?", vec!["Ý thức".to_string()], 0)];
        let json = to_json_string(&records)?;
        let expected = "[\n    {\n        \"question\": \"Vật chất là gì?\",\n        \"choices\": [\n            \"Ý thức\"\n        ],\n        \"answer\": 0\n    }\n]";
        assert_eq!(json, expected);
        Ok(())
    }

    #[test]
    fn empty_list_serializes_compactly() -> Result<()> {
        let records: Vec<Record> = Vec::new();
        assert_eq!(to_json_string(&records)?, "[]");
        Ok(())
    }
}
