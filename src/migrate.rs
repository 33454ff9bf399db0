//! Conversion from the scalar-answer layout to the list-answer layout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::model::{LegacyRecord, MultiAnswerRecord};
use crate::export::json_export::write_json;

/// Wrap every record's answer in a one-element list. Order and count are kept.
pub fn migrate(legacy: Vec<LegacyRecord>) -> Vec<MultiAnswerRecord> {
    legacy.into_iter().map(MultiAnswerRecord::from).collect()
}

/// Read a legacy JSON array from `src`, write the migrated array to `dst`,
/// and return how many records were converted.
pub fn migrate_file(src: &Path, dst: &Path) -> Result<usize> {
    let data =
        fs::read_to_string(src).with_context(|| format!("failed to read {}", src.display()))?;
    let legacy: Vec<LegacyRecord> = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a legacy question list", src.display()))?;
    tracing::debug!("loaded {} legacy record(s) from {}", legacy.len(), src.display());

    let migrated = migrate(legacy);
    write_json(dst, &migrated)?;

    tracing::info!("migrated {} record(s) to {}", migrated.len(), dst.display());
    Ok(migrated.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_scalar_answer() {
        let legacy: Vec<LegacyRecord> =
            serde_json::from_str(r#"[{"question":"Q","choices":["X","Y"],"answer":1}]"#).unwrap();
        let migrated = migrate(legacy);
        assert_eq!(
            serde_json::to_string(&migrated).unwrap(),
            r#"[{"question":"Q","choices":["X","Y"],"answer":[1]}]"#
        );
    }

    #[test]
    fn preserves_order_and_count() {
        let legacy = (0..5)
            .map(|i| LegacyRecord {
                question: format!("Q{i}"),
                choices: vec!["a".into(), "b".into()],
                answer: i % 2,
            })
            .collect::<Vec<_>>();
        let migrated = migrate(legacy);
        assert_eq!(migrated.len(), 5);
        assert_eq!(migrated[3].question, "Q3");
        assert_eq!(migrated[3].answer, vec![1]);
    }

    #[test]
    fn negative_answer_passes_through() {
        let legacy: Vec<LegacyRecord> =
            serde_json::from_str(r#"[{"question":"Q","choices":["X"],"answer":-16}]"#).unwrap();
        let migrated = migrate(legacy);
        assert_eq!(migrated[0].answer, vec![-16]);
    }

    #[test]
    fn migrate_file_keeps_negative_answers() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("quizstruct-migrate-{}", std::process::id()));
        let src = dir.join("legacy.json");
        let dst = dir.join("migrated.json");
        fs::create_dir_all(&dir)?;
        fs::write(&src, r#"[{"question":"Q","choices":["X"],"answer":-16}]"#)?;

        assert_eq!(migrate_file(&src, &dst)?, 1);
        let migrated: Vec<MultiAnswerRecord> = serde_json::from_str(&fs::read_to_string(&dst)?)?;
        assert_eq!(migrated[0].answer, vec![-16]);

        let _ = fs::remove_dir_all(&dir);
        Ok(())
    }

    #[test]
    fn rejects_list_answers() {
        let parsed: Result<Vec<LegacyRecord>, _> =
            serde_json::from_str(r#"[{"question":"Q","choices":[],"answer":[1]}]"#);
        assert!(parsed.is_err());
    }
}
