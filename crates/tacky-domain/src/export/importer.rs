use serde_json::Value;
use std::path::Path;

use crate::sanitize::{id_field, sanitize_board};
use crate::Board;
use tacky_core::{TackyError, TackyResult};

/// Imports boards from exported JSON.
///
/// Unlike loading from storage, an explicit import reports failures: the
/// document must be an object with an `id` and an array of `lists`.
pub struct BoardImporter;

impl BoardImporter {
    /// Parse and validate an exported board.
    pub fn parse(json: &str) -> TackyResult<Board> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| TackyError::Import(e.to_string()))?;
        Self::validate(&value)?;
        Ok(sanitize_board(&value))
    }

    /// Import into an existing board: identity and creation time are kept,
    /// name and wallpaper are taken when present, lists are replaced.
    pub fn import_into(current: &Board, json: &str) -> TackyResult<Board> {
        let imported = Self::parse(json)?;
        let mut next = current.clone();
        if !imported.name.is_empty() {
            next.name = imported.name;
        }
        if !imported.wallpaper.is_empty() {
            next.wallpaper = imported.wallpaper;
        }
        next.lists = imported.lists;
        tracing::info!(
            "Imported {} lists into board {}",
            next.lists.len(),
            next.id
        );
        Ok(next)
    }

    pub fn import_from_file(current: &Board, path: &Path) -> TackyResult<Board> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TackyError::Import(format!("{}: {}", path.display(), e)))?;
        Self::import_into(current, &content)
    }

    fn validate(value: &Value) -> TackyResult<()> {
        let has_id = id_field(value).is_some();
        let has_lists = value.get("lists").is_some_and(Value::is_array);
        if has_id && has_lists {
            Ok(())
        } else {
            Err(TackyError::Import("Invalid board file".to_string()))
        }
    }
}
