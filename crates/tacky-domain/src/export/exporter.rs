use std::path::Path;

use crate::Board;
use tacky_core::{TackyError, TackyResult};

/// Exports boards to their portable JSON form.
pub struct BoardExporter;

impl BoardExporter {
    /// Serialize a board to pretty-printed JSON.
    pub fn export_to_json(board: &Board) -> TackyResult<String> {
        serde_json::to_string_pretty(board).map_err(TackyError::serialization)
    }

    /// Export directly to a file.
    pub fn export_to_file(board: &Board, path: &Path) -> TackyResult<()> {
        let json = Self::export_to_json(board)?;
        std::fs::write(path, json)?;
        tracing::info!("Exported board {} to {}", board.id, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, List};

    #[test]
    fn test_export_to_json() {
        let board = Board::new("Test")
            .with_lists(vec![List::new("Todo").with_cards(vec![Card::new("Task")])]);

        let json = BoardExporter::export_to_json(&board).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["name"], "Test");
        assert_eq!(parsed["lists"][0]["title"], "Todo");
        assert_eq!(parsed["lists"][0]["cards"][0]["title"], "Task");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let board = Board::new("On disk");
        let path = dir.path().join(board.export_file_name());

        BoardExporter::export_to_file(&board, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("On disk"));
        assert!(path.ends_with("On_disk.tacky.json"));
    }
}
