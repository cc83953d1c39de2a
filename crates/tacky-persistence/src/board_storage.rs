use crate::traits::KeyValueStore;
use tacky_core::{TackyError, TackyResult};
use tacky_domain::{sanitize_boards, Board};

/// Storage key of the board collection. The suffix is the record version.
pub const BOARDS_KEY: &str = "tacky.boards.v1";

/// The board persistence collaborator: synchronous load/save of every board.
#[derive(Debug)]
pub struct BoardStorage<S> {
    store: S,
}

impl<S: KeyValueStore> BoardStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Never fails: unreadable, corrupt or mis-shaped data yields no boards,
    /// and each surviving record is repaired field by field.
    pub fn load(&self) -> Vec<Board> {
        let raw = match self.store.get(BOARDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read stored boards: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => {
                let boards = sanitize_boards(&value);
                tracing::info!("Loaded {} boards", boards.len());
                boards
            }
            Err(e) => {
                tracing::warn!("Discarding unparseable stored boards: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, boards: &[Board]) -> TackyResult<()> {
        let json = serde_json::to_string(boards).map_err(TackyError::serialization)?;
        self.store.set(BOARDS_KEY, &json)?;
        tracing::info!("Saved {} boards ({} bytes)", boards.len(), json.len());
        Ok(())
    }
}
