use std::path::Path;
use tacky_core::{TackyError, TackyResult};
use tacky_domain::{Board, BoardId, Workspace};
use tacky_persistence::{BoardStorage, FileKeyValueStore};

/// The workspace loaded for a single CLI invocation.
pub struct CliContext {
    pub workspace: Workspace,
    storage: BoardStorage<FileKeyValueStore>,
}

impl CliContext {
    pub fn load(data_dir: &Path) -> Self {
        let storage = BoardStorage::new(FileKeyValueStore::new(data_dir));
        let workspace = Workspace::new(storage.load());
        Self { workspace, storage }
    }

    pub fn board(&self, id: &str) -> TackyResult<&Board> {
        self.workspace
            .get(&BoardId::from(id))
            .ok_or_else(|| TackyError::NotFound(format!("Board not found: {}", id)))
    }

    /// Stores `board` over its previous snapshot and writes the workspace.
    pub fn commit(&mut self, board: Board) -> TackyResult<()> {
        if !self.workspace.update_board(board) {
            return Err(TackyError::NotFound("Board was deleted".to_string()));
        }
        self.save()
    }

    pub fn save(&self) -> TackyResult<()> {
        self.storage.save(self.workspace.boards())
    }
}
