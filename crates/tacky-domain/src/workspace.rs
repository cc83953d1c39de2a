use crate::board::Board;
use crate::ids::BoardId;

/// Every board the user owns, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    boards: Vec<Board>,
}

impl Workspace {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn get(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    /// New boards go to the front so the dashboard shows them first.
    pub fn create_board(&mut self, name: impl Into<String>, wallpaper: Option<String>) -> &Board {
        let mut board = Board::new(name);
        if let Some(wallpaper) = wallpaper {
            board.wallpaper = wallpaper;
        }
        self.boards.insert(0, board);
        &self.boards[0]
    }

    /// Commits a new snapshot of an existing board. Returns false when the
    /// board was deleted meanwhile; the snapshot is then dropped.
    pub fn update_board(&mut self, board: Board) -> bool {
        match self.boards.iter_mut().find(|b| b.id == board.id) {
            Some(slot) => {
                *slot = board;
                true
            }
            None => {
                tracing::debug!("Dropping update for deleted board {}", board.id);
                false
            }
        }
    }

    pub fn delete_board(&mut self, id: &BoardId) -> bool {
        let before = self.boards.len();
        self.boards.retain(|b| &b.id != id);
        self.boards.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_board_prepends() {
        let mut workspace = Workspace::default();
        workspace.create_board("First", None);
        let second_id = workspace
            .create_board("Second", Some("plain".to_string()))
            .id
            .clone();

        assert_eq!(workspace.boards()[0].id, second_id);
        assert_eq!(workspace.boards()[0].wallpaper, "plain");
        assert_eq!(workspace.boards()[1].name, "First");
    }

    #[test]
    fn test_update_board_replaces_snapshot() {
        let mut workspace = Workspace::default();
        let id = workspace.create_board("Board", None).id.clone();
        let next = workspace.get(&id).unwrap().add_list("Todo");

        assert!(workspace.update_board(next));
        assert_eq!(workspace.get(&id).unwrap().lists.len(), 1);
    }

    #[test]
    fn test_update_of_deleted_board_is_dropped() {
        let mut workspace = Workspace::default();
        let id = workspace.create_board("Board", None).id.clone();
        let stale = workspace.get(&id).unwrap().clone();

        assert!(workspace.delete_board(&id));
        assert!(!workspace.update_board(stale));
        assert!(workspace.boards().is_empty());
        assert!(!workspace.delete_board(&id));
    }
}
