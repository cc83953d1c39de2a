pub mod board;
pub mod card;
pub mod export;
pub mod hierarchy;
pub mod ids;
pub mod list;
pub mod palette;
pub mod sanitize;
pub mod workspace;

pub use board::Board;
pub use card::Card;
pub use export::{BoardExporter, BoardImporter};
pub use hierarchy::{HierarchyError, ReorderIntent};
pub use ids::{BoardId, CardId, ListId};
pub use list::List;
pub use palette::{LABELS, WALLPAPERS};
pub use sanitize::{sanitize_board, sanitize_boards};
pub use workspace::Workspace;
