pub mod board_storage;
pub mod saver;
pub mod store;
pub mod traits;

pub use board_storage::{BoardStorage, BOARDS_KEY};
pub use saver::BackgroundSaver;
pub use store::*;
pub use traits::*;
