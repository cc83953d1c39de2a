pub mod app;
pub mod dialog;
pub mod events;
pub mod layout;
pub mod popup;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
