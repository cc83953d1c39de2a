pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod result;

pub use config::{AppConfig, AutoScrollConfig, EdgeScroll};
pub use error::TackyError;
pub use geometry::{Axis, Point, Rect, Vector};
pub use input::TextInput;
pub use result::TackyResult;
