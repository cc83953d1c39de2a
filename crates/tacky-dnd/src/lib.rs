//! Headless drag-and-drop engine for the board view.
//!
//! - [`session`]: the gesture state machine turning pointer input into a
//!   single [`ReorderIntent`](tacky_domain::ReorderIntent).
//! - [`targets`]: drop-target geometry and the midpoint insertion rule.
//! - [`autoscroll`]: edge auto-scroll of the list strip and card lists.
//! - [`scheduler`]: "at most one pending frame" scheduling over a
//!   [`FrameClock`](scheduler::FrameClock).
//! - [`overlay`]: painting the dragged item in a detached layer.
//! - [`marker`]: the global "drag in progress" flag.
//!
//! Nothing here touches a real window system; hosts feed pointer positions
//! and rectangles in and apply the resulting scroll deltas and intents.

pub mod autoscroll;
pub mod marker;
pub mod overlay;
pub mod scheduler;
pub mod session;
pub mod targets;

pub use autoscroll::{AutoScrollEngine, ScrollPlan, ScrollRequest, ScrollViewport};
pub use marker::{DragMarker, DragMarkerGuard};
pub use overlay::{
    CubicBezier, DragStyle, DropAnimation, OverlayOptions, OverlayRenderer, Placement,
    RenderItem, RenderLayer,
};
pub use scheduler::{FrameClock, FrameRequestId, FrameScheduler, ManualFrameClock};
pub use session::{
    ActiveDrag, CancelReason, Container, DragEvent, DragHooks, DragKind, DragSessionController,
    DragSnapshot, DragState, DraggableId, DropLocation, GestureEnd, GestureOutcome,
    GestureProgress, GestureStart,
};
pub use targets::{DropTargets, ListTarget};
