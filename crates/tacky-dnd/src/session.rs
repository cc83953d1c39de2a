//! Gesture state machine.
//!
//! A gesture goes Idle → Dragging → Idle. While dragging, the controller
//! tracks the pointer and the current drop candidate; releasing turns the
//! last candidate into a [`ReorderIntent`] which the host applies to its
//! board. The controller never touches the board itself.

use std::fmt;

use tacky_core::Point;
use tacky_domain::{CardId, ListId, ReorderIntent};

use crate::marker::{DragMarker, DragMarkerGuard};
use crate::targets::DropTargets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    List,
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DraggableId {
    List(ListId),
    Card(CardId),
}

impl DraggableId {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::List(_) => DragKind::List,
            Self::Card(_) => DragKind::Card,
        }
    }
}

impl fmt::Display for DraggableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(id) => write!(f, "list {}", id),
            Self::Card(id) => write!(f, "card {}", id),
        }
    }
}

/// The board strip holds lists; each list holds cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    Board,
    List(ListId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropLocation {
    pub container: Container,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container: Container, index: usize) -> Self {
        Self { container, index }
    }

    pub fn in_board(index: usize) -> Self {
        Self::new(Container::Board, index)
    }

    pub fn in_list(list_id: ListId, index: usize) -> Self {
        Self::new(Container::List(list_id), index)
    }

    pub fn list_id(&self) -> Option<&ListId> {
        match &self.container {
            Container::List(id) => Some(id),
            Container::Board => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Released with the pointer over no valid container.
    NoDestination,
    /// Released where it started.
    Unchanged,
    Escape,
    PointerLost,
    FocusLost,
    /// A new gesture started before this one ended.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureStart {
    pub item: DraggableId,
    pub source: DropLocation,
    pub pointer: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureProgress {
    pub item: DraggableId,
    pub source: DropLocation,
    pub pointer: Point,
    pub candidate: Option<DropLocation>,
    pub candidate_changed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    Committed(ReorderIntent),
    Cancelled(CancelReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureEnd {
    pub item: DraggableId,
    pub outcome: GestureOutcome,
}

impl GestureEnd {
    pub fn intent(&self) -> Option<&ReorderIntent> {
        match &self.outcome {
            GestureOutcome::Committed(intent) => Some(intent),
            GestureOutcome::Cancelled(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Start(GestureStart),
    Progress(GestureProgress),
    End(GestureEnd),
}

impl DragEvent {
    pub fn dispatch<H: DragHooks + ?Sized>(&self, hooks: &mut H) {
        match self {
            Self::Start(e) => hooks.on_gesture_start(e),
            Self::Progress(e) => hooks.on_gesture_progress(e),
            Self::End(e) => hooks.on_gesture_end(e),
        }
    }
}

impl From<GestureStart> for DragEvent {
    fn from(e: GestureStart) -> Self {
        Self::Start(e)
    }
}

impl From<GestureProgress> for DragEvent {
    fn from(e: GestureProgress) -> Self {
        Self::Progress(e)
    }
}

impl From<GestureEnd> for DragEvent {
    fn from(e: GestureEnd) -> Self {
        Self::End(e)
    }
}

/// Observers of the gesture lifecycle. Every hook defaults to a no-op.
pub trait DragHooks {
    fn on_gesture_start(&mut self, _event: &GestureStart) {}
    fn on_gesture_progress(&mut self, _event: &GestureProgress) {}
    fn on_gesture_end(&mut self, _event: &GestureEnd) {}
}

/// Per-item view of the drag state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSnapshot {
    pub is_dragging: bool,
    pub is_drop_animating: bool,
}

impl DragSnapshot {
    pub fn is_detached(&self) -> bool {
        self.is_dragging || self.is_drop_animating
    }
}

#[derive(Debug)]
pub struct ActiveDrag {
    pub item: DraggableId,
    pub source: DropLocation,
    pub pointer: Point,
    pub candidate: Option<DropLocation>,
    announced: Option<DropLocation>,
    announced_this_frame: bool,
    _marker: DragMarkerGuard,
}

impl ActiveDrag {
    fn progress(&self, candidate_changed: bool) -> GestureProgress {
        GestureProgress {
            item: self.item.clone(),
            source: self.source.clone(),
            pointer: self.pointer,
            candidate: self.candidate.clone(),
            candidate_changed,
        }
    }

    fn intent(&self) -> Result<ReorderIntent, CancelReason> {
        let destination = self.candidate.as_ref().ok_or(CancelReason::NoDestination)?;
        let intent = match (&self.source.container, &destination.container) {
            (Container::Board, Container::Board) => ReorderIntent::MoveList {
                from: self.source.index,
                to: destination.index,
            },
            (Container::List(from_list), Container::List(to_list)) => ReorderIntent::MoveCard {
                from_list: from_list.clone(),
                from_index: self.source.index,
                to_list: to_list.clone(),
                to_index: destination.index,
            },
            _ => return Err(CancelReason::NoDestination),
        };
        if intent.is_identity() {
            Err(CancelReason::Unchanged)
        } else {
            Ok(intent)
        }
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

#[derive(Debug, Default)]
pub struct DragSessionController {
    state: DragState,
    marker: DragMarker,
    dropping: Option<DraggableId>,
}

impl DragSessionController {
    pub fn new(marker: DragMarker) -> Self {
        Self {
            state: DragState::Idle,
            marker,
            dropping: None,
        }
    }

    pub fn marker(&self) -> &DragMarker {
        &self.marker
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(active) => Some(active),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Starts a gesture on `item`, which currently sits at `source`.
    ///
    /// A gesture already in flight is cancelled first and its end event is
    /// returned alongside the new start.
    pub fn begin(
        &mut self,
        item: DraggableId,
        source: DropLocation,
        pointer: Point,
    ) -> (Option<GestureEnd>, GestureStart) {
        let superseded = if self.is_dragging() {
            tracing::debug!("New gesture on {} supersedes the active one", item);
            self.cancel(CancelReason::Superseded)
        } else {
            None
        };
        self.dropping = None;

        tracing::debug!("Drag start: {} at {:?}", item, source);
        let start = GestureStart {
            item: item.clone(),
            source: source.clone(),
            pointer,
        };
        self.state = DragState::Dragging(ActiveDrag {
            item,
            candidate: Some(source.clone()),
            announced: Some(source.clone()),
            source,
            pointer,
            announced_this_frame: false,
            _marker: self.marker.acquire(),
        });
        (superseded, start)
    }

    /// Records the pointer and recomputes the drop candidate. Returns `None`
    /// when no gesture is active.
    pub fn pointer_moved(&mut self, pointer: Point, targets: &DropTargets) -> Option<GestureProgress> {
        let DragState::Dragging(active) = &mut self.state else {
            return None;
        };
        active.pointer = pointer;
        active.candidate = targets.candidate(&active.item, pointer);

        let changed = !active.announced_this_frame && active.candidate != active.announced;
        if changed {
            active.announced = active.candidate.clone();
            active.announced_this_frame = true;
        }
        Some(active.progress(changed))
    }

    /// Marks an animation frame. If the candidate settled somewhere other
    /// than what was last announced, a progress event reporting the change
    /// is returned.
    pub fn frame_boundary(&mut self) -> Option<GestureProgress> {
        let DragState::Dragging(active) = &mut self.state else {
            return None;
        };
        active.announced_this_frame = false;
        if active.candidate == active.announced {
            return None;
        }
        active.announced = active.candidate.clone();
        Some(active.progress(true))
    }

    /// Ends the gesture at the last known candidate.
    pub fn release(&mut self) -> Option<GestureEnd> {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return None;
        };
        let outcome = match active.intent() {
            Ok(intent) => {
                tracing::debug!("Drag commit: {:?}", intent);
                GestureOutcome::Committed(intent)
            }
            Err(reason) => {
                tracing::debug!("Drag of {} ended without a move: {:?}", active.item, reason);
                GestureOutcome::Cancelled(reason)
            }
        };
        self.dropping = Some(active.item.clone());
        Some(GestureEnd {
            item: active.item,
            outcome,
        })
    }

    pub fn cancel(&mut self, reason: CancelReason) -> Option<GestureEnd> {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return None;
        };
        tracing::debug!("Drag of {} cancelled: {:?}", active.item, reason);
        self.dropping = Some(active.item.clone());
        Some(GestureEnd {
            item: active.item,
            outcome: GestureOutcome::Cancelled(reason),
        })
    }

    /// Called by the renderer once the drop animation of `item` is over.
    pub fn finish_drop(&mut self, item: &DraggableId) {
        if self.dropping.as_ref() == Some(item) {
            self.dropping = None;
        }
    }

    pub fn snapshot(&self, item: &DraggableId) -> DragSnapshot {
        DragSnapshot {
            is_dragging: self.active().is_some_and(|a| &a.item == item),
            is_drop_animating: self.dropping.as_ref() == Some(item),
        }
    }

    /// True while a card is being dragged over `list_id`.
    pub fn is_dragging_over(&self, list_id: &ListId) -> bool {
        self.active().is_some_and(|a| {
            a.item.kind() == DragKind::Card
                && a.candidate.as_ref().and_then(DropLocation::list_id) == Some(list_id)
        })
    }
}
