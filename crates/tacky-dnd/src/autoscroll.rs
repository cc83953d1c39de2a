//! Edge auto-scroll while a gesture is active.
//!
//! Holding the pointer near the edge of a scroll container nudges it once
//! per frame, proportionally to how deep into the edge band the pointer is.
//! Two containers take part: the horizontal list strip (both axes), and for
//! card drags the card list under the pointer (vertical only).

use tacky_core::{AutoScrollConfig, Axis, EdgeScroll, Point, Rect, Vector};
use tacky_domain::ListId;

use crate::scheduler::{FrameClock, FrameRequestId, FrameScheduler, ManualFrameClock};
use crate::session::{DragHooks, DragKind, GestureEnd, GestureProgress, GestureStart};

/// Signed scroll delta for one axis. The leading edge wins over the
/// trailing one when both bands hold the pointer.
pub fn edge_delta(position: f64, start: f64, end: f64, edge: EdgeScroll) -> f64 {
    if edge.threshold <= 0.0 {
        return 0.0;
    }
    let intensity = |offset: f64| ((edge.threshold - offset) / edge.threshold).min(1.0);

    let leading = position - start;
    let trailing = end - position;
    if leading < edge.threshold {
        -intensity(leading) * edge.max_step
    } else if trailing < edge.threshold {
        intensity(trailing) * edge.max_step
    } else {
        0.0
    }
}

fn axis_delta(pointer: Point, bounds: Rect, axis: Axis, edge: EdgeScroll) -> f64 {
    match axis {
        Axis::Horizontal => edge_delta(pointer.x, bounds.left(), bounds.right(), edge),
        Axis::Vertical => edge_delta(pointer.y, bounds.top(), bounds.bottom(), edge),
    }
}

/// The scrollable surfaces the engine may move.
pub trait ScrollViewport {
    fn outer_bounds(&self) -> Option<Rect>;
    fn scroll_outer(&mut self, delta: Vector);
    fn inner_bounds(&self, list_id: &ListId) -> Option<Rect>;
    fn scroll_inner(&mut self, list_id: &ListId, dy: f64);
}

/// Latest pointer state worth acting on at the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub pointer: Point,
    pub kind: DragKind,
    /// Card list under the pointer, falling back to the source list.
    pub inner: Option<ListId>,
}

impl ScrollRequest {
    pub fn from_progress(progress: &GestureProgress) -> Self {
        let inner = match progress.item.kind() {
            DragKind::Card => progress
                .candidate
                .as_ref()
                .and_then(|c| c.list_id())
                .or_else(|| progress.source.list_id())
                .cloned(),
            DragKind::List => None,
        };
        Self {
            pointer: progress.pointer,
            kind: progress.item.kind(),
            inner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollPlan {
    pub outer: Vector,
    pub inner: Option<(ListId, f64)>,
}

impl ScrollPlan {
    pub fn compute<V: ScrollViewport + ?Sized>(
        request: &ScrollRequest,
        viewport: &V,
        config: &AutoScrollConfig,
    ) -> Self {
        let outer = viewport
            .outer_bounds()
            .map(|bounds| {
                Vector::new(
                    axis_delta(request.pointer, bounds, Axis::Horizontal, config.outer()),
                    axis_delta(request.pointer, bounds, Axis::Vertical, config.outer()),
                )
            })
            .unwrap_or(Vector::ZERO);

        let inner = match (&request.kind, &request.inner) {
            (DragKind::Card, Some(list_id)) => viewport.inner_bounds(list_id).and_then(|bounds| {
                let dy = axis_delta(request.pointer, bounds, Axis::Vertical, config.inner());
                (dy != 0.0).then(|| (list_id.clone(), dy))
            }),
            _ => None,
        };

        Self { outer, inner }
    }

    pub fn is_noop(&self) -> bool {
        self.outer.is_zero() && self.inner.is_none()
    }

    pub fn apply<V: ScrollViewport + ?Sized>(&self, viewport: &mut V) {
        if !self.outer.is_zero() {
            viewport.scroll_outer(self.outer);
        }
        if let Some((list_id, dy)) = &self.inner {
            viewport.scroll_inner(list_id, *dy);
        }
    }
}

#[derive(Debug)]
pub struct AutoScrollEngine<C> {
    scheduler: FrameScheduler<ScrollRequest, C>,
    config: AutoScrollConfig,
}

impl<C: FrameClock> AutoScrollEngine<C> {
    pub fn new(clock: C, config: AutoScrollConfig) -> Self {
        Self {
            scheduler: FrameScheduler::new(clock),
            config,
        }
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        self.scheduler.clock_mut()
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn pointer_moved(&mut self, request: ScrollRequest) {
        if self.config.enabled {
            self.scheduler.schedule(request);
        }
    }

    pub fn cancel(&mut self) {
        if self.scheduler.cancel() {
            tracing::trace!("Dropped pending auto-scroll frame");
        }
    }

    /// Frame `id` fired: scroll for the latest pointer, if any.
    pub fn run_frame<V: ScrollViewport + ?Sized>(
        &mut self,
        id: FrameRequestId,
        viewport: &mut V,
    ) -> Option<ScrollPlan> {
        let request = self.scheduler.run_frame(id)?;
        let plan = ScrollPlan::compute(&request, viewport, &self.config);
        plan.apply(viewport);
        Some(plan)
    }
}

impl AutoScrollEngine<ManualFrameClock> {
    /// Fires the manual clock and runs whatever frame was due.
    pub fn tick<V: ScrollViewport + ?Sized>(&mut self, viewport: &mut V) -> Option<ScrollPlan> {
        let fired = self.scheduler.clock_mut().tick();
        fired
            .into_iter()
            .filter_map(|id| self.run_frame(id, viewport))
            .last()
    }
}

impl<C: FrameClock> DragHooks for AutoScrollEngine<C> {
    fn on_gesture_start(&mut self, _event: &GestureStart) {
        self.cancel();
    }

    fn on_gesture_progress(&mut self, event: &GestureProgress) {
        self.pointer_moved(ScrollRequest::from_progress(event));
    }

    fn on_gesture_end(&mut self, _event: &GestureEnd) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{CancelReason, DraggableId, DropLocation, GestureOutcome};
    use std::collections::HashMap;
    use tacky_domain::CardId;

    #[derive(Default)]
    struct FakeViewport {
        outer: Option<Rect>,
        inner: HashMap<ListId, Rect>,
        outer_scrolls: Vec<Vector>,
        inner_scrolls: Vec<(ListId, f64)>,
    }

    impl ScrollViewport for FakeViewport {
        fn outer_bounds(&self) -> Option<Rect> {
            self.outer
        }
        fn scroll_outer(&mut self, delta: Vector) {
            self.outer_scrolls.push(delta);
        }
        fn inner_bounds(&self, list_id: &ListId) -> Option<Rect> {
            self.inner.get(list_id).copied()
        }
        fn scroll_inner(&mut self, list_id: &ListId, dy: f64) {
            self.inner_scrolls.push((list_id.clone(), dy));
        }
    }

    fn viewport() -> FakeViewport {
        let mut inner = HashMap::new();
        inner.insert(ListId::from("todo"), Rect::new(10.0, 40.0, 100.0, 200.0));
        FakeViewport {
            outer: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
            inner,
            ..Default::default()
        }
    }

    fn card_request(x: f64, y: f64) -> ScrollRequest {
        ScrollRequest {
            pointer: Point::new(x, y),
            kind: DragKind::Card,
            inner: Some(ListId::from("todo")),
        }
    }

    fn engine() -> AutoScrollEngine<ManualFrameClock> {
        AutoScrollEngine::new(ManualFrameClock::new(), AutoScrollConfig::default())
    }

    #[test]
    fn test_edge_delta_intensity() {
        let edge = EdgeScroll {
            threshold: 80.0,
            max_step: 22.0,
        };
        assert_eq!(edge_delta(200.0, 0.0, 400.0, edge), 0.0);
        assert_eq!(edge_delta(400.0, 0.0, 400.0, edge), 22.0);
        assert_eq!(edge_delta(0.0, 0.0, 400.0, edge), -22.0);
        assert_eq!(edge_delta(360.0, 0.0, 400.0, edge), 11.0);
        // far past the edge is clamped to full speed
        assert_eq!(edge_delta(-500.0, 0.0, 400.0, edge), -22.0);
    }

    #[test]
    fn test_leading_edge_wins_in_narrow_container() {
        let edge = EdgeScroll {
            threshold: 80.0,
            max_step: 22.0,
        };
        // 100 wide: both bands overlap at 50
        assert!(edge_delta(50.0, 0.0, 100.0, edge) < 0.0);
    }

    #[test]
    fn test_pointer_at_right_edge_scrolls_outer_full_step() {
        let mut engine = engine();
        let mut viewport = viewport();
        engine.pointer_moved(ScrollRequest {
            pointer: Point::new(400.0, 150.0),
            kind: DragKind::List,
            inner: None,
        });

        let plan = engine.tick(&mut viewport).unwrap();
        assert_eq!(plan.outer, Vector::new(22.0, 0.0));
        assert_eq!(viewport.outer_scrolls, vec![Vector::new(22.0, 0.0)]);
        assert!(viewport.inner_scrolls.is_empty());
    }

    #[test]
    fn test_burst_of_moves_scrolls_once_for_latest_pointer() {
        let mut engine = engine();
        let mut viewport = viewport();
        engine.pointer_moved(card_request(395.0, 150.0));
        engine.pointer_moved(card_request(200.0, 150.0));

        assert_eq!(engine.clock_mut().pending().len(), 1);
        let plan = engine.tick(&mut viewport).unwrap();
        assert!(plan.is_noop());
        assert!(viewport.outer_scrolls.is_empty());
        assert!(engine.tick(&mut viewport).is_none());
    }

    #[test]
    fn test_inner_list_scrolls_vertically_for_cards() {
        let mut engine = engine();
        let mut viewport = viewport();
        // 40 above the bottom of the inner list (240), clear of the outer bands
        engine.pointer_moved(card_request(150.0, 200.0));

        let plan = engine.tick(&mut viewport).unwrap();
        assert_eq!(plan.outer, Vector::ZERO);
        let (list_id, dy) = plan.inner.unwrap();
        assert_eq!(list_id, ListId::from("todo"));
        assert!((dy - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_drags_never_scroll_inner() {
        let mut engine = engine();
        let mut viewport = viewport();
        engine.pointer_moved(ScrollRequest {
            pointer: Point::new(150.0, 230.0),
            kind: DragKind::List,
            inner: Some(ListId::from("todo")),
        });
        let plan = engine.tick(&mut viewport).unwrap();
        assert!(plan.inner.is_none());
    }

    #[test]
    fn test_gesture_end_cancels_pending_frame() {
        let mut engine = engine();
        let mut viewport = viewport();
        engine.pointer_moved(card_request(400.0, 150.0));
        engine.on_gesture_end(&GestureEnd {
            item: DraggableId::Card(CardId::from("c1")),
            outcome: GestureOutcome::Cancelled(CancelReason::Escape),
        });

        assert!(!engine.is_pending());
        assert!(engine.tick(&mut viewport).is_none());
        assert!(viewport.outer_scrolls.is_empty());
    }

    #[test]
    fn test_disabled_engine_ignores_pointer() {
        let mut engine = engine();
        engine.set_enabled(false);
        engine.pointer_moved(card_request(400.0, 150.0));
        assert!(!engine.is_pending());
    }

    #[test]
    fn test_progress_uses_candidate_list_then_source() {
        let progress = GestureProgress {
            item: DraggableId::Card(CardId::from("c1")),
            source: DropLocation::in_list(ListId::from("todo"), 0),
            pointer: Point::new(1.0, 2.0),
            candidate: Some(DropLocation::in_list(ListId::from("done"), 3)),
            candidate_changed: true,
        };
        assert_eq!(
            ScrollRequest::from_progress(&progress).inner,
            Some(ListId::from("done"))
        );

        let outside = GestureProgress {
            candidate: None,
            ..progress
        };
        assert_eq!(
            ScrollRequest::from_progress(&outside).inner,
            Some(ListId::from("todo"))
        );
    }
}
