//! Painting of the dragged item.
//!
//! A dragged list or card is lifted out of its scroll container and painted
//! after everything else, so no ancestor clip or stacking order can hide
//! it. The renderer only reads [`DragSnapshot`]s; it has no say in where the
//! item lands. Hit-testing never consults overlay rects.

use std::time::Duration;

use tacky_core::{Point, Rect};

use crate::session::{DragKind, DragSnapshot, DraggableId};

/// CSS-style cubic Bézier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

const EPSILON: f64 = 1e-6;

fn bezier_sample(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn ease(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        bezier_sample(self.y1, self.y2, self.solve_t(x))
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let error = bezier_sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = bezier_slope(self.x1, self.x2, t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled; bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let sample = bezier_sample(self.x1, self.x2, t);
            if (sample - x).abs() < EPSILON {
                break;
            }
            if sample < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

pub const DROP_EASING: CubicBezier = CubicBezier::new(0.2, 1.0, 0.2, 1.0);
pub const DROP_DURATION: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: DROP_DURATION,
            easing: DROP_EASING,
        }
    }
}

/// Drag feedback for one kind of draggable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayOptions {
    pub drag_z_index: Option<i32>,
    pub drag_opacity: Option<f32>,
    pub drop_transition: Transition,
}

impl OverlayOptions {
    pub fn list() -> Self {
        Self {
            drag_z_index: Some(30),
            drag_opacity: None,
            drop_transition: Transition::default(),
        }
    }

    pub fn card() -> Self {
        Self {
            drag_z_index: Some(40),
            drag_opacity: Some(0.98),
            drop_transition: Transition::default(),
        }
    }

    pub fn for_kind(kind: DragKind) -> Self {
        match kind {
            DragKind::List => Self::list(),
            DragKind::Card => Self::card(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragStyle {
    pub z_index: Option<i32>,
    pub opacity: Option<f32>,
    pub transition: Option<Transition>,
}

pub fn build_drag_style(snapshot: DragSnapshot, options: &OverlayOptions) -> DragStyle {
    let mut style = DragStyle::default();
    if snapshot.is_dragging {
        style.z_index = options.drag_z_index;
        style.opacity = options.drag_opacity;
    }
    if snapshot.is_drop_animating {
        style.transition = Some(options.drop_transition);
    }
    style
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    InFlow,
    Overlay,
}

/// Eases an item from where it was let go to its resting slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DropAnimation {
    pub item: DraggableId,
    from: Rect,
    to: Rect,
    elapsed: Duration,
    transition: Transition,
}

impl DropAnimation {
    pub fn new(item: DraggableId, from: Rect, to: Rect, transition: Transition) -> Self {
        Self {
            item,
            from,
            to,
            elapsed: Duration::ZERO,
            transition,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.transition.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.transition.duration
    }

    pub fn progress(&self) -> f64 {
        if self.transition.duration.is_zero() {
            return 1.0;
        }
        let linear = self.elapsed.as_secs_f64() / self.transition.duration.as_secs_f64();
        self.transition.easing.ease(linear)
    }

    pub fn current(&self) -> Rect {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(&self.to, self.progress())
    }
}

/// Something an item can be painted onto.
pub trait RenderLayer<N: ?Sized> {
    fn paint(&mut self, node: &N, rect: Rect, style: &DragStyle);
}

pub struct RenderItem<'a, N: ?Sized> {
    pub id: &'a DraggableId,
    pub node: &'a N,
    /// In-flow layout rect.
    pub layout: Rect,
    pub snapshot: DragSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
struct Lifted {
    item: DraggableId,
    layout: Rect,
    grab: Point,
    pointer: Point,
}

impl Lifted {
    fn rect(&self) -> Rect {
        self.layout.translate(self.grab.delta_to(self.pointer))
    }
}

#[derive(Debug, Default)]
pub struct OverlayRenderer {
    lifted: Option<Lifted>,
    dropping: Option<DropAnimation>,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifts `item`, grabbed at `pointer` while laid out at `layout`.
    pub fn lift(&mut self, item: DraggableId, layout: Rect, pointer: Point) {
        self.dropping = None;
        self.lifted = Some(Lifted {
            item,
            layout,
            grab: pointer,
            pointer,
        });
    }

    pub fn track(&mut self, pointer: Point) {
        if let Some(lifted) = &mut self.lifted {
            lifted.pointer = pointer;
        }
    }

    /// Starts the drop animation towards `resting`.
    pub fn settle(&mut self, resting: Rect) {
        if let Some(lifted) = self.lifted.take() {
            let transition = OverlayOptions::for_kind(lifted.item.kind()).drop_transition;
            self.dropping = Some(DropAnimation::new(
                lifted.item.clone(),
                lifted.rect(),
                resting,
                transition,
            ));
        }
    }

    /// Advances the drop animation. Returns the item once it is back in flow.
    pub fn advance(&mut self, dt: Duration) -> Option<DraggableId> {
        let animation = self.dropping.as_mut()?;
        animation.advance(dt);
        if animation.is_finished() {
            return self.dropping.take().map(|a| a.item);
        }
        None
    }

    pub fn is_animating(&self) -> bool {
        self.dropping.is_some()
    }

    pub fn placement(&self, snapshot: DragSnapshot) -> Placement {
        if snapshot.is_detached() {
            Placement::Overlay
        } else {
            Placement::InFlow
        }
    }

    /// Where the detached `item` is painted right now.
    pub fn overlay_rect(&self, item: &DraggableId) -> Option<Rect> {
        if let Some(lifted) = self.lifted.as_ref().filter(|l| &l.item == item) {
            return Some(lifted.rect());
        }
        self.dropping
            .as_ref()
            .filter(|a| &a.item == item)
            .map(DropAnimation::current)
    }

    /// Paints in-flow items first, then every detached item on `overlay`.
    pub fn paint_all<'a, N, I, F, O>(&self, items: I, flow: &mut F, overlay: &mut O)
    where
        N: ?Sized + 'a,
        I: IntoIterator<Item = RenderItem<'a, N>>,
        F: RenderLayer<N> + ?Sized,
        O: RenderLayer<N> + ?Sized,
    {
        let mut detached = Vec::new();
        for item in items {
            match self.placement(item.snapshot) {
                Placement::InFlow => flow.paint(item.node, item.layout, &DragStyle::default()),
                Placement::Overlay => detached.push(item),
            }
        }
        for item in detached {
            let rect = self.overlay_rect(item.id).unwrap_or(item.layout);
            let style = build_drag_style(item.snapshot, &OverlayOptions::for_kind(item.id.kind()));
            overlay.paint(item.node, rect, &style);
        }
    }
}
