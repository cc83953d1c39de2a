//! Screen-space geometry shared by layout, hit-testing and auto-scroll.
//!
//! Coordinates are `f64` in whatever unit the host measures in (CSS pixels in
//! a browser host, cells in the terminal host). `y` grows downwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn delta_to(&self, other: Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Axis-aligned bounding box, the equivalent of a client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the box along `axis`, used for insertion tie-breaks.
    pub fn midpoint(&self, axis: Axis) -> f64 {
        self.center().along(axis)
    }

    /// Half-open: the right and bottom edges belong to the next box, so
    /// boxes laid edge to edge never both claim a point. A cell at `(x, y)`
    /// is inside when its top-left corner is.
    pub fn contains(&self, point: Point) -> bool {
        self.spans_x(point.x) && point.y >= self.top() && point.y < self.bottom()
    }

    pub fn spans_x(&self, x: f64) -> bool {
        x >= self.left() && x < self.right()
    }

    pub fn translate(&self, by: Vector) -> Self {
        Self::new(self.x + by.dx, self.y + by.dy, self.width, self.height)
    }

    /// Linear interpolation of the origin towards `to`; size is kept from `self`.
    pub fn lerp(&self, to: &Rect, t: f64) -> Self {
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.width,
            self.height,
        )
    }
}
