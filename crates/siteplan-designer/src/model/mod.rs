//! Plan document model.
//!
//! A plan is three independent ordered sequences (drawn elements, rooms
//! and dimension annotations) plus the grid/scale metadata they were drawn
//! with. Every coordinate stored here has already been snapped by the
//! caller; the model never snaps on its own.

mod document;
mod element;
mod measurement;
mod room;

pub use document::{PlanContents, PlanDocument, RoomSummary};
pub use element::{DrawElement, Fixture, FixtureKind, PolyLine, FIXTURE_HEIGHT, FIXTURE_WIDTH};
pub use measurement::Measurement;
pub use room::Room;

use serde::{Deserialize, Serialize};

/// A canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two points, unrounded.
    pub fn midpoint(&self, other: &Point) -> (f64, f64) {
        (
            (f64::from(self.x) + f64::from(other.x)) / 2.0,
            (f64::from(self.y) + f64::from(other.y)) / 2.0,
        )
    }

    /// Distance from this point to the segment `a`-`b`.
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        let (px, py) = (f64::from(self.x), f64::from(self.y));
        let (ax, ay) = (f64::from(a.x), f64::from(a.y));
        let (bx, by) = (f64::from(b.x), f64::from(b.y));
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.distance_to(a);
        }
        let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
        let (cx, cy) = (ax + t * dx, ay + t * dy);
        ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
    }
}

/// Something in the plan the select tool can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Index into [`PlanDocument::elements`].
    Element(usize),
    /// Index into [`PlanDocument::rooms`].
    Room(usize),
}
