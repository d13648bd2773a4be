//! Snapping grid.
//!
//! Holds the grid pitch, rounds raw positions to the nearest grid
//! intersection and lays out the background grid lines for a canvas.

use siteplan_core::PlanError;

use crate::model::Point;

/// Fixed-pitch snapping grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pitch: u32,
}

impl Grid {
    /// Creates a grid. A zero pitch is rejected.
    pub fn new(pitch: u32) -> Result<Self, PlanError> {
        if pitch == 0 {
            return Err(PlanError::InvalidGridPitch { pitch });
        }
        Ok(Self { pitch })
    }

    pub(crate) const fn new_unchecked(pitch: u32) -> Self {
        Self { pitch }
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    /// Rounds a coordinate to the nearest multiple of the pitch.
    ///
    /// Halfway values round away from zero. Results stay within the
    /// outermost multiples of the pitch that fit in an `i32`.
    pub fn snap(&self, value: f64) -> i32 {
        let pitch = f64::from(self.pitch);
        let snapped = (value / pitch).round() * pitch;
        let (min, max) = self.extent();
        snapped.clamp(min as f64, max as f64) as i32
    }

    /// Snaps to the nearest multiple of the pitch within `[low, high]`.
    ///
    /// Falls back to the nearest multiple at or above `low` when the range
    /// holds none.
    pub fn snap_within(&self, value: f64, low: i32, high: i32) -> i32 {
        let pitch = i64::from(self.pitch);
        let first = -(-i64::from(low)).div_euclid(pitch) * pitch;
        let last = i64::from(high).div_euclid(pitch) * pitch;
        let snapped = i64::from(self.snap(value));
        let (min, max) = self.extent();
        snapped.clamp(first, last.max(first)).clamp(min, max) as i32
    }

    /// Outermost multiples of the pitch representable as `i32`.
    fn extent(&self) -> (i64, i64) {
        let pitch = i64::from(self.pitch);
        let max = i64::from(i32::MAX) / pitch * pitch;
        let min = i64::from(i32::MIN) / pitch * pitch;
        (min, max)
    }

    pub fn snap_point(&self, x: f64, y: f64) -> Point {
        Point::new(self.snap(x), self.snap(y))
    }

    /// Whether a point lies on a grid intersection.
    pub fn is_on_grid(&self, point: &Point) -> bool {
        let pitch = self.pitch as i64;
        i64::from(point.x) % pitch == 0 && i64::from(point.y) % pitch == 0
    }

    /// Background grid for a `width` x `height` canvas.
    pub fn lines(&self, width: u32, height: u32) -> GridLines {
        grid_lines(width, height, self.pitch)
    }
}

/// Positions of the vertical and horizontal background lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLines {
    pub width: u32,
    pub height: u32,
    /// X offsets of vertical lines, from 0 up to and including `width`.
    pub vertical: Vec<u32>,
    /// Y offsets of horizontal lines, from 0 up to and including `height`.
    pub horizontal: Vec<u32>,
}

/// Lays out the background grid. A zero pitch yields no lines.
pub fn grid_lines(width: u32, height: u32, pitch: u32) -> GridLines {
    if pitch == 0 {
        return GridLines {
            width,
            height,
            ..GridLines::default()
        };
    }
    let step = pitch as usize;
    GridLines {
        width,
        height,
        vertical: (0..=width).step_by(step).collect(),
        horizontal: (0..=height).step_by(step).collect(),
    }
}
