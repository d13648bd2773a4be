//! Pointer input normalization.
//!
//! Mouse and touch events are reduced to the same snapped canvas [`Point`],
//! so the editor never needs to know which device produced a gesture.

use crate::grid::Grid;
use crate::model::Point;

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    Mouse,
    /// Single-finger touch. Multi-touch is reduced to the first touch point.
    Touch,
}

/// Pointer position in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointer {
    pub client_x: f64,
    pub client_y: f64,
    pub device: PointerDevice,
}

impl RawPointer {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            device: PointerDevice::Mouse,
        }
    }

    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            device: PointerDevice::Touch,
        }
    }
}

/// On-screen bounding rectangle of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Canvas placed at the window origin.
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Converts a raw pointer to a grid-snapped canvas point.
///
/// Positions outside the canvas are kept as-is unless `clamp` is set, in
/// which case the point lands on the nearest grid intersection inside the
/// canvas.
pub fn normalize(raw: &RawPointer, rect: &CanvasRect, grid: &Grid, clamp: bool) -> Point {
    let x = raw.client_x - rect.left;
    let y = raw.client_y - rect.top;
    if clamp {
        let right = rect.width.max(0.0).floor().min(f64::from(i32::MAX)) as i32;
        let bottom = rect.height.max(0.0).floor().min(f64::from(i32::MAX)) as i32;
        Point::new(grid.snap_within(x, 0, right), grid.snap_within(y, 0, bottom))
    } else {
        grid.snap_point(x, y)
    }
}
