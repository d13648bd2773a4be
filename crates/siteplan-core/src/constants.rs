//! Shared defaults for the plan editor.

/// Logical canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Logical canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Snapping unit in pixels.
pub const DEFAULT_GRID_PITCH: u32 = 20;

/// Undo stack depth.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Pre-filled answer of the room name prompt.
pub const DEFAULT_ROOM_NAME: &str = "Pièce";

/// Opacity of an imported backdrop image.
pub const BACKDROP_OPACITY: f32 = 0.5;

/// Pick radius for the select tool, in pixels.
pub const HIT_TOLERANCE: f64 = 6.0;
