//! Editor context for UI integration.
//!
//! [`EditorContext`] is the single writer of a [`PlanDocument`]: it owns the
//! document, the active tool's pending gesture, the selection and the undo
//! history. Callers feed it pointer events and toolbar actions, then repaint.
//!
//! Split into submodules:
//! - `gesture`: pointer start/move/end per tool
//! - `actions`: toolbar actions (undo/redo, clear, scale, delete)
//! - `file_io`: open/save against a survey record
//! - `prompt`: interactive input for room names and measurement labels

mod actions;
mod file_io;
mod gesture;
mod prompt;

pub use gesture::{EditOutcome, Gesture, PointerPhase};
pub use prompt::{AcceptDefaults, CancelAll, FixedPrompt, Prompt};

use siteplan_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_PITCH, DEFAULT_HISTORY_DEPTH,
    DEFAULT_ROOM_NAME, HIT_TOLERANCE,
};
use siteplan_core::PlanScale;

use crate::grid::Grid;
use crate::history::History;
use crate::input::CanvasRect;
use crate::model::{PlanDocument, Point, Room, Selection};
use crate::tools::Tool;

/// Editor behaviour knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Grid used for new plans.
    pub grid: Grid,
    /// Scale used for new plans.
    pub scale: PlanScale,
    pub clamp_to_canvas: bool,
    pub history_depth: usize,
    pub default_room_name: String,
    pub hit_tolerance: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            grid: Grid::new_unchecked(DEFAULT_GRID_PITCH),
            scale: PlanScale::default(),
            clamp_to_canvas: false,
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_room_name: DEFAULT_ROOM_NAME.to_string(),
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl EditorOptions {
    /// Canvas rectangle at the window origin.
    pub fn canvas_rect(&self) -> CanvasRect {
        CanvasRect::at_origin(f64::from(self.canvas_width), f64::from(self.canvas_height))
    }

    fn fresh_document(&self) -> PlanDocument {
        PlanDocument::with_settings(self.grid, self.scale)
    }
}

/// Transient geometry drawn on top of the plan while editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlay {
    /// Bounds `(min_x, min_y, max_x, max_y)` of the selected item.
    pub selection: Option<(i32, i32, i32, i32)>,
    pub preview: Option<GesturePreview>,
}

/// Uncommitted shape of the pending gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum GesturePreview {
    Room { origin: Point, width: u32, height: u32 },
    Measure { from: Point, to: Point },
}

/// Editing session over one plan.
#[derive(Debug, Clone)]
pub struct EditorContext {
    document: PlanDocument,
    history: History,
    pending: Option<Gesture>,
    selection: Option<Selection>,
    options: EditorOptions,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl EditorContext {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            document: options.fresh_document(),
            history: History::new(options.history_depth),
            pending: None,
            selection: None,
            options,
        }
    }

    /// Starts editing an existing document.
    pub fn with_document(document: PlanDocument, options: EditorOptions) -> Self {
        let mut editor = Self::new(options);
        editor.document = document;
        editor
    }

    pub fn document(&self) -> &PlanDocument {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn pending(&self) -> Option<&Gesture> {
        self.pending.as_ref()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn active_tool(&self) -> Tool {
        self.document.active_tool()
    }

    /// Switches tool. Any pending gesture is cancelled first.
    pub fn set_tool(&mut self, tool: Tool) {
        self.cancel_gesture();
        if tool != Tool::Select {
            self.selection = None;
        }
        self.document.set_active_tool(tool);
        tracing::debug!("Tool switched to {}", tool);
    }

    /// Drops the pending gesture and its uncommitted geometry.
    ///
    /// An in-progress stroke is removed from the plan.
    pub fn cancel_gesture(&mut self) {
        let Some(gesture) = self.pending.take() else {
            return;
        };
        if let Gesture::Drawing { element_index } = gesture {
            if self.document.remove_element(element_index).is_ok() {
                tracing::debug!("Discarded in-progress stroke {}", element_index);
            }
        }
    }

    /// Ends the session, discarding the plan and its history.
    pub fn close(&mut self) {
        self.cancel_gesture();
        self.reset();
    }

    /// Replaces the plan with a fresh empty one.
    pub fn reset(&mut self) {
        self.pending = None;
        self.selection = None;
        self.history.clear();
        self.document = self.options.fresh_document();
    }

    /// Selection highlight and gesture preview for the renderer.
    pub fn overlay(&self) -> Overlay {
        let selection = self
            .selection
            .and_then(|sel| self.document.selection_bounds(sel));
        let preview = match self.pending {
            Some(Gesture::Room { start, current }) => {
                let room = Room::from_corners(String::new(), start, current);
                Some(GesturePreview::Room {
                    origin: room.origin,
                    width: room.width,
                    height: room.height,
                })
            }
            Some(Gesture::Measure { start, current }) => Some(GesturePreview::Measure {
                from: start,
                to: current,
            }),
            Some(Gesture::Drawing { .. }) | None => None,
        };
        Overlay { selection, preview }
    }
}
