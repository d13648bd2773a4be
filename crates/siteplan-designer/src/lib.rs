//! # SitePlan Designer
//!
//! Floor-plan sketch editor attached to job-site surveys. A technician
//! sketches the premises on a snapping grid: freehand walls, named rooms,
//! doors, windows and dimension annotations. The sketch travels with the
//! survey as a JSON string in its `plan_data` field.
//!
//! ## Core Components
//!
//! - **Model**: [`PlanDocument`] holding elements, rooms and measurements
//! - **Grid / Input**: pointer events snapped to the grid pitch
//! - **Editor**: [`EditorContext`], the tool state machine and single writer
//! - **History**: bounded undo/redo of [`PlanCommand`]s
//! - **Rendering**: raster ([`PlanRenderer`]) and SVG output
//! - **Persistence**: `plan_data` (de)serialization and [`SurveyRecord`]
//!
//! ## Architecture
//!
//! ```text
//! pointer event
//!   └── input::normalize  (client -> snapped canvas point)
//!         └── EditorContext  (active tool, pending gesture)
//!               ├── PlanDocument  (mutated in place)
//!               └── History       (undoable commands)
//! PlanRenderer::render(doc, overlay)  (full repaint)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use siteplan_designer::{AcceptDefaults, EditorContext, Point, Tool};
//!
//! let mut editor = EditorContext::default();
//! editor.set_tool(Tool::Room);
//! editor.start(Point::new(0, 0));
//! editor.move_to(Point::new(100, 60));
//! editor.end(Point::new(100, 60), &mut AcceptDefaults);
//! ```

pub mod backdrop;
pub mod commands;
pub mod editor;
pub mod font_manager;
pub mod grid;
pub mod history;
pub mod input;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod survey;
pub mod svg_renderer;
pub mod tools;

pub use backdrop::Backdrop;
pub use commands::PlanCommand;
pub use editor::{
    AcceptDefaults, CancelAll, EditOutcome, EditorContext, EditorOptions, FixedPrompt, Gesture,
    GesturePreview, Overlay, PointerPhase, Prompt,
};
pub use grid::{grid_lines, Grid, GridLines};
pub use history::History;
pub use input::{normalize, CanvasRect, PointerDevice, RawPointer};
pub use model::{
    DrawElement, Fixture, FixtureKind, Measurement, PlanContents, PlanDocument, Point, PolyLine,
    Room, RoomSummary, Selection,
};
pub use renderer::{PlanRenderer, RenderOptions};
pub use serialization::{deserialize, serialize, try_deserialize, PlanFile};
pub use survey::{JsonSurveyRecord, SurveyRecord, PLAN_DATA_FIELD};
pub use svg_renderer::render_svg;
pub use tools::Tool;
