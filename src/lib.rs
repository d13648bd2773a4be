//! # SitePlan
//!
//! Floor-plan sketching for job-site surveys. A technician visiting a
//! plumbing or heating job sketches the premises on a snapping grid (walls,
//! named rooms, doors, windows and dimensions) and the sketch is stored with
//! the survey record as a JSON `plan_data` string.
//!
//! ## Architecture
//!
//! SitePlan is organized as a workspace with multiple crates:
//!
//! 1. **siteplan-core** - Error taxonomy, plan scale, shared defaults
//! 2. **siteplan-designer** - Plan model, editor state machine, undo history,
//!    rendering and `plan_data` persistence
//! 3. **siteplan-settings** - Editor configuration (TOML/JSON)
//! 4. **siteplan** - Headless command-line tools built on the above

pub mod cli;

pub use siteplan_designer as designer;
pub use siteplan_settings as settings;

pub use siteplan_core::{Error, ExportError, PlanError, PlanScale, Result, StoreError};

pub use siteplan_designer::{
    AcceptDefaults, CancelAll, EditOutcome, EditorContext, EditorOptions, FixedPrompt, Grid,
    JsonSurveyRecord, PlanDocument, PlanRenderer, Point, Prompt, RenderOptions, SurveyRecord, Tool,
};

pub use siteplan_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Editor options for a configuration.
pub fn editor_options(config: &Config) -> std::result::Result<EditorOptions, PlanError> {
    Ok(EditorOptions {
        canvas_width: config.canvas.width,
        canvas_height: config.canvas.height,
        grid: Grid::new(config.canvas.grid_pitch)?,
        scale: config.canvas.default_scale,
        clamp_to_canvas: config.canvas.clamp_to_canvas,
        history_depth: config.editor.history_depth,
        default_room_name: config.editor.default_room_name.clone(),
        hit_tolerance: config.editor.hit_tolerance,
    })
}

/// Render options for a configuration.
pub fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        show_grid: config.render.show_grid,
        backdrop_opacity: config.render.backdrop_opacity,
        label_font_family: config.render.label_font_family.clone(),
        room_label_size: config.render.room_label_size,
        measurement_label_size: config.render.measurement_label_size,
        draw_labels: true,
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
