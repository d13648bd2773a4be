//! Headless command-line tools: render a stored plan, summarise it, and
//! manage the editor configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

use siteplan_designer::{
    render_svg, try_deserialize, Backdrop, EditorContext, JsonSurveyRecord, PlanDocument,
    PlanRenderer, SurveyRecord, PLAN_DATA_FIELD,
};
use siteplan_settings::Config;

use crate::{editor_options, render_options, PlanScale};

#[derive(Parser, Debug)]
#[command(name = "siteplan", version, about = "Job-site floor plan tools")]
pub struct Cli {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "SITEPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a plan to PNG or SVG
    Render(RenderArgs),
    /// Print a summary of a plan
    Inspect(InspectArgs),
    /// Change the display scale stored in a survey record
    Scale(ScaleArgs),
    /// Show or create the configuration file
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Survey record (JSON object with `plan_data`) or bare plan JSON
    pub input: PathBuf,

    /// Output file; defaults to the input name with the format's extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Image laid under the plan (PNG output only)
    #[arg(long)]
    pub backdrop: Option<PathBuf>,

    #[arg(long)]
    pub no_grid: bool,

    #[arg(long)]
    pub no_labels: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    pub input: PathBuf,

    /// Print the normalized `plan_data` JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Survey record to update in place
    pub record: PathBuf,

    /// New scale, e.g. `1:50` or `100`
    pub scale: PlanScale,
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path().context("locating config directory")?,
    };

    match cli.command {
        Command::Render(args) => run_render(&args, &load_config(&config_path)?),
        Command::Inspect(args) => run_inspect(&args, &load_config(&config_path)?),
        Command::Scale(args) => run_scale(&args, &load_config(&config_path)?),
        Command::Config(cmd) => run_config(cmd.command, &config_path),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = Config::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Reads a plan from either a survey record or a bare `plan_data` file.
///
/// Survey records go through the editor's open path, so damaged plan data
/// yields an empty plan. A bare plan file that cannot be parsed is an error.
pub fn load_plan(path: &Path, config: &Config) -> anyhow::Result<PlanDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    if value.get(PLAN_DATA_FIELD).is_some() {
        let record = JsonSurveyRecord::from_json(&text)?;
        let mut editor = EditorContext::new(editor_options(config)?);
        editor.open(&record);
        Ok(editor.document().clone())
    } else {
        try_deserialize(&text).with_context(|| format!("reading plan from {}", path.display()))
    }
}

fn run_render(args: &RenderArgs, config: &Config) -> anyhow::Result<()> {
    let doc = load_plan(&args.input, config)?;
    let mut options = render_options(config);
    if args.no_grid {
        options.show_grid = false;
    }
    if args.no_labels {
        options.draw_labels = false;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(args.format.extension()));
    let (width, height) = (config.canvas.width, config.canvas.height);

    match args.format {
        Format::Svg => {
            if args.backdrop.is_some() {
                tracing::warn!("Backdrop ignored for SVG output");
            }
            let svg = render_svg(&doc, width, height, &options);
            fs::write(&output, svg).with_context(|| format!("writing {}", output.display()))?;
        }
        Format::Png => {
            let mut renderer = PlanRenderer::with_options(width, height, options)?;
            if let Some(path) = &args.backdrop {
                let backdrop = Backdrop::from_path(path, width, height)
                    .with_context(|| format!("loading backdrop {}", path.display()))?;
                renderer.set_backdrop(Some(backdrop));
            }
            renderer.render(&doc, None);
            renderer.save_png(&output)?;
        }
    }

    tracing::info!("Rendered {} to {}", args.input.display(), output.display());
    println!("{}", output.display());
    Ok(())
}

/// Human-readable plan summary.
pub fn summary(doc: &PlanDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!("scale: {}\n", doc.scale()));
    out.push_str(&format!("grid: {} px\n", doc.grid_pitch()));
    out.push_str(&format!("tool: {}\n", doc.active_tool()));
    out.push_str(&format!("elements: {}\n", doc.elements().len()));

    let summaries = doc.room_summaries();
    out.push_str(&format!("rooms: {}\n", summaries.len()));
    for room in summaries {
        out.push_str(&format!(
            "  {}. {}: {}x{} px ({:.1}x{:.1} cells)\n",
            room.index + 1,
            room.name,
            room.width_px,
            room.height_px,
            room.width_cells,
            room.height_cells
        ));
    }

    out.push_str(&format!("measurements: {}\n", doc.measurements().len()));
    for m in doc.measurements() {
        out.push_str(&format!(
            "  ({}, {}) -> ({}, {}): {}\n",
            m.from.x,
            m.from.y,
            m.to.x,
            m.to.y,
            m.display_label()
        ));
    }
    out
}

fn run_inspect(args: &InspectArgs, config: &Config) -> anyhow::Result<()> {
    let doc = load_plan(&args.input, config)?;
    if args.json {
        println!("{}", siteplan_designer::serialize(&doc)?);
    } else {
        print!("{}", summary(&doc));
    }
    Ok(())
}

fn run_scale(args: &ScaleArgs, config: &Config) -> anyhow::Result<()> {
    rescale_record(&args.record, args.scale, config)?;
    println!("{}: scale {}", args.record.display(), args.scale);
    Ok(())
}

/// Rewrites the scale of the plan stored in a survey record file.
///
/// Unreadable plan data is an error and the file is left untouched.
pub fn rescale_record(path: &Path, scale: PlanScale, config: &Config) -> anyhow::Result<()> {
    let mut record = JsonSurveyRecord::load(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let options = editor_options(config)?;
    let mut editor = match record.plan_data() {
        Some(data) => {
            let doc = try_deserialize(data).with_context(|| {
                format!("{} holds unreadable plan data; not rewriting it", path.display())
            })?;
            EditorContext::with_document(doc, options)
        }
        None => EditorContext::new(options),
    };
    editor.set_scale(scale);
    editor.save(&mut record)?;
    record.save()?;
    Ok(())
}

fn run_config(command: ConfigSubcommand, path: &Path) -> anyhow::Result<()> {
    match command {
        ConfigSubcommand::Show => {
            let config = load_config(path)?;
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigSubcommand::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save_to_file(path)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
