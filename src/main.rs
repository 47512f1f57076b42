use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use floorplan::config::{EditorConfig, CONFIG_FILE_NAME};
use floorplan::layout::{rectangles_from_json, vertex_records};
use floorplan::model::Editor;
use floorplan::operations::BoundaryVertices;
use floorplan::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extracts boundary vertices from a JSON list of drawn rectangles.
#[derive(Debug, Parser)]
#[command(name = "floorplan-boundary", version)]
struct Args {
    /// Rectangle list as JSON (`[{"x":..,"y":..,"width":..,"height":..}]`); stdin if omitted
    input: Option<PathBuf>,

    /// Configuration file (defaults to ./floorplan.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the vertex merge tolerance
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Emit a full layout description instead of the bare vertex list
    #[arg(long)]
    layout: bool,
}

/// WARN for everything, INFO for this crate.
const DEFAULT_LOG_FILTER: &str = "warn,floorplan=info,floorplan_boundary=info";

/// Builds the log filter. A non-empty, parseable `RUST_LOG` replaces the
/// defaults entirely (e.g. `RUST_LOG=floorplan=debug`).
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.is_file() {
                EditorConfig::load(&local)?
            } else {
                EditorConfig::default()
            }
        }
    };
    if let Some(tolerance) = args.tolerance {
        config.boundary.tolerance = tolerance;
    }

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let rects = rectangles_from_json(&text)?;
    info!(count = rects.len(), "read boundary rectangles");

    let output = if args.layout {
        let mut editor = Editor::new(config);
        for rect in rects {
            editor.canvas_mut().add_rectangle(rect);
        }
        editor.layout().to_json_pretty()?
    } else {
        let vertices = BoundaryVertices::new(&rects)
            .with_tolerance(config.boundary.tolerance)
            .execute();
        serde_json::to_string_pretty(&vertex_records(&vertices))?
    };
    println!("{output}");
    Ok(())
}
