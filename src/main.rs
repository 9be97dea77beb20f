//! lanegrid - Entry Point

use clap::{Parser, ValueEnum};
use lanegrid::config::{self, CliOverrides};
use lanegrid::host::{GridHost, VecItemSource};
use lanegrid::model::{AppError, Orientation};
use lanegrid::view::GridPreview;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Number of generated items when neither `--items` nor `--count` is given.
const DEFAULT_ITEM_COUNT: usize = 100;

/// Output format for the final layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Placements and lane edges as pretty-printed JSON
    Json,
    /// Text rendering of the viewport
    Preview,
}

/// lanegrid - lay out a staggered grid and print the result
#[derive(Parser, Debug)]
#[command(name = "lanegrid")]
#[command(version)]
#[command(about = "Lay out items into a staggered grid and report the visible window")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of lanes (overrides config)
    #[arg(short = 'n', long)]
    pub lanes: Option<usize>,

    /// Scroll axis (overrides config)
    #[arg(short, long)]
    pub orientation: Option<Orientation>,

    /// Container width in layout units (overrides config)
    #[arg(long)]
    pub width: Option<i32>,

    /// Container height in layout units (overrides config)
    #[arg(long)]
    pub height: Option<i32>,

    /// JSON file holding an array of main-axis item extents
    #[arg(short, long, conflicts_with = "count")]
    pub items: Option<PathBuf>,

    /// Generate this many items with varied extents
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Scroll by this many layout units after the first layout (repeatable)
    #[arg(short, long, allow_hyphen_values = true)]
    pub scroll: Vec<i32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            lane_count: self.lanes,
            orientation: self.orientation,
            width: self.width,
            height: self.height,
        }
    }
}

fn load_source(args: &Args) -> Result<VecItemSource, AppError> {
    match &args.items {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            let extents: Vec<i32> = serde_json::from_str(&contents)?;
            Ok(VecItemSource::new(extents))
        }
        None => Ok(VecItemSource::generated(
            args.count.unwrap_or(DEFAULT_ITEM_COUNT),
            40,
            120,
        )),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file)?;
        let with_env = config::apply_env_overrides(merged)?;
        config::apply_cli_overrides(with_env, args.overrides())?
    };

    lanegrid::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = load_source(&args)?;
    let mut host = GridHost::new(config.to_engine(), source);
    host.layout()?;

    for delta in &args.scroll {
        let applied = host.scroll_by(*delta)?;
        info!(requested = *delta, applied, "Applied scroll");
    }

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&host.snapshot())?;
            writeln!(stdout, "{json}")?;
        }
        OutputFormat::Preview => {
            let scale = config.cell_scale;
            let cols = u16::try_from(config.width / scale).unwrap_or(u16::MAX);
            let rows = u16::try_from(config.height / scale).unwrap_or(u16::MAX);
            let text = GridPreview::from_host(&host, scale).render_text(cols, rows);
            writeln!(stdout, "{text}")?;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
