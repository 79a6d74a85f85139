//! uxreport CLI - Survey Report Renderer
//!
//! Command-line interface for validating survey reports, rendering them to
//! HTML, SVG, Mermaid or text, and computing chart layouts from JSON.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uxreport_chart::{layout_plan, validate_report, PieLayout};
use uxreport_core::{CategoryCount, Renderer, TimelinePlan, ZeroTotalPolicy};
use uxreport_render::{HtmlReportRenderer, MermaidRenderer, SvgPieRenderer, TextRenderer};

#[derive(Parser)]
#[command(name = "uxreport")]
#[command(author, version, about = "Survey report renderer", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report
    Render {
        /// Report file (TOML), or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a report and validate every chart in it
    Check {
        /// Report file (TOML), or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute pie segments from a JSON list of {label, count}
    Pie {
        /// Input file (JSON), or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Render all-zero input as 0% slices instead of failing
        #[arg(long)]
        show_zero: bool,
    },

    /// Compute timeline bar placement from a JSON plan
    Timeline {
        /// Input file (JSON), or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Write the bundled sample report
    Init {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone HTML page
    Html,
    /// First pie chart as an SVG document
    Svg,
    /// Mermaid chart blocks in Markdown
    Mermaid,
    /// Plain-text summary
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Render {
            file,
            format,
            output,
        } => cmd_render(&file, format, output.as_deref()),
        Commands::Check { file } => cmd_check(&file),
        Commands::Pie { file, show_zero } => cmd_pie(&file, show_zero),
        Commands::Timeline { file } => cmd_timeline(&file),
        Commands::Init { output } => cmd_init(&output),
    }
}

fn cmd_render(file: &Path, format: Format, output: Option<&Path>) -> Result<()> {
    let report = config::load_report(file)?;
    info!(?format, "rendering {}", file.display());

    let rendered = match format {
        Format::Html => HtmlReportRenderer::new().render(&report),
        Format::Svg => SvgPieRenderer::new().render(&report),
        Format::Mermaid => MermaidRenderer::new().render(&report),
        Format::Text => TextRenderer::new().render(&report),
    }
    .with_context(|| format!("Failed to render {}", file.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn cmd_check(file: &Path) -> Result<()> {
    let report = config::load_report(file)?;
    let summary = validate_report(&report)
        .with_context(|| format!("Invalid report {}", file.display()))?;
    debug!(?summary, "report validated");

    println!(
        "OK: {} ({} sections, {} pie charts, {} bar charts, {} timelines, {} phases)",
        report.title,
        summary.sections,
        summary.pie_charts,
        summary.bar_charts,
        summary.timelines,
        summary.phases
    );
    Ok(())
}

fn cmd_pie(file: &Path, show_zero: bool) -> Result<()> {
    let data: Vec<CategoryCount> = config::load_json(file)?;
    let policy = if show_zero {
        ZeroTotalPolicy::ShowZero
    } else {
        ZeroTotalPolicy::Reject
    };

    let segments = PieLayout::new()
        .zero_total(policy)
        .segments(&data)
        .context("Failed to lay out pie chart")?;
    println!("{}", serde_json::to_string_pretty(&segments)?);
    Ok(())
}

fn cmd_timeline(file: &Path) -> Result<()> {
    let plan: TimelinePlan = config::load_json(file)?;
    let (_, layouts) = layout_plan(&plan).context("Failed to lay out timeline")?;
    println!("{}", serde_json::to_string_pretty(&layouts)?);
    Ok(())
}

fn cmd_init(dir: &Path) -> Result<()> {
    let path = dir.join(config::SAMPLE_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, config::SAMPLE_REPORT)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  uxreport check {}", path.display());
    println!("  uxreport render {} -o report.html", path.display());
    Ok(())
}
