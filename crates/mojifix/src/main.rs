use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mojifix::{ConfigFile, RepairConfig, default_output_path, repair_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "teste.xlsx";

#[derive(Parser, Debug)]
#[command(
    name = "mojifix",
    version,
    about = "Repair mojibake and percent-encoded URLs in every sheet of an .xlsx workbook"
)]
struct Cli {
    /// Workbook to repair. Defaults to `teste.xlsx` next to the executable.
    input: Option<PathBuf>,

    /// Where to write the corrected copy. Defaults to
    /// `<stem>_unicode_allpages.xlsx` beside the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML options file (thresholds, fallback chain, fill colour, extra replacements).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the repair summary as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn default_input() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the executable")?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_INPUT))
}

fn load_config(path: Option<&Path>) -> Result<RepairConfig> {
    let file = match path {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    Ok(file.into_config()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let input = match cli.input {
        Some(path) => path,
        None => default_input()?,
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&input));

    let summary = match repair_file(&input, Some(&output), &config) {
        Ok(summary) => summary,
        Err(err) if err.is_not_found() => {
            println!("Error: The file '{}' was not found.", input.display());
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("repairing `{}`", input.display()));
        }
    };

    info!(
        visited = summary.visited,
        repaired = summary.repaired,
        cache_hits = summary.cache_hits,
        unrecoverable = summary.unrecoverable,
        "summary"
    );
    if let Some(report) = &cli.report {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report, json)
            .with_context(|| format!("writing report `{}`", report.display()))?;
    }

    println!("Workbook saved as '{}'", output.display());
    Ok(())
}
