//! `bias-lens` - score an article from a file or stdin and print the report as JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bias_lens::application::build_analyzer;
use bias_lens::config::AppConfig;
use bias_lens::telemetry::init_logging;

/// Multi-signal political bias scoring for article text.
#[derive(Debug, Parser)]
#[command(name = "bias-lens", version, about)]
struct Cli {
    /// Article text file. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,

    /// Disable the random score perturbation for reproducible output.
    #[arg(long)]
    no_perturbation: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if cli.no_perturbation {
        config.analysis.perturbation_enabled = false;
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config.logging.level, config.logging.format);

    let analyzer = build_analyzer(&config)?;
    let text = read_input(cli.file.as_ref())?;

    let report = analyzer.analyze_text(&text).await;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
