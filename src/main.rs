use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use wml_core::config::Config;
use wml_core::parse::parse_timestamp;
use wml_core::Severity;
use wml_query::{render, LogQuery, Queryable};

#[derive(Parser)]
#[command(
    name = "wml",
    about = "Weave My Logs — time-ordered queries across multiple log files"
)]
struct Cli {
    /// Config file listing sources and query defaults.
    #[arg(long, default_value = "wml.toml")]
    config: PathBuf,

    /// Return entries strictly after this timestamp, given in the log
    /// format (MM/DD/YYYY H:MM:SS.CC).
    #[arg(long, conflicts_with = "last_hours")]
    since: Option<String>,

    /// Return entries from the last N hours instead of an absolute start.
    #[arg(long)]
    last_hours: Option<i64>,

    /// Maximum number of entries to return.
    #[arg(long)]
    limit: Option<usize>,

    /// Lowest severity to include: debug, info, warn, error, or fatal.
    #[arg(long)]
    min_severity: Option<Severity>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Source keys to query; every loaded source when omitted.
    sources: Vec<String>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    let limit = cli.limit.unwrap_or(config.query.limit);
    let min_severity = match cli.min_severity {
        Some(severity) => severity,
        None => config.query.min_severity.parse().with_context(|| {
            format!(
                "invalid min_severity {:?} in config",
                config.query.min_severity
            )
        })?,
    };
    let start = match &cli.since {
        Some(text) => parse_timestamp(text).with_context(|| format!("invalid --since {text:?}"))?,
        None => {
            let hours = cli.last_hours.unwrap_or(config.query.last_hours);
            window_start(chrono::Local::now().naive_local(), hours)?
        }
    };

    let mapping: HashMap<String, PathBuf> = config
        .sources
        .iter()
        .map(|(key, path)| (key.clone(), PathBuf::from(path)))
        .collect();
    if mapping.is_empty() {
        tracing::warn!(config = %cli.config.display(), "no sources configured");
    }

    let engine = LogQuery::load(mapping).await?;
    tracing::info!(
        sources = engine.registry().len(),
        dropped = engine.report().dropped.len(),
        "registry ready"
    );

    let keys = if cli.sources.is_empty() {
        let mut keys: Vec<String> = engine.registry().keys().map(str::to_string).collect();
        keys.sort();
        keys
    } else {
        cli.sources.clone()
    };

    let results = engine.query(start, limit, &keys, min_severity).await;

    match cli.format {
        Format::Text => {
            if !results.is_empty() {
                println!("{}", render(&results));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    Ok(())
}

/// Start bound for a `--last-hours` window. Windows too large for a
/// `chrono::Duration`, or reaching outside the representable calendar, are
/// errors rather than panics.
fn window_start(now: chrono::NaiveDateTime, hours: i64) -> anyhow::Result<chrono::NaiveDateTime> {
    let window = chrono::Duration::try_hours(hours)
        .with_context(|| format!("--last-hours {hours} is out of range"))?;
    now.checked_sub_signed(window)
        .with_context(|| format!("--last-hours {hours} reaches outside the representable calendar"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
