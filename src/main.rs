use anyhow::Context;
use banlist_core::config::Config;
use banlist_core::listfile::{self, Mode};
use banlist_core::{NormalizeReport, Outcome};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "banlist",
    version,
    about = "Normalize a banned-function list: strip comments and invisible characters, dedup, sort"
)]
struct Cli {
    /// List file to normalize. Defaults to `list.path` from the config.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Do not write; exit with status 1 if the list is not normalized.
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the normalized list to stdout instead of rewriting the file.
    #[arg(long)]
    stdout: bool,

    /// Print a JSON report instead of the summary line.
    #[arg(long, conflicts_with = "stdout")]
    json: bool,

    /// Config file to use instead of ./banlist.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level to stderr (otherwise RUST_LOG, default warn).
    #[arg(long)]
    debug: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    changed: bool,
    #[serde(flatten)]
    report: &'a NormalizeReport,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load_from(cli.config.as_deref()).context("loading banlist config")?;
    tracing::debug!(config_file = ?cli.config, list_path = %config.list.path.display(), "loaded config");
    let path = cli.path.clone().unwrap_or_else(|| config.list.path.clone());

    let mode = if cli.check {
        Mode::Check
    } else if cli.stdout {
        Mode::Preview
    } else {
        Mode::Rewrite
    };

    tracing::info!(path = %path.display(), ?mode, "processing banned list");

    let outcome = listfile::process(&path, mode)?;
    tracing::debug!(changed = outcome.changed, entries = outcome.report.entries, "done");

    if cli.json {
        print_json(&outcome)?;
    } else if cli.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(banlist_core::render(&outcome.entries).as_bytes())?;
    } else if cli.check {
        if outcome.changed {
            eprintln!("{} is not normalized", outcome.path.display());
        }
    } else if config.output.summary {
        println!(
            "Normalized {} entries to {}",
            outcome.report.entries,
            outcome.path.display()
        );
    }

    if cli.check && outcome.changed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json(outcome: &Outcome) -> anyhow::Result<()> {
    let report = JsonReport {
        path: outcome.path.display().to_string(),
        changed: outcome.changed,
        report: &outcome.report,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}
