//! Wiring. Entry point: parse CLI, load config, pick the loader, run the report.
//! No loading logic here; everything is delegated to the meeting use case.

use clap::Parser;
use dotenv::dotenv;
use meeting_loader::adapters::ui::ConsoleReporter;
use meeting_loader::shared::config::AppConfig;
use meeting_loader::shared::logging::init_tracing;
use meeting_loader::usecases::{self, ParticipantPaths, RunOutcome};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "meeting-loader", version, about = "Load a meeting and its participants")]
struct Cli {
    /// Meeting file (overrides config)
    meeting: Option<PathBuf>,

    /// Data format: json or xml (overrides config)
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Resolve participant files against the working directory instead of the meeting file
    #[arg(long)]
    cwd_relative: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_loaded = dotenv();
    init_tracing(cli.verbose);

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = match &cli.config {
        Some(path) => AppConfig::load_from(Some(path.as_path()))?,
        None => AppConfig::load()?,
    };

    let format = cli
        .format
        .clone()
        .unwrap_or_else(|| cfg.format_or_default().to_string());
    let meeting_path = cli
        .meeting
        .clone()
        .unwrap_or_else(|| PathBuf::from(cfg.meeting_path_or_default()));
    let resolution = if cli.cwd_relative || !cfg.participants_relative_to_meeting_or_default() {
        ParticipantPaths::AsIs
    } else {
        ParticipantPaths::RelativeToMeeting
    };
    info!(%format, meeting = %meeting_path.display(), ?resolution, "starting");

    let mut reporter = ConsoleReporter::stdout();
    match usecases::run(&format, &meeting_path, resolution, &mut reporter)? {
        RunOutcome::Completed { participants } => info!(participants, "done"),
        RunOutcome::UnsupportedFormat => info!("nothing loaded"),
    }

    Ok(())
}
