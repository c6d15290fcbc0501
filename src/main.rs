//! CLI entry point for the hoops ranker.
//!
//! Loads a season leaders CSV, ranks every player by the chosen method,
//! prints the leaderboard and threshold counts, and saves the full ranking.

mod menu;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use hoops_ranker::{
    output::{SummaryReport, ThresholdSummary, write_json, write_ranking_csv, write_top},
    parser::load_players,
    ranker::rank_players,
    scoring::ScoringMethod,
    stats::compute_per_game,
};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "hoops_ranker")]
#[command(about = "Rank basketball players from a season stats CSV", long_about = None)]
struct Cli {
    /// Source stats CSV
    #[arg(short, long, default_value = "alltimeleaders.csv")]
    input: PathBuf,

    /// Where to write the full ranking
    #[arg(short, long, default_value = "nba_ranking.csv")]
    output: PathBuf,

    /// Number of players on the leaderboard
    #[arg(short = 'n', long, default_value_t = hoops_ranker::output::DEFAULT_TOP_N)]
    top: usize,

    /// Ranking method; prompts when omitted
    #[arg(short, long, value_enum)]
    method: Option<ScoringMethod>,

    /// Also print the threshold summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/hoops_ranker.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("hoops_ranker.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let records = load_players(&cli.input)?;
    let players = compute_per_game(records);

    let method = match cli.method {
        Some(method) => method,
        None => menu::prompt_method(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    info!(%method, players = players.len(), "Ranking players");

    let ranked = rank_players(players, method);

    let mut stdout = io::stdout().lock();
    write_top(&mut stdout, &ranked, cli.top)?;

    let summary = ThresholdSummary::from_players(&ranked);
    summary.write(&mut stdout)?;
    if cli.json {
        let report = SummaryReport {
            generated_at: Utc::now(),
            method: method.label(),
            players: ranked.len(),
            thresholds: &summary,
        };
        write_json(&mut stdout, &report)?;
    }

    write_ranking_csv(&cli.output, &ranked)?;
    writeln!(stdout)?;
    writeln!(stdout, "Full ranking saved to {}", cli.output.display())?;

    Ok(())
}
