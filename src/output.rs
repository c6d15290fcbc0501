//! Report emission for a ranked player list.
//!
//! Supports the top-N leaderboard, threshold counts (as text or JSON), and
//! the full ranking written to CSV.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ranker::RankedPlayer;

pub const DEFAULT_TOP_N: usize = 10;

pub const HIGH_SCORER_PPG: f64 = 25.0;
pub const TOP_REBOUNDER_RPG: f64 = 10.0;
pub const TOP_ASSISTER_APG: f64 = 5.0;

/// Rounds to two decimal places the same way `{:.2}` prints: exact binary
/// ties go to even, so 0.125 becomes 0.12.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Writes the leaderboard for the first `top_n` players.
///
/// `top_n` is clamped to the number of players.
pub fn write_top<W: Write>(out: &mut W, players: &[RankedPlayer], top_n: usize) -> Result<()> {
    let shown = top_n.min(players.len());
    if shown < top_n {
        debug!(requested = top_n, shown, "Clamped leaderboard size to player count");
    }

    writeln!(out)?;
    writeln!(out, "Top {shown} Players:")?;
    writeln!(out, "{:<6} | {:<30} | {:>8}", "Rank", "Player", "Score")?;
    for (i, player) in players.iter().take(shown).enumerate() {
        let rank = format!("{}.", i + 1);
        writeln!(out, "{:<6} | {:<30} | {:>8.2}", rank, player.name(), player.score)?;
    }
    Ok(())
}

/// How many players clear each per-game threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdSummary {
    pub high_scorers: usize,
    pub top_rebounders: usize,
    pub top_assisters: usize,
}

impl ThresholdSummary {
    pub fn from_players(players: &[RankedPlayer]) -> Self {
        let count = |pred: fn(&RankedPlayer) -> bool| players.iter().filter(|p| pred(p)).count();

        ThresholdSummary {
            high_scorers: count(|p| p.per_game().points >= HIGH_SCORER_PPG),
            top_rebounders: count(|p| p.per_game().rebounds >= TOP_REBOUNDER_RPG),
            top_assisters: count(|p| p.per_game().assists >= TOP_ASSISTER_APG),
        }
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Players averaging 25+ PPG: {}", self.high_scorers)?;
        writeln!(out, "Players averaging 10+ RPG: {}", self.top_rebounders)?;
        writeln!(out, "Players averaging 5+ AST per game: {}", self.top_assisters)?;
        Ok(())
    }
}

/// JSON form of a [`ThresholdSummary`].
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub method: &'a str,
    pub players: usize,
    #[serde(flatten)]
    pub thresholds: &'a ThresholdSummary,
}

/// Writes the threshold summary as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &SummaryReport<'_>) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// One row of the ranking file. Field names are the column headers.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "PTS")]
    pub points: u32,
    #[serde(rename = "PTS_per_game")]
    pub points_per_game: f64,
    #[serde(rename = "REB")]
    pub rebounds: u32,
    #[serde(rename = "REB_per_game")]
    pub rebounds_per_game: f64,
    #[serde(rename = "AST")]
    pub assists: u32,
    #[serde(rename = "AST_per_game")]
    pub assists_per_game: f64,
    #[serde(rename = "STL")]
    pub steals: u32,
    #[serde(rename = "STL_per_game")]
    pub steals_per_game: f64,
    #[serde(rename = "BLK")]
    pub blocks: u32,
    #[serde(rename = "BLK_per_game")]
    pub blocks_per_game: f64,
    #[serde(rename = "TOV")]
    pub turnovers: u32,
    #[serde(rename = "TOV_per_game")]
    pub turnovers_per_game: f64,
    #[serde(rename = "Score")]
    pub score: f64,
}

impl RankingRow {
    pub fn new(rank: usize, player: &RankedPlayer) -> Self {
        let record = &player.stats.record;
        let per_game = player.per_game();
        RankingRow {
            rank,
            player: record.player.clone(),
            games_played: record.games_played,
            points: record.points,
            points_per_game: round2(per_game.points),
            rebounds: record.rebounds,
            rebounds_per_game: round2(per_game.rebounds),
            assists: record.assists,
            assists_per_game: round2(per_game.assists),
            steals: record.steals,
            steals_per_game: round2(per_game.steals),
            blocks: record.blocks,
            blocks_per_game: round2(per_game.blocks),
            turnovers: record.turnovers,
            turnovers_per_game: round2(per_game.turnovers),
            score: round2(player.score),
        }
    }
}

/// Writes the full ranking to `path`, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), count = players.len()))]
pub fn write_ranking_csv(path: impl AsRef<Path>, players: &[RankedPlayer]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    for (i, player) in players.iter().enumerate() {
        writer.serialize(RankingRow::new(i + 1, player))?;
    }
    writer.flush()?;

    info!("Ranking CSV written");
    Ok(())
}
