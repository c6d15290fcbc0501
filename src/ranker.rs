use std::cmp::Ordering;

use tracing::debug;

use crate::scoring::ScoringMethod;
use crate::stats::{PerGame, PlayerStats};

/// A player with the score assigned by the active [`ScoringMethod`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub stats: PlayerStats,
    pub score: f64,
}

impl RankedPlayer {
    pub fn name(&self) -> &str {
        self.stats.name()
    }

    pub fn per_game(&self) -> &PerGame {
        &self.stats.per_game
    }
}

/// Scores every player with `method` and sorts best first.
///
/// The sort is stable: players with equal scores keep their input order.
#[tracing::instrument(skip(players), fields(count = players.len()))]
pub fn rank_players(players: Vec<PlayerStats>, method: ScoringMethod) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players
        .into_iter()
        .map(|stats| {
            let score = method.score(&stats.per_game);
            RankedPlayer { stats, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    if let Some(leader) = ranked.first() {
        debug!(leader = leader.name(), score = leader.score, "Ranking complete");
    }

    ranked
}
