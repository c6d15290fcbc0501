//! Ranking strategies.
//!
//! Each method maps a player's per-game rates to a single score. The set is
//! closed; anything the menu doesn't recognize falls back to [`ScoringMethod::Overall`].

use std::fmt;

use clap::ValueEnum;

use crate::stats::PerGame;

/// Weights of the overall composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallWeights {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    /// Subtracted.
    pub turnovers: f64,
}

pub const OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    points: 0.4,
    rebounds: 0.3,
    assists: 0.3,
    steals: 1.5,
    blocks: 1.5,
    turnovers: 0.5,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScoringMethod {
    /// Points per game
    #[value(name = "points")]
    Points,
    /// Rebounds + assists per game
    #[value(name = "reb_ast")]
    ReboundsAssists,
    /// Steals + blocks per game
    #[value(name = "defense")]
    Defense,
    /// Weighted composite of all per-game rates
    #[default]
    #[value(name = "overall")]
    Overall,
}

impl ScoringMethod {
    /// Maps a menu answer to a method. Only "1", "2" and "3" pick a specific
    /// method; every other answer means [`ScoringMethod::Overall`].
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => ScoringMethod::Points,
            "2" => ScoringMethod::ReboundsAssists,
            "3" => ScoringMethod::Defense,
            _ => ScoringMethod::Overall,
        }
    }

    pub fn score(self, per_game: &PerGame) -> f64 {
        match self {
            ScoringMethod::Points => points_score(per_game),
            ScoringMethod::ReboundsAssists => reb_ast_score(per_game),
            ScoringMethod::Defense => defense_score(per_game),
            ScoringMethod::Overall => overall_score(per_game),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringMethod::Points => "points",
            ScoringMethod::ReboundsAssists => "reb_ast",
            ScoringMethod::Defense => "defense",
            ScoringMethod::Overall => "overall",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn points_score(per_game: &PerGame) -> f64 {
    per_game.points
}

pub fn reb_ast_score(per_game: &PerGame) -> f64 {
    per_game.rebounds + per_game.assists
}

pub fn defense_score(per_game: &PerGame) -> f64 {
    per_game.steals + per_game.blocks
}

pub fn overall_score(per_game: &PerGame) -> f64 {
    let w = OVERALL_WEIGHTS;
    per_game.points * w.points
        + per_game.rebounds * w.rebounds
        + per_game.assists * w.assists
        + per_game.steals * w.steals
        + per_game.blocks * w.blocks
        - per_game.turnovers * w.turnovers
}
