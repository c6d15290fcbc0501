/// One season row as read from the source table: cumulative totals and
/// shooting percentages exactly as the file reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    pub player: String,
    pub games_played: u32,
    pub minutes: u32,
    pub points: u32,

    // shooting
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub field_goal_pct: f64,
    pub threes_made: u32,
    pub threes_attempted: u32,
    pub three_point_pct: f64,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub free_throw_pct: f64,

    // rebounding and playmaking
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,

    pub effective_fg_pct: f64,
    pub true_shooting_pct: f64,
}

/// Per-game averages derived from a [`PlayerRecord`]'s totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerGame {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

impl PerGame {
    /// Divides each total by games played. A player with no games gets
    /// zero across the board.
    pub fn from_record(record: &PlayerRecord) -> Self {
        let gp = record.games_played;
        PerGame {
            points: Self::rate(record.points, gp),
            rebounds: Self::rate(record.rebounds, gp),
            assists: Self::rate(record.assists, gp),
            steals: Self::rate(record.steals, gp),
            blocks: Self::rate(record.blocks, gp),
            turnovers: Self::rate(record.turnovers, gp),
        }
    }

    pub fn rate(total: u32, games_played: u32) -> f64 {
        if games_played == 0 {
            0.0
        } else {
            total as f64 / games_played as f64
        }
    }
}

/// A record paired with its per-game rates, ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub record: PlayerRecord,
    pub per_game: PerGame,
}

impl PlayerStats {
    pub fn from_record(record: PlayerRecord) -> Self {
        let per_game = PerGame::from_record(&record);
        PlayerStats { record, per_game }
    }

    pub fn name(&self) -> &str {
        &self.record.player
    }
}

/// Computes per-game rates for every record, keeping source order.
pub fn compute_per_game(records: Vec<PlayerRecord>) -> Vec<PlayerStats> {
    records.into_iter().map(PlayerStats::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gp: u32) -> PlayerRecord {
        PlayerRecord {
            player: "Test Player".to_string(),
            games_played: gp,
            points: 800,
            rebounds: 400,
            assists: 200,
            steals: 60,
            blocks: 40,
            turnovers: 120,
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_with_zero_games() {
        assert_eq!(PerGame::rate(10, 0), 0.0);
    }

    #[test]
    fn test_rate_normal_values() {
        assert_eq!(PerGame::rate(800, 40), 20.0);
        assert_eq!(PerGame::rate(900, 30), 30.0);
        assert_eq!(PerGame::rate(1, 3), 1.0 / 3.0);
    }

    #[test]
    fn test_zero_games_gives_all_zero_rates() {
        let per_game = PerGame::from_record(&record(0));
        assert_eq!(per_game, PerGame::default());
    }

    #[test]
    fn test_rates_are_total_over_games() {
        let per_game = PerGame::from_record(&record(40));

        assert_eq!(per_game.points, 20.0);
        assert_eq!(per_game.rebounds, 10.0);
        assert_eq!(per_game.assists, 5.0);
        assert_eq!(per_game.steals, 1.5);
        assert_eq!(per_game.blocks, 1.0);
        assert_eq!(per_game.turnovers, 3.0);
    }

    #[test]
    fn test_recomputing_is_idempotent() {
        let stats = PlayerStats::from_record(record(37));
        let again = PerGame::from_record(&stats.record);
        assert_eq!(stats.per_game, again);
    }

    #[test]
    fn test_compute_per_game_keeps_order() {
        let mut a = record(10);
        a.player = "A".to_string();
        let mut b = record(20);
        b.player = "B".to_string();

        let stats = compute_per_game(vec![a, b]);
        let names: Vec<_> = stats.iter().map(PlayerStats::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
