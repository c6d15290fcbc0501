//! CSV parser for season leader tables.
//!
//! Columns are mapped by position; column 0 (a rank or id in most exports)
//! is ignored. Blank numeric cells default to zero and integer cells may
//! carry thousands separators. Any bad row fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{debug, info};

use crate::stats::PlayerRecord;

/// Positions of each field in the source table.
pub mod columns {
    pub const PLAYER: usize = 1;
    pub const GP: usize = 2;
    pub const MIN: usize = 3;
    pub const PTS: usize = 4;
    pub const FGM: usize = 5;
    pub const FGA: usize = 6;
    pub const FG_PCT: usize = 7;
    pub const FG3M: usize = 8;
    pub const FG3A: usize = 9;
    pub const FG3_PCT: usize = 10;
    pub const FTM: usize = 11;
    pub const FTA: usize = 12;
    pub const FT_PCT: usize = 13;
    pub const OREB: usize = 14;
    pub const DREB: usize = 15;
    pub const REB: usize = 16;
    pub const AST: usize = 17;
    pub const STL: usize = 18;
    pub const BLK: usize = 19;
    pub const TOV: usize = 20;
    pub const EFG_PCT: usize = 21;
    pub const TS_PCT: usize = 22;

    /// Minimum number of cells a data row must have.
    pub const REQUIRED: usize = TS_PCT + 1;

    pub fn name(index: usize) -> &'static str {
        match index {
            PLAYER => "Player",
            GP => "GP",
            MIN => "MIN",
            PTS => "PTS",
            FGM => "FGM",
            FGA => "FGA",
            FG_PCT => "FG%",
            FG3M => "3PM",
            FG3A => "3PA",
            FG3_PCT => "3P%",
            FTM => "FTM",
            FTA => "FTA",
            FT_PCT => "FT%",
            OREB => "OREB",
            DREB => "DREB",
            REB => "REB",
            AST => "AST",
            STL => "STL",
            BLK => "BLK",
            TOV => "TOV",
            EFG_PCT => "eFG%",
            TS_PCT => "TS%",
            _ => "?",
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path}: missing header row")]
    MissingHeader { path: String },

    #[error("{path} line {line}: expected at least {expected} columns, found {found}")]
    ShortRow {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path} line {line}: {name} (column {column}) is not a number: {value:?}")]
    InvalidNumber {
        path: String,
        line: u64,
        column: usize,
        name: &'static str,
        value: String,
    },
}

/// Reads every player row from the CSV file at `path`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file can't be opened, has no header, or
/// contains a row that is too short or holds non-numeric text in a numeric
/// column. No partial result is returned.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_players(path: impl AsRef<Path>) -> Result<Vec<PlayerRecord>, ParseError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| ParseError::Io {
        path: source.clone(),
        source: e,
    })?;

    let players = load_players_from_reader(file, &source)?;
    info!(count = players.len(), "Loaded player rows");
    Ok(players)
}

/// Parses player rows from any reader. `source` names the input in errors.
pub fn load_players_from_reader<R: Read>(
    rdr: R,
    source: &str,
) -> Result<Vec<PlayerRecord>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let csv_err = |e: csv::Error| ParseError::Csv {
        path: source.to_string(),
        source: e,
    };

    if reader.headers().map_err(csv_err)?.is_empty() {
        return Err(ParseError::MissingHeader {
            path: source.to_string(),
        });
    }

    let mut players = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        players.push(parse_row(&row, source)?);
    }

    debug!(source, count = players.len(), "Parsed CSV body");
    Ok(players)
}

/// Strips thousands separators and parses an integer cell. Blank is zero.
pub fn to_int(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    value.replace(',', "").parse().ok()
}

/// Parses a float cell. Blank is zero.
pub fn to_float(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse().ok()
}

fn parse_row(row: &StringRecord, source: &str) -> Result<PlayerRecord, ParseError> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    if row.len() < columns::REQUIRED {
        return Err(ParseError::ShortRow {
            path: source.to_string(),
            line,
            expected: columns::REQUIRED,
            found: row.len(),
        });
    }

    let cell = |index: usize| row.get(index).unwrap_or("");

    let invalid = |index: usize| ParseError::InvalidNumber {
        path: source.to_string(),
        line,
        column: index,
        name: columns::name(index),
        value: cell(index).to_string(),
    };

    let int = |index: usize| to_int(cell(index)).ok_or_else(|| invalid(index));
    let float = |index: usize| to_float(cell(index)).ok_or_else(|| invalid(index));

    Ok(PlayerRecord {
        player: cell(columns::PLAYER).to_string(),
        games_played: int(columns::GP)?,
        minutes: int(columns::MIN)?,
        points: int(columns::PTS)?,
        field_goals_made: int(columns::FGM)?,
        field_goals_attempted: int(columns::FGA)?,
        field_goal_pct: float(columns::FG_PCT)?,
        threes_made: int(columns::FG3M)?,
        threes_attempted: int(columns::FG3A)?,
        three_point_pct: float(columns::FG3_PCT)?,
        free_throws_made: int(columns::FTM)?,
        free_throws_attempted: int(columns::FTA)?,
        free_throw_pct: float(columns::FT_PCT)?,
        offensive_rebounds: int(columns::OREB)?,
        defensive_rebounds: int(columns::DREB)?,
        rebounds: int(columns::REB)?,
        assists: int(columns::AST)?,
        steals: int(columns::STL)?,
        blocks: int(columns::BLK)?,
        turnovers: int(columns::TOV)?,
        effective_fg_pct: float(columns::EFG_PCT)?,
        true_shooting_pct: float(columns::TS_PCT)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "RANK,PLAYER,GP,MIN,PTS,FGM,FGA,FG%,3PM,3PA,3P%,FTM,FTA,FT%,OREB,DREB,REB,AST,STL,BLK,TOV,EFG%,TS%\n";

    fn parse(body: &str) -> Result<Vec<PlayerRecord>, ParseError> {
        let input = format!("{HEADER}{body}");
        load_players_from_reader(input.as_bytes(), "test.csv")
    }

    #[test]
    fn test_to_int_blank_is_zero() {
        assert_eq!(to_int(""), Some(0));
        assert_eq!(to_int("  "), Some(0));
    }

    #[test]
    fn test_to_int_strips_commas() {
        assert_eq!(to_int("1,234"), Some(1234));
        assert_eq!(to_int("38,387"), Some(38387));
        assert_eq!(to_int("1,234,567"), Some(1234567));
    }

    #[test]
    fn test_to_int_rejects_text() {
        assert_eq!(to_int("abc"), None);
        assert_eq!(to_int("12.5"), None);
        assert_eq!(to_int("-3"), None);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(""), Some(0.0));
        assert_eq!(to_float("47.5"), Some(47.5));
        assert_eq!(to_float(".564"), Some(0.564));
        assert_eq!(to_float("1,5"), None);
    }

    #[test]
    fn test_parse_full_row() {
        let players = parse(
            "1,Kareem Abdul-Jabbar,\"1,560\",\"57,446\",\"38,387\",\"15,837\",\"28,307\",55.9,1,18,5.6,\"6,712\",\"9,304\",72.1,\"2,975\",\"9,394\",\"17,440\",\"5,660\",\"1,160\",\"3,189\",\"2,527\",56.0,59.2\n",
        )
        .unwrap();

        assert_eq!(players.len(), 1);
        let p = &players[0];
        assert_eq!(p.player, "Kareem Abdul-Jabbar");
        assert_eq!(p.games_played, 1560);
        assert_eq!(p.minutes, 57446);
        assert_eq!(p.points, 38387);
        assert_eq!(p.field_goal_pct, 55.9);
        assert_eq!(p.threes_made, 1);
        assert_eq!(p.three_point_pct, 5.6);
        assert_eq!(p.rebounds, 17440);
        assert_eq!(p.assists, 5660);
        assert_eq!(p.turnovers, 2527);
        assert_eq!(p.true_shooting_pct, 59.2);
    }

    #[test]
    fn test_blank_cells_default_to_zero() {
        let players =
            parse("7,Bill Russell,963,,\"14,522\",,,44.0,,,,,,56.1,,,\"21,620\",\"4,100\",,,,,\n")
                .unwrap();

        let p = &players[0];
        assert_eq!(p.minutes, 0);
        assert_eq!(p.steals, 0);
        assert_eq!(p.blocks, 0);
        assert_eq!(p.three_point_pct, 0.0);
        assert_eq!(p.effective_fg_pct, 0.0);
        assert_eq!(p.rebounds, 21620);
    }

    #[test]
    fn test_rows_keep_source_order() {
        let players = parse(
            "1,B,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             2,A,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             3,B,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n",
        )
        .unwrap();

        let names: Vec<_> = players.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_short_row_aborts_load() {
        let result = parse(
            "1,A,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n\
             2,B,10,200\n",
        );

        match result {
            Err(ParseError::ShortRow { expected, found, line, .. }) => {
                assert_eq!(expected, 23);
                assert_eq!(found, 4);
                assert_eq!(line, 3);
            }
            other => panic!("expected ShortRow, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_aborts_load() {
        let result = parse("1,A,ten,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n");

        match result {
            Err(ParseError::InvalidNumber { column, name, value, .. }) => {
                assert_eq!(column, columns::GP);
                assert_eq!(name, "GP");
                assert_eq!(value, "ten");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_row_aborts_load() {
        let mut input = HEADER.as_bytes().to_vec();
        input.extend_from_slice(b"1,A,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n");
        input.extend_from_slice(b"2,B\xff\xfe,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n");

        let result = load_players_from_reader(input.as_slice(), "utf8.csv");
        match result {
            Err(ParseError::Csv { path, .. }) => assert_eq!(path, "utf8.csv"),
            other => panic!("expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_header() {
        let result = load_players_from_reader("".as_bytes(), "empty.csv");
        assert!(matches!(result, Err(ParseError::MissingHeader { .. })));
    }

    #[test]
    fn test_header_only_yields_no_players() {
        let players = parse("").unwrap();
        assert!(players.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = load_players("/nonexistent/hoops_ranker/leaders.csv");
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
