//! Interactive method picker shown when no `--method` flag is given.

use std::io::{BufRead, Write};

use anyhow::Result;
use hoops_ranker::scoring::ScoringMethod;

const CHOICES: &[(&str, &str)] = &[
    ("1", "Points per game"),
    ("2", "Rebounds + Assists per game"),
    ("3", "Defense (Steals + Blocks per game)"),
    ("4", "Overall GOAT score"),
];

/// Prints the menu to `output` and reads one answer from `input`.
///
/// An empty answer or end of input selects the overall score.
pub fn prompt_method<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ScoringMethod> {
    writeln!(output, "Welcome to the NBA Stats Analyzer!")?;
    writeln!(output, "Choose ranking method:")?;
    for (key, label) in CHOICES {
        writeln!(output, "{key}. {label}")?;
    }
    write!(output, "Enter 1,2,3 or 4: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(ScoringMethod::from_choice(&answer))
}
