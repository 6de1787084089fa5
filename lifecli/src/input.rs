use std::io::BufRead;

use anyhow::{Context, bail};
use itertools::Itertools;
use libgame::Grid;
use tracing::info;

/// Everything read from the input stream before the simulation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub iterations: usize,
    pub width: usize,
    pub height: usize,
    pub seed: Grid,
}

/// Reads the iteration count, the `width height` line and `height` rows of `0`/`1` tokens.
///
/// A token of exactly `1` is alive, anything else is dead.
pub fn read_input<R>(reader: R) -> anyhow::Result<SimulationInput>
where
    R: BufRead,
{
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> anyhow::Result<String> {
        lines
            .next()
            .with_context(|| format!("missing {what}"))?
            .with_context(|| format!("couldn't read {what}"))
    };

    let iterations = next_line("iteration count")?
        .trim()
        .parse::<usize>()
        .context("invalid iteration count")?;

    let dimensions = next_line("dimensions")?;
    let mut args = dimensions.split_whitespace();

    let width = args
        .next()
        .context("missing width")?
        .parse::<usize>()
        .context("invalid width")?;

    let height = args
        .next()
        .context("missing height")?
        .parse::<usize>()
        .context("invalid height")?;

    info!(iterations, width, height, "read simulation header");

    let mut seed = Vec::with_capacity(height);
    for row in 0..height {
        let line = next_line(&format!("row {row}"))?;
        let cells = line
            .split_whitespace()
            .map(|token| token == "1")
            .collect_vec();

        if cells.len() != width {
            bail!("row {row} has {} cells, expected {width}", cells.len());
        }

        seed.push(cells);
    }

    Ok(SimulationInput {
        iterations,
        width,
        height,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let input = read_input("14\n3 2\n0 1 0\n1 0 1\n".as_bytes()).unwrap();

        assert_eq!(
            input,
            SimulationInput {
                iterations: 14,
                width: 3,
                height: 2,
                seed: vec![vec![false, true, false], vec![true, false, true]],
            }
        );
    }

    #[test]
    fn only_one_is_alive() {
        let input = read_input("1\n3 1\n1 2 x\n".as_bytes()).unwrap();
        assert_eq!(input.seed, vec![vec![true, false, false]]);
    }

    #[test]
    fn extra_lines_are_ignored() {
        let input = read_input("0\n1 1\n1\n0\n".as_bytes()).unwrap();
        assert_eq!(input.seed, vec![vec![true]]);
    }

    #[test]
    fn bad_iteration_count() {
        let err = read_input("lots\n1 1\n1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid iteration count"));
    }

    #[test]
    fn missing_height() {
        let err = read_input("1\n3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing height"));
    }

    #[test]
    fn missing_row() {
        let err = read_input("1\n2 2\n0 1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing row 1"));
    }

    #[test]
    fn row_width_mismatch() {
        let err = read_input("1\n3 1\n0 1\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "row 0 has 2 cells, expected 3");
    }
}
