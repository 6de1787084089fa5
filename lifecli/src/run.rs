use anyhow::Context;
use libgame::{Board, LineWriter};
use tracing::debug;

use crate::input::SimulationInput;

/// Advances the seeded board `iterations` times, printing it after every step.
pub fn run<L>(input: SimulationInput, out: &mut L) -> anyhow::Result<()>
where
    L: LineWriter + ?Sized,
{
    let SimulationInput {
        iterations,
        width,
        height,
        seed,
    } = input;

    let mut board = Board::with_seed(width, height, seed).context("Couldn't build board")?;

    for iteration in 0..iterations {
        board.advance();
        debug!(iteration, population = board.population(), "advanced");

        board
            .print(out)
            .with_context(|| format!("Couldn't print iteration {iteration}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use libgame::IoLineWriter;

    use super::*;
    use crate::input::read_input;

    fn simulate(input: &str) -> String {
        let input = read_input(input.as_bytes()).unwrap();
        let mut out = IoLineWriter::new(Vec::<u8>::new());
        run(input, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn lone_cell_dies() {
        assert_eq!(
            simulate("2\n3 3\n0 0 0\n0 1 0\n0 0 0\n"),
            "0 0 0\n0 0 0\n0 0 0\n\n0 0 0\n0 0 0\n0 0 0\n\n"
        );
    }

    #[test]
    fn blinker_on_narrow_torus() {
        assert_eq!(
            simulate("2\n5 3\n0 0 0 0 0\n0 1 1 1 0\n0 0 0 0 0\n"),
            concat!(
                "0 0 1 0 0\n0 0 1 0 0\n0 0 1 0 0\n\n",
                "0 1 1 1 0\n0 1 1 1 0\n0 1 1 1 0\n\n",
            )
        );
    }

    #[test]
    fn zero_iterations_print_nothing() {
        assert_eq!(simulate("0\n2 2\n1 1\n1 1\n"), "");
    }

    #[test]
    fn block_is_still_life() {
        let mut lines: Vec<String> = Vec::new();
        let input = read_input("3\n4 4\n0 0 0 0\n0 1 1 0\n0 1 1 0\n0 0 0 0\n".as_bytes()).unwrap();
        run(input, &mut lines).unwrap();

        let block = ["0 0 0 0", "0 1 1 0", "0 1 1 0", "0 0 0 0", ""];
        assert_eq!(lines.len(), block.len() * 3);
        for dump in lines.chunks(block.len()) {
            assert_eq!(dump, block);
        }
    }

    #[test]
    fn empty_board_is_rejected() {
        let input = read_input("1\n0 0\n".as_bytes()).unwrap();
        let mut lines: Vec<String> = Vec::new();
        let err = run(input, &mut lines).unwrap_err();

        assert!(err.to_string().contains("Couldn't build board"));
        assert!(lines.is_empty());
    }
}
