use std::{io, process::ExitCode};

use anyhow::Context;
use colored::Colorize;
use libgame::IoLineWriter;
use tracing_subscriber::EnvFilter;

mod input;
mod run;

fn main() -> ExitCode {
    // stdout carries the boards, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match simulate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:?}", "!".red());
            ExitCode::FAILURE
        }
    }
}

fn simulate() -> anyhow::Result<()> {
    let input = input::read_input(io::stdin().lock())?;

    let mut out = IoLineWriter::new(io::BufWriter::new(io::stdout().lock()));
    run::run(input, &mut out)?;
    out.flush().context("Couldn't flush output")?;

    Ok(())
}
