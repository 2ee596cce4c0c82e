// src/bin/tsblame.rs
use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::info;

use tsblame_core::blame::GitBlame;
use tsblame_core::pipeline;
use tsblame_core::report;

/// Reads tsc output on stdin and reports error counts per git author.
///
/// No flags: pipe compiler output in, read the table on stdout. All trace
/// output goes to stderr (RUST_LOG=debug for per-line detail).
#[derive(Parser)]
#[command(
    name = "tsblame",
    version,
    about = "Attribute tsc errors to the git authors of the offending lines",
    long_about = "Reads TypeScript compiler output from stdin, runs git blame on every\n\
                  reported error line, and prints a per-author error count table.\n\n\
                  Example:\n  tsc --noEmit 2>&1 | tsblame"
)]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {} = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("starting tsblame, reading from stdin");

    let stdin = io::stdin();
    let summary = pipeline::run(stdin.lock(), &GitBlame)?;

    print!("{}", report::render(&summary.tally));
    info!(
        "report generated for {} authors, {} errors attributed",
        summary.tally.authors(),
        summary.tally.total()
    );
    Ok(())
}
