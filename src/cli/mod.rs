use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::stage1_resolve::InputSet;

mod aggregate;
mod stats;

#[derive(Parser, Debug)]
#[command(
    name = "case-stats",
    version,
    about = "Descriptive statistics over CSV case files"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Stats(stats::StatsArgs),
    Aggregate(aggregate::AggregateArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Stats(args) => stats::handle(args),
            Command::Aggregate(args) => aggregate::handle(args),
        }
    }
}

fn input_set(files: Vec<PathBuf>, dir: Option<PathBuf>) -> InputSet {
    match dir {
        Some(dir) => InputSet::Directory(dir),
        None => InputSet::Files(files),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
