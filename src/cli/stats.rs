use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::pipeline;
use crate::pipeline::stage2_aggregate::CaseMode;

/// Per-file statistics over single-column integer cases.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input case files, aggregated in the given order
    #[arg(
        short = 'i',
        long,
        num_args = 1..,
        required_unless_present = "input_dir",
        conflicts_with = "input_dir"
    )]
    pub(crate) input_files: Vec<PathBuf>,

    /// Directory of input case files, aggregated in name order
    #[arg(long)]
    pub(crate) input_dir: Option<PathBuf>,

    /// Output CSV file
    #[arg(short = 'o', long)]
    pub(crate) output_file: PathBuf,
}

pub fn handle(args: StatsArgs) -> anyhow::Result<()> {
    let input = super::input_set(args.input_files, args.input_dir);
    let table = pipeline::run(&input, &args.output_file, CaseMode::SingleColumnInt)?;
    info!(
        records = table.len(),
        output = %args.output_file.display(),
        "statistics written"
    );
    Ok(())
}
