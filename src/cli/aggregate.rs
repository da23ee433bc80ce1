use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::pipeline;
use crate::pipeline::stage2_aggregate::CaseMode;

/// Per-column statistics over multi-column float cases with a header row.
#[derive(Args, Debug)]
pub struct AggregateArgs {
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

pub fn handle(args: AggregateArgs) -> anyhow::Result<()> {
    let input = super::input_set(args.input_files, args.input_dir);
    let table = pipeline::run(&input, &args.output_file, CaseMode::MultiColumnFloat)?;
    info!(
        records = table.len(),
        output = %args.output_file.display(),
        "statistics written"
    );
    Ok(())
}
