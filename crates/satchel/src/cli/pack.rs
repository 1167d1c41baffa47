use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use satchel_archive::pack_dir;

#[derive(Clone, Debug, Args)]
pub struct PackArg {
    #[arg(help = "Directory to pack")]
    pub directory: PathBuf,
    #[arg(help = "Output zip path; defaults to <directory>.zip")]
    pub output: Option<PathBuf>,
}

pub fn run(arg: PackArg) -> Result<()> {
    let output = arg
        .output
        .unwrap_or_else(|| arg.directory.with_extension("zip"));

    let report = pack_dir(&arg.directory, &output)
        .with_context(|| format!("Failed to pack {}", arg.directory.display()))?;

    println!(
        "{} {} ({} entries, {} bytes)",
        style("packed").green(),
        output.display(),
        report.entry_count,
        report.total_bytes
    );
    Ok(())
}
