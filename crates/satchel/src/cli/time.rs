use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct TimeArg {
    #[arg(short = 'n', long = "number", default_value_t = 10, help = "Run count")]
    pub number: u32,
    #[arg(trailing_var_arg = true, required = true, help = "Command to run")]
    pub command: Vec<String>,
}

pub fn run(arg: TimeArg) -> Result<()> {
    let (program, args) = arg
        .command
        .split_first()
        .context("No command to time")?;

    let mut failure = None;
    let timing = satchel_bench::run(program, arg.number, || {
        if failure.is_some() {
            return;
        }
        let status = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => {}
            Ok(s) => failure = Some(anyhow!("command exited with {s}")),
            Err(e) => {
                failure =
                    Some(anyhow::Error::from(e).context(format!("Failed to run '{program}'")));
            }
        }
    });

    if let Some(err) = failure {
        return Err(err);
    }
    timing.report();
    Ok(())
}
