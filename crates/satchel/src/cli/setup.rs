use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::cli::app::App;

#[derive(Clone, Debug, Args)]
pub struct SetupArg {
    #[arg(help = "Shell to generate completions for")]
    pub shell: Shell,
}

pub fn run(arg: SetupArg) -> Result<()> {
    let mut cmd = App::command();
    generate(arg.shell, &mut cmd, "satchel", &mut io::stdout());
    Ok(())
}
