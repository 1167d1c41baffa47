use clap::{Parser, Subcommand};

use crate::cli::env::EnvCommands;
use crate::cli::pack::PackArg;
use crate::cli::setup::SetupArg;
use crate::cli::text::TextCommands;
use crate::cli::time::TimeArg;

#[derive(Clone, Debug, Parser)]
#[command(name = "satchel", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "e", name = "env", about = "List-valued environment variable helpers")]
    Env {
        #[command(subcommand)]
        cmd: EnvCommands,
    },
    #[command(alias = "p", name = "pack", about = "Pack a directory into a zip archive")]
    Pack(PackArg),
    #[command(alias = "t", name = "time", about = "Time a command over N runs")]
    Time(TimeArg),
    #[command(name = "text", about = "Narrow string transforms")]
    Text {
        #[command(subcommand)]
        cmd: TextCommands,
    },
    #[command(alias = "s", name = "setup", about = "Generate shell completions")]
    Setup(SetupArg),
}
