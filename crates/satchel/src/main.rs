use anyhow::Result;
use clap::Parser;

use crate::cli::app::{App, Commands};

mod cli;

fn main() -> Result<()> {
    let app = App::parse();
    match app.cmd {
        Commands::Env { cmd } => cli::env::run(cmd),
        Commands::Pack(arg) => cli::pack::run(arg),
        Commands::Time(arg) => cli::time::run(arg),
        Commands::Text { cmd } => cli::text::run(cmd),
        Commands::Setup(arg) => cli::setup::run(arg),
    }
}
