use anyhow::Result;
use clap::{Args, Subcommand};
use satchel_text::{capitalize, uncapitalize, unescape};

#[derive(Clone, Debug, Subcommand)]
pub enum TextCommands {
    #[command(about = "Upper-case the first character only")]
    Capitalize(InputArg),
    #[command(about = "Lower-case the first character only")]
    Uncapitalize(UncapitalizeArg),
    #[command(about = "Collapse one level of quote escaping")]
    Unescape(InputArg),
}

#[derive(Clone, Debug, Args)]
pub struct InputArg {
    #[arg(help = "Input string")]
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct UncapitalizeArg {
    #[arg(help = "Input string")]
    pub input: String,
    #[arg(long, help = "Keep a leading acronym intact")]
    pub preserve_acronyms: bool,
}

pub fn run(cmd: TextCommands) -> Result<()> {
    match cmd {
        TextCommands::Capitalize(arg) => println!("{}", capitalize(&arg.input)?),
        TextCommands::Uncapitalize(arg) => {
            println!("{}", uncapitalize(&arg.input, arg.preserve_acronyms))
        }
        TextCommands::Unescape(arg) => println!("{}", unescape(&arg.input)),
    }
    Ok(())
}
