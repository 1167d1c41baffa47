use anyhow::Result;
use clap::{Args, Subcommand};
use satchel_env::{self as env, EnvStore, ProcessEnv};

#[derive(Clone, Debug, Subcommand)]
pub enum EnvCommands {
    #[command(alias = "g", about = "Print the raw value")]
    Get(NameArg),
    #[command(alias = "ls", about = "Print one entry per line")]
    Entries(NameArg),
    #[command(about = "Overwrite the variable; prints the new value")]
    Put(NameValueArg),
    #[command(alias = "a", about = "Append an entry, skipping duplicates; prints the new value")]
    Append(NameValueArg),
    #[command(alias = "p", about = "Prepend an entry, skipping duplicates; prints the new value")]
    Prepend(NameValueArg),
    #[command(alias = "rm", about = "Remove an entry; prints the remaining value")]
    Remove(NameValueArg),
}

#[derive(Clone, Debug, Args)]
pub struct NameArg {
    #[arg(help = "Variable name")]
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct NameValueArg {
    #[arg(help = "Variable name")]
    pub name: String,
    #[arg(help = "Entry value")]
    pub value: String,
}

/// Mutations die with this process; the new value is printed so callers can
/// re-export it, e.g. `export PATH="$(satchel env append PATH /opt/bin)"`.
pub fn run(cmd: EnvCommands) -> Result<()> {
    let mut store = ProcessEnv;
    match cmd {
        EnvCommands::Get(arg) => {
            if let Some(value) = env::get(&store, &arg.name) {
                println!("{value}");
            }
        }
        EnvCommands::Entries(arg) => {
            for entry in env::entries(&store, &arg.name).unwrap_or_default() {
                println!("{entry}");
            }
        }
        EnvCommands::Put(arg) => {
            env::put(&mut store, &arg.name, &arg.value);
            print_value(&store, &arg.name);
        }
        EnvCommands::Append(arg) => {
            env::append(&mut store, &arg.name, &arg.value)?;
            print_value(&store, &arg.name);
        }
        EnvCommands::Prepend(arg) => {
            env::prepend(&mut store, &arg.name, &arg.value)?;
            print_value(&store, &arg.name);
        }
        EnvCommands::Remove(arg) => {
            env::remove(&mut store, &arg.name, &arg.value);
            print_value(&store, &arg.name);
        }
    }
    Ok(())
}

fn print_value<S: EnvStore>(store: &S, name: &str) {
    if let Some(value) = env::get(store, name) {
        println!("{value}");
    }
}
