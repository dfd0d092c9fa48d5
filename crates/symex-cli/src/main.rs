mod cli;
mod colors;
mod commands;
mod demos;
mod error;
mod present;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Explore { source, run } => commands::run_explore(source, run),
        Command::FindTarget { source, run } => commands::run_find_target(source, run),
        Command::ListDemos => commands::run_list_demos(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
