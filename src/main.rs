//! chatgrab - save shared ChatGPT conversations as JSON transcripts.

mod commands;
mod logging;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use chatgrab::cli::{Cli, Commands, ConfigCommands};
use chatgrab::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::fetch::handle(args, &config)
        }
        Commands::Extract(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::extract::handle(args, &config)
        }
        Commands::Config { command } => {
            let config_path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };
            match command {
                ConfigCommands::Show => commands::config::handle_show(&config_path),
                ConfigCommands::Edit => commands::config::handle_edit(&config_path),
                ConfigCommands::Path => commands::config::handle_path(&config_path),
            }
        }
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
