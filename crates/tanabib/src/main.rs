/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use logging::{init_logging, LogConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    match cli.command {
        Command::Export {
            input,
            output,
            config,
        } => {
            commands::export(&input, output.as_deref(), config.as_deref())?;
        }
        Command::Types { json, config } => {
            let config = commands::load_config(config.as_deref())?;
            println!("{}", commands::types(&config, json)?);
        }
        #[cfg(feature = "schema")]
        Command::Schema => {
            println!("{}", commands::schema()?);
        }
        Command::CheckConfig { path } => {
            println!("{}", commands::check_config(&path)?);
        }
    }
    Ok(())
}
