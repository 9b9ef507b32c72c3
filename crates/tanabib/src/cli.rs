/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tanabib", author, version)]
#[command(about = "Export Zotero items as Tana paste outlines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export records to a Tana paste document
    Export {
        /// Zotero items as JSON or YAML (a list, or an object with `items`)
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export configuration (TOML, or YAML by extension)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported item types and the fields written for each
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration whose initial statuses to show
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the JSON schema of the record input format
    #[cfg(feature = "schema")]
    Schema,

    /// Validate an export configuration file
    CheckConfig {
        path: PathBuf,
    },
}
