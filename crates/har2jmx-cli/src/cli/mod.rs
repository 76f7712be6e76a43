//! CLI for the har2jmx converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::run_convert;

/// Top-level CLI for the har2jmx converter.
#[derive(Debug, Parser)]
#[command(name = "har2jmx")]
#[command(about = "Convert browser HAR captures into JMeter JMX test plans", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a HAR capture into a JMX test plan.
    Convert {
        /// Path to the HAR file exported by the browser.
        har: PathBuf,

        /// Path for the generated JMX file.
        jmx: PathBuf,

        /// Abort on the first unconvertible entry instead of skipping it.
        #[arg(long)]
        fail_fast: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Convert { har, jmx, fail_fast } => run_convert(&har, &jmx, fail_fast)?,
        }

        Ok(())
    }
}
