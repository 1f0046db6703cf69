//! clientdocs CLI: turn generated API-client markdown into a Jekyll subsite.
//!
//! Zero-configuration batch tool: reads the client generator's docs, writes
//! categorized Jekyll pages plus an index, and logs to stdout and a log file.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use clientdocs_shared::GeneratorConfig;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _cli = Cli::parse();
    let config = GeneratorConfig::default();
    let progress = commands::CliProgress::new();
    let _log_guard = commands::init_tracing(&config, &progress)?;
    commands::run(&config, &progress)
}
