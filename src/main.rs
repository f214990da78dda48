//! bactwin CLI - BACnet object template compiler
//!
//! Usage: bactwin <COMMAND>
//!
//! Commands:
//!   compile  Resolve definitions and write the JSON documents
//!   check    Resolve definitions without writing
//!   show     Print one resolved definition

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compile { source, output } => {
            commands::compile::cmd_compile(&source, output, cli.json)
        }
        Commands::Check { source } => commands::check::cmd_check(&source, cli.json),
        Commands::Show {
            name,
            property,
            source,
        } => commands::show::cmd_show(&source, &name, property, cli.json),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
