use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// bactwin - BACnet object template compiler
#[derive(Parser, Debug)]
#[command(name = "bactwin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where definitions are read from and which locale applies
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Definitions root holding properties/ and objects/
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Apply `<name>.<locale>` overlays for this locale
    #[arg(short, long)]
    pub locale: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve definitions and write properties.json and objects.json
    Compile {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (default: <root>/compilation)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve definitions and report errors without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one resolved object (or property) as JSON
    Show {
        /// Object name (file stem)
        name: String,

        /// Look the name up among properties instead of objects
        #[arg(long)]
        property: bool,

        #[command(flatten)]
        source: SourceArgs,
    },
}
