//! Terminal and JSON output helpers for the CLI.

pub mod json;
pub mod output;
