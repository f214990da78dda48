//! Configuration module for bactwin
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BACTWIN_*)
//! 3. Project config (`bactwin.toml` in the definitions root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE, ENV_LOCALE, ENV_OUTPUT_DIR};
pub use types::{Config, DefinitionsConfig, OutputConfig};
