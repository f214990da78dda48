//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BactwinError, BactwinResult};

use super::types::Config;

/// Project configuration file name, looked up in the definitions root.
pub const CONFIG_FILE: &str = "bactwin.toml";

pub const ENV_LOCALE: &str = "BACTWIN_LOCALE";
pub const ENV_OUTPUT_DIR: &str = "BACTWIN_OUTPUT_DIR";

/// Keys accepted at each level of `bactwin.toml`.
const SECTIONS: &[(&str, &[&str])] = &[
    ("", &["definitions", "output"]),
    ("definitions", &["locale", "extensions"]),
    ("output", &["dir", "indent"]),
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect a warning for every unknown key.
pub fn load_with_warnings(path: &Path) -> BactwinResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BactwinError::io(path, e))?;

    let mut unknown: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| {
            unknown.push(p.to_string());
        })
        .map_err(|e| BactwinError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown
        .iter()
        .map(|dotted| {
            let (section, key) = dotted.rsplit_once('.').unwrap_or(("", dotted.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(&content, section, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `bactwin.toml` from `root` when present, then apply env overrides.
pub fn load_for_root(root: &Path) -> BactwinResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE);
    let (config, warnings) = if path.is_file() {
        debug!("loading configuration from {}", path.display());
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((config.with_env_overrides(), warnings))
}

/// Apply `BACTWIN_*` overrides read through `lookup`.
///
/// An empty `BACTWIN_LOCALE` disables locale overlays.
pub fn with_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(locale) = lookup(ENV_LOCALE) {
        let locale = locale.trim().to_string();
        config.definitions.locale = if locale.is_empty() { None } else { Some(locale) };
    }

    if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
        if !dir.trim().is_empty() {
            config.output.dir = PathBuf::from(dir);
        }
    }

    config
}

/// 1-based line of `key` inside `[section]` (or before any table for the root).
fn key_line(content: &str, section: &str, key: &str) -> Option<usize> {
    let mut current = "";
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(table) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = table.trim();
            if section.is_empty() && current == key {
                return Some(index + 1);
            }
            continue;
        }
        let Some((name, _)) = line.split_once('=') else {
            continue;
        };
        if current == section && name.trim().trim_matches('"') == key {
            return Some(index + 1);
        }
    }
    None
}

/// Closest known key of the same section, if it is a plausible typo.
fn suggest_key(section: &str, unknown: &str) -> Option<String> {
    let (_, known) = SECTIONS.iter().find(|(name, _)| *name == section)?;
    known
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over chars, single-row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
