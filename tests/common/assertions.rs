//! Assertion macros for CLI, contract and scenario tests.
//!
//! Failures print the command output or the files under the root.

use std::path::Path;

/// Every file below `dir`, for failure messages.
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return files;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            files.extend(list_all_files(&path));
        } else {
            files.push(path.display().to_string());
        }
    }
    files.sort();
    files
}

/// The document (or directory) at `$path` below the root exists.
///
/// ```ignore
/// assert_compiled!(env, "compilation/objects.json");
/// ```
#[macro_export]
macro_rules! assert_compiled {
    ($env:expr, $path:expr) => {
        assert!(
            $env.path($path).exists(),
            "'{}' was not written; files under {}:\n  {}",
            $path,
            $env.root.path().display(),
            $crate::common::list_all_files($env.root.path()).join("\n  ")
        );
    };
}

/// Nothing exists at `$path` below the root.
#[macro_export]
macro_rules! assert_not_compiled {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.path($path).exists(),
            "'{}' should not exist below {}",
            $path,
            $env.root.path().display()
        );
    };
}

/// stdout or stderr mentions `$pattern`.
///
/// ```ignore
/// assert_output_contains!(result, "Compiled definitions");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "no '{}' in output\n--- stdout\n{}\n--- stderr\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Neither stdout nor stderr mentions `$pattern`.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "unexpected '{}' in output\n--- stdout\n{}\n--- stderr\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// The command exited non-zero.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert!(
            !$result.success,
            "command unexpectedly succeeded\n--- stdout\n{}",
            $result.stdout
        );
    };
}

/// The command exited zero.
#[macro_export]
macro_rules! assert_succeeded {
    ($result:expr) => {
        assert!(
            $result.success,
            "command failed with exit code {}\n--- stdout\n{}\n--- stderr\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
