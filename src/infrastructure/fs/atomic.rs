//! Atomic file writer
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so readers never see a partially written file.
//! Related files are staged together and committed as a group: if any
//! rename fails, targets already replaced get their previous content back.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::{BactwinError, BactwinResult};

/// Content written and synced next to its target, not yet renamed over it.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Write `content` to a temp file beside `path`, creating parent directories.
///
/// Fails up front when `path` is a directory, since no rename could replace it.
pub fn stage(path: &Path, content: &[u8]) -> BactwinResult<StagedFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| BactwinError::io(parent, e))?;
    if path.is_dir() {
        return Err(BactwinError::io(path, io::Error::other("target is a directory")));
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| BactwinError::io(parent, e))?;
    temp.write_all(content)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| BactwinError::io(temp.path(), e))?;
    Ok(StagedFile {
        temp,
        target: path.to_path_buf(),
    })
}

/// Rename every staged file over its target, all or nothing.
pub fn commit_all(staged: Vec<StagedFile>) -> BactwinResult<()> {
    let mut committed: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for file in staged {
        let previous = match fs::read(&file.target) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                roll_back(&committed);
                return Err(BactwinError::io(&file.target, e));
            }
        };
        if let Err(e) = file.temp.persist(&file.target) {
            roll_back(&committed);
            return Err(BactwinError::io(&file.target, e.error));
        }
        committed.push((file.target, previous));
    }
    Ok(())
}

fn roll_back(committed: &[(PathBuf, Option<Vec<u8>>)]) {
    for (target, previous) in committed.iter().rev() {
        let restored = match previous {
            Some(content) => atomic_write(target, content),
            None => fs::remove_file(target).map_err(|e| BactwinError::io(target, e)),
        };
        if let Err(e) = restored {
            warn!("could not restore {}: {}", target.display(), e);
        }
    }
}

/// Write content to a file atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> BactwinResult<()> {
    let staged = stage(path, content)?;
    staged
        .temp
        .persist(path)
        .map_err(|e| BactwinError::io(path, e.error))?;
    Ok(())
}
