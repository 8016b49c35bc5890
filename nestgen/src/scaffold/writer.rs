//! File writer with skip-or-overwrite semantics

use crate::error::{NestgenError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// What happened to a single output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOutcome {
    /// File did not exist and was written
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File existed and was left untouched
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped => "skipped",
        })
    }
}

/// Write `content` to `path`, creating parent directories
///
/// Existing files are only replaced when `force` is set.
///
/// # Errors
///
/// Returns [`NestgenError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_file(path: &Path, content: &str, force: bool) -> Result<WriteOutcome> {
    let existed = path.exists();
    if existed && !force {
        tracing::warn!(path = %path.display(), "file exists, skipping (use --force to overwrite)");
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| NestgenError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| NestgenError::io(path, e))?;

    let outcome = if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    };
    tracing::info!(path = %path.display(), %outcome, "file written");

    Ok(outcome)
}
