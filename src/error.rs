use std::path::{Path, PathBuf};
use thiserror::Error;

/// A fatal walk failure. Every variant names the operation that failed, the
/// offending path, and carries the underlying OS error.
///
/// Owner/group name resolution is deliberately absent: a missing user or
/// group database entry falls back to the numeric id and never fails a walk.
#[derive(Error, Debug)]
pub enum LdxError {
    #[error("cannot open directory {}: {source}", path.display())]
    OpenDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read link {}: {source}", path.display())]
    ReadLink {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write listing: {source}")]
    Write { source: std::io::Error },
}

impl LdxError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to name the offending entry without matching variants.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::OpenDir { path, .. }
            | Self::ReadDir { path, .. }
            | Self::Stat { path, .. }
            | Self::ReadLink { path, .. } => Some(path),
            Self::Write { .. } => None,
        }
    }
}
