//! # ldx
//!
//! Recursive long-format directory lister — one stat-faithful line per entry.
//!
//! ldx walks a directory tree depth-first and prints, for every entry it
//! finds, a long-listing line: inode, half-block count, type + permission
//! string, link count, owner, group, size, modification time, path, and the
//! target for symlinks. The root directory itself is listed first; `.` and
//! `..` are never listed below it. The walk is fail-fast: the first
//! filesystem error aborts with a typed [`LdxError`] naming the operation
//! and the offending path.
//!
//! # Quick Start
//!
//! ```rust
//! let mut out = Vec::new();
//! let summary = ldx::walk(std::path::Path::new("src"), &mut out)?;
//!
//! // One line per entry, root first.
//! assert!(summary.entries >= 1);
//! assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), summary.entries);
//! # Ok::<(), ldx::LdxError>(())
//! ```
//!
//! # Custom identity resolution
//!
//! Owner and group names come from an [`IdentityLookup`]. The default,
//! [`SystemIdentity`], queries the host's user and group databases; anything
//! the lookup can't name renders as its numeric id. Substitute your own for
//! deterministic output:
//!
//! ```rust
//! use ldx::{IdentityLookup, Walker};
//!
//! struct NoNames;
//!
//! impl IdentityLookup for NoNames {
//!     fn user_name(&self, _uid: u32) -> Option<String> { None }
//!     fn group_name(&self, _gid: u32) -> Option<String> { None }
//! }
//!
//! let mut out = Vec::new();
//! Walker::with_identity(&mut out, NoNames).walk(std::path::Path::new("src"))?;
//! # Ok::<(), ldx::LdxError>(())
//! ```

#![forbid(unsafe_code)]

pub mod format;
pub mod walker;

mod entry;
mod error;
mod identity;
mod summary;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use entry::{Entry, EntryKind};
pub use error::LdxError;
pub use identity::{IdentityLookup, SystemIdentity};
pub use summary::WalkSummary;
pub use walker::Walker;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Walk the tree rooted at `root`, writing one listing line per entry to
/// `out`.
///
/// Convenience for [`Walker::new`] + [`Walker::walk`] with system identity
/// resolution.
///
/// # Errors
///
/// Fails fast on the first directory-open, directory-read, stat, read-link,
/// or sink-write failure. Lines already written stay written.
pub fn walk<W: std::io::Write>(
    root: &std::path::Path,
    out: W,
) -> Result<WalkSummary, LdxError> {
    Walker::new(out).walk(root)
}
