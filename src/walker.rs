//! The tree walker: depth-first recursion over a directory hierarchy,
//! emitting one formatted line per entry as it goes.

use std::fs;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::entry::{Entry, EntryKind};
use crate::error::LdxError;
use crate::format::format_line;
use crate::identity::{IdentityLookup, SystemIdentity};
use crate::summary::WalkSummary;

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Walks a directory tree and writes one listing line per entry to `out`.
///
/// Single-threaded and fail-fast: the first open, read, stat, or read-link
/// failure aborts the walk with an [`LdxError`]; everything emitted up to
/// that point has already reached the sink. Entries are written in the order
/// the underlying enumeration yields them — no sorting.
///
/// # Example
///
/// ```rust,no_run
/// use ldx::Walker;
///
/// let stdout = std::io::stdout().lock();
/// let summary = Walker::new(stdout).walk(std::path::Path::new("/var/log"))?;
/// eprintln!("{} entries", summary.entries);
/// # Ok::<(), ldx::LdxError>(())
/// ```
pub struct Walker<W: Write> {
    out: W,
    identity: Box<dyn IdentityLookup>,
    summary: WalkSummary,
}

impl<W: Write> Walker<W> {
    /// A walker that resolves owners through the host's user and group
    /// databases.
    pub fn new(out: W) -> Self {
        Self::with_identity(out, SystemIdentity)
    }

    /// A walker with a caller-supplied identity lookup.
    pub fn with_identity(out: W, identity: impl IdentityLookup + 'static) -> Self {
        Self {
            out,
            identity: Box::new(identity),
            summary: WalkSummary::default(),
        }
    }

    /// Walk the tree rooted at `root`, consuming the walker.
    ///
    /// The root directory itself yields the first line; its descendants
    /// follow depth-first. Returns the accumulated [`WalkSummary`] once the
    /// whole tree has been listed.
    pub fn walk(mut self, root: &Path) -> Result<WalkSummary, LdxError> {
        let mut dir = root.as_os_str().to_os_string();
        if !dir.as_bytes().ends_with(b"/") {
            dir.push("/");
        }
        self.walk_dir(Path::new(&dir), true)?;
        self.out
            .flush()
            .map_err(|source| LdxError::Write { source })?;
        Ok(self.summary)
    }

    // One recursion frame. `dir` is separator-terminated, so a child's full
    // path is plain concatenation.
    fn walk_dir(&mut self, dir: &Path, is_root: bool) -> Result<(), LdxError> {
        let listing = fs::read_dir(dir).map_err(|source| LdxError::OpenDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // The root frame lists itself before its children: one line carrying
        // the parent reference's metadata, shown under the root's own path.
        // Deeper frames never print their dot entries.
        if is_root {
            let parent = dir.join("..");
            let meta = fs::symlink_metadata(&parent).map_err(|source| LdxError::Stat {
                path: parent.clone(),
                source,
            })?;
            let entry = Entry::from_metadata("..", &meta);
            self.emit(&entry, dir)?;
        }

        for step in listing {
            let dirent = step.map_err(|source| LdxError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = dirent.file_name();
            if name == "." || name == ".." {
                continue;
            }

            let full = dir.join(&name);
            let meta = fs::symlink_metadata(&full).map_err(|source| LdxError::Stat {
                path: full.clone(),
                source,
            })?;
            let entry = Entry::from_metadata(name, &meta);
            self.emit(&entry, &full)?;

            if entry.kind == EntryKind::Dir {
                let mut sub = full.into_os_string();
                sub.push("/");
                self.walk_dir(Path::new(&sub), false)?;
            }
        }

        Ok(())
    }

    fn emit(&mut self, entry: &Entry, path: &Path) -> Result<(), LdxError> {
        let line = format_line(entry, path, self.identity.as_ref())?;
        writeln!(self.out, "{line}").map_err(|source| LdxError::Write { source })?;
        self.summary.record(entry.kind);
        Ok(())
    }
}
