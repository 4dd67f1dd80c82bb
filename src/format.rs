//! The metadata formatter: raw stat fields in, one listing line out.
//!
//! Everything here is pure except the read-link call a symlink line needs.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::entry::{Entry, EntryKind};
use crate::error::LdxError;
use crate::identity::IdentityLookup;

/// The eight rwx triplets, indexed by their 3-bit value.
const RWX: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

/// Render the 10-character type + permission string.
///
/// Position 0 is the kind glyph; positions 1-9 are the user, group, and
/// other triplets from the low 9 mode bits. Setuid, setgid, and sticky
/// replace the execute cell of their triplet: lowercase when the matching
/// execute bit is set, uppercase when it is not.
pub fn mode_string(kind: EntryKind, mode: u32) -> String {
    let mut cells = ['-'; 10];
    cells[0] = kind.glyph();
    for (slot, shift) in [6u32, 3, 0].into_iter().enumerate() {
        let triplet = RWX[((mode >> shift) & 0o7) as usize];
        for (offset, ch) in triplet.chars().enumerate() {
            cells[1 + slot * 3 + offset] = ch;
        }
    }
    if mode & 0o4000 != 0 {
        cells[3] = if mode & 0o100 != 0 { 's' } else { 'S' };
    }
    if mode & 0o2000 != 0 {
        cells[6] = if mode & 0o010 != 0 { 's' } else { 'S' };
    }
    if mode & 0o1000 != 0 {
        cells[9] = if mode & 0o001 != 0 { 't' } else { 'T' };
    }
    cells.iter().collect()
}

/// Assemble the listing line for `entry`, shown at `path`.
///
/// Fields, single-space-separated: inode, half-block count (width 4), mode
/// string, link count (width 4), owner and group (left-justified, width 8),
/// size (width 9), local modification time, path. Symlinks append
/// ` -> <target>`, read from the filesystem here — the one fallible step.
///
/// Owner and group fall back to the numeric id when the lookup has no name
/// for them; that fallback never fails the line.
pub fn format_line(
    entry: &Entry,
    path: &Path,
    identity: &dyn IdentityLookup,
) -> Result<String, LdxError> {
    let owner = identity
        .user_name(entry.uid)
        .unwrap_or_else(|| entry.uid.to_string());
    let group = identity
        .group_name(entry.gid)
        .unwrap_or_else(|| entry.gid.to_string());

    let mtime = DateTime::from_timestamp(entry.mtime, 0)
        .unwrap_or_default()
        .with_timezone(&Local);

    let mut line = format!(
        "{} {:>4} {} {:>4} {:<8} {:<8} {:>9} {} {}",
        entry.ino,
        entry.blocks / 2,
        mode_string(entry.kind, entry.mode),
        entry.nlink,
        owner,
        group,
        entry.size,
        mtime.format("%c"),
        path.display(),
    );

    if entry.kind == EntryKind::Symlink {
        let target = fs::read_link(path).map_err(|source| LdxError::ReadLink {
            path: path.to_path_buf(),
            source,
        })?;
        line.push_str(" -> ");
        line.push_str(&target.to_string_lossy());
    }

    Ok(line)
}
