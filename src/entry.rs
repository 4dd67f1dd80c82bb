use std::ffi::OsString;
use std::fs::Metadata;
use std::os::unix::fs::{FileTypeExt, MetadataExt};

/// One member discovered during one directory enumeration.
///
/// Entries are transient: built from a single `read_dir` step plus one
/// link-aware stat, handed straight to the formatter, then dropped. Nothing
/// in the crate stores them in a collection.
pub struct Entry {
    /// The entry's own name, as the filesystem reported it.
    pub name: OsString,

    /// Inode number.
    pub ino: u64,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Raw type + permission bits from the stat record.
    pub mode: u32,

    /// Hard link count.
    pub nlink: u64,

    /// Owning user id.
    pub uid: u32,

    /// Owning group id.
    pub gid: u32,

    /// Size in bytes.
    pub size: u64,

    /// Allocated 512-byte blocks.
    pub blocks: u64,

    /// Modification time, seconds since the epoch.
    pub mtime: i64,
}

impl Entry {
    /// Build an entry from its name and a link-aware stat record.
    pub fn from_metadata(name: impl Into<OsString>, meta: &Metadata) -> Self {
        Self {
            name: name.into(),
            ino: meta.ino(),
            kind: EntryKind::from_file_type(meta.file_type()),
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            blocks: meta.blocks(),
            mtime: meta.mtime(),
        }
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// A character device.
    CharDevice,

    /// A block device.
    BlockDevice,

    /// A named pipe.
    Fifo,

    /// A unix domain socket.
    Socket,

    /// Anything the platform reports that none of the above cover.
    Other,
}

impl EntryKind {
    /// Classify a `std::fs::FileType` into an [`EntryKind`].
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_char_device() {
            EntryKind::CharDevice
        } else if ft.is_block_device() {
            EntryKind::BlockDevice
        } else if ft.is_fifo() {
            EntryKind::Fifo
        } else if ft.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Other
        }
    }

    /// The type glyph that leads the 10-character mode string: `d` for
    /// directories, `-` for every other recognized kind, `?` otherwise.
    pub fn glyph(self) -> char {
        match self {
            EntryKind::Dir => 'd',
            EntryKind::Other => '?',
            _ => '-',
        }
    }
}
