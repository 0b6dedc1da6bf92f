//! Diagnostics collected while loading a table.
//!
//! Loading never fails; the report records what was degraded and why.

use std::fmt;

use super::entry::Entry;

/// Why a single entry was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("string offset is past the end of the buffer")]
    OutOfBounds,
    #[error("string offset is not aligned to a code unit")]
    Misaligned,
    #[error("no room for a code unit at the string offset")]
    NoRoom,
    #[error("string is not NUL-terminated before the end of the buffer")]
    Unterminated,
}

/// A dropped entry and its position in the entry array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub index: u16,
    pub entry: Entry,
    pub reason: RejectReason,
}

/// Outcome of reading the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStatus {
    /// Header and all declared entry records fit in the buffer.
    Ok,
    /// Buffer is too small to hold the count.
    Empty { size: usize },
    /// Declared entry records do not fit; the whole table was discarded.
    Truncated {
        declared: u16,
        needed: usize,
        actual: usize,
    },
}

impl fmt::Display for HeaderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HeaderStatus::Ok => f.write_str("ok"),
            HeaderStatus::Empty { size } => write!(f, "empty ({size} bytes, header needs 2)"),
            HeaderStatus::Truncated {
                declared,
                needed,
                actual,
            } => write!(
                f,
                "truncated ({declared} entries need {needed} bytes, have {actual})"
            ),
        }
    }
}

/// Summary of one load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadReport {
    /// Buffer size in bytes.
    pub size: usize,
    pub header: HeaderStatus,
    /// Entry count declared by the header (0 when the header is missing).
    pub declared: u16,
    /// Entries that made it into the table (after duplicate collapsing).
    pub loaded: usize,
    /// Accepted entries whose hash replaced an earlier accepted entry.
    pub duplicates: usize,
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    pub(crate) fn new(size: usize, header: HeaderStatus, declared: u16) -> Self {
        Self {
            size,
            header,
            declared,
            loaded: 0,
            duplicates: 0,
            rejected: Vec::new(),
        }
    }

    /// True when the header was intact and no entry was dropped.
    pub fn is_clean(&self) -> bool {
        self.header == HeaderStatus::Ok && self.rejected.is_empty()
    }
}
