//! YMO translation table layout.
//!
//! ```text
//! offset 0:         u16 count
//! offset 2:         entry[count]          (count * 6 bytes)
//!   each entry:     u32 hash, u16 string offset
//! at string offset: UTF-16LE code units, NUL-terminated
//! ```
//!
//! All integers are little-endian. There is no magic number, no version and no
//! length for the string region: string bounds are found by scanning for the
//! terminator, so every offset is treated as untrusted input.

mod constants;
pub mod dump;
mod entry;
mod header;
mod loader;
mod report;
mod storage;
mod writer;

#[cfg(test)]
mod storage_tests;

pub use constants::{CODE_UNIT_SIZE, ENTRY_SIZE, HEADER_SIZE, MAX_ENTRIES, MAX_STRING_OFFSET};
pub use dump::dump;
pub use entry::Entry;
pub use header::Header;
pub use loader::TranslationTable;
pub use report::{HeaderStatus, LoadReport, RejectReason, Rejection};
pub use storage::ByteStorage;
pub use writer::{TableWriter, WriteError};

/// Read a little-endian u16 from bytes at the given offset.
#[inline]
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Read a little-endian u32 from bytes at the given offset.
#[inline]
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
