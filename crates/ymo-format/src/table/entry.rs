//! Entry records (6 bytes each).

use std::ops::Range;

use super::constants::{CODE_UNIT_SIZE, ENTRY_SIZE};
use super::report::RejectReason;
use super::{read_u16_le, read_u32_le};

/// One entry record: the key hash and the byte offset of its string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    pub hash: u32,
    pub offset: u16,
}

impl Entry {
    /// Decode an entry, or `None` when fewer than 6 bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < ENTRY_SIZE {
            return None;
        }
        Some(Self {
            hash: read_u32_le(bytes, 0),
            offset: read_u16_le(bytes, 4),
        })
    }

    pub fn to_bytes(&self) -> [u8; ENTRY_SIZE] {
        let mut bytes = [0u8; ENTRY_SIZE];
        bytes[0..4].copy_from_slice(&self.hash.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.offset.to_le_bytes());
        bytes
    }

    /// Locate this entry's string inside `buffer`.
    ///
    /// Returns the byte range of the code units before the terminator. The
    /// scan never looks past `buffer.len()`.
    pub fn locate(&self, buffer: &[u8]) -> Result<Range<usize>, RejectReason> {
        let start = self.offset as usize;
        if start >= buffer.len() {
            return Err(RejectReason::OutOfBounds);
        }
        if start % CODE_UNIT_SIZE != 0 {
            return Err(RejectReason::Misaligned);
        }

        let max_chars = (buffer.len() - start) / CODE_UNIT_SIZE;
        if max_chars == 0 {
            return Err(RejectReason::NoRoom);
        }

        let terminator = buffer[start..]
            .chunks_exact(CODE_UNIT_SIZE)
            .take(max_chars)
            .position(|unit| unit == [0, 0])
            .ok_or(RejectReason::Unterminated)?;

        Ok(start..start + terminator * CODE_UNIT_SIZE)
    }
}
