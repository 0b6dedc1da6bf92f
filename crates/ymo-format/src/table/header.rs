//! Table header (2 bytes).

use super::constants::{ENTRY_SIZE, HEADER_SIZE};
use super::read_u16_le;

/// Table header: the declared number of entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub count: u16,
}

impl Header {
    /// Decode the header, or `None` when fewer than 2 bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_SIZE {
            return None;
        }
        Some(Self {
            count: read_u16_le(bytes, 0),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        self.count.to_le_bytes()
    }

    /// Bytes occupied by the header and the entry records it declares.
    #[inline]
    pub fn table_size(&self) -> usize {
        HEADER_SIZE + self.count as usize * ENTRY_SIZE
    }

    /// Byte position of the entry record at `index`.
    #[inline]
    pub fn entry_offset(index: u16) -> usize {
        HEADER_SIZE + index as usize * ENTRY_SIZE
    }
}
