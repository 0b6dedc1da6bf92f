//! Table format constants.

/// Size of the count header in bytes.
pub const HEADER_SIZE: usize = 2;

/// Size of one entry record: u32 hash + u16 offset.
pub const ENTRY_SIZE: usize = 6;

/// Size of one UTF-16 code unit.
pub const CODE_UNIT_SIZE: usize = 2;

/// Maximum number of entries (count is a u16).
pub const MAX_ENTRIES: usize = u16::MAX as usize;

/// Largest byte offset an entry can point at (offset is a u16).
pub const MAX_STRING_OFFSET: usize = u16::MAX as usize;
