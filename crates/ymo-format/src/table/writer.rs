//! Table writer.
//!
//! Produces bytes in the exact layout the loader reads: header, entry
//! records, then the NUL-terminated UTF-16LE strings in insertion order.

use std::collections::HashMap;

use ymo_core::{context_key, encode_utf16le, key_hash};

use super::constants::{CODE_UNIT_SIZE, ENTRY_SIZE, HEADER_SIZE, MAX_ENTRIES, MAX_STRING_OFFSET};
use super::entry::Entry;
use super::header::Header;

/// Error while emitting table bytes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    #[error("too many entries: {0} (maximum {MAX_ENTRIES})")]
    TooManyEntries(usize),
    #[error("string offset {0} does not fit in 16 bits")]
    OffsetOverflow(usize),
    /// The loader would stop reading the string at the NUL.
    #[error("text for #{hash:08x} contains a NUL character")]
    EmbeddedNul { hash: u32 },
}

/// Collects `(hash, text)` pairs and emits table bytes.
///
/// Inserting a hash twice keeps the first position and the last text.
/// Texts must not contain U+0000, the string terminator.
#[derive(Debug, Default)]
pub struct TableWriter {
    /// Position of each hash in `entries`.
    positions: HashMap<u32, usize>,
    entries: Vec<(u32, String)>,
}

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation for `source`, returning its key hash.
    pub fn insert(&mut self, source: &str, text: &str) -> u32 {
        let hash = key_hash(source);
        self.insert_hash(hash, text);
        hash
    }

    /// Add a translation for `source` disambiguated by `context`.
    pub fn insert_in_context(&mut self, context: &str, source: &str, text: &str) -> u32 {
        self.insert(&context_key(context, source), text)
    }

    /// Add a translation under a precomputed hash.
    pub fn insert_hash(&mut self, hash: u32, text: &str) {
        if let Some(&pos) = self.positions.get(&hash) {
            self.entries[pos].1 = text.to_string();
            return;
        }
        self.positions.insert(hash, self.entries.len());
        self.entries.push((hash, text.to_string()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit the table bytes.
    pub fn emit(&self) -> Result<Vec<u8>, WriteError> {
        if self.entries.len() > MAX_ENTRIES {
            return Err(WriteError::TooManyEntries(self.entries.len()));
        }

        let header = Header {
            count: self.entries.len() as u16,
        };
        let mut out = Vec::with_capacity(HEADER_SIZE + self.entries.len() * ENTRY_SIZE);
        out.extend_from_slice(&header.to_bytes());

        let mut blob = Vec::new();
        let mut offset = header.table_size();
        for (hash, text) in &self.entries {
            if text.contains('\0') {
                return Err(WriteError::EmbeddedNul { hash: *hash });
            }
            if offset > MAX_STRING_OFFSET {
                return Err(WriteError::OffsetOverflow(offset));
            }
            let entry = Entry {
                hash: *hash,
                offset: offset as u16,
            };
            out.extend_from_slice(&entry.to_bytes());

            let encoded = encode_utf16le(text);
            offset += encoded.len() + CODE_UNIT_SIZE;
            blob.extend_from_slice(&encoded);
            blob.extend_from_slice(&[0, 0]);
        }

        out.extend_from_slice(&blob);
        Ok(out)
    }
}
