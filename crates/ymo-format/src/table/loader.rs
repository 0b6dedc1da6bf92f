//! Defensive table loader.
//!
//! The loader degrades instead of failing: a header that does not fit yields
//! an empty table, and a malformed entry is dropped without affecting the
//! others. Strings are decoded and copied out of the buffer, so the table
//! does not borrow from it.

use std::collections::HashMap;

use ymo_core::decode_utf16le;

use super::entry::Entry;
use super::header::Header;
use super::report::{HeaderStatus, LoadReport, Rejection};

/// Decoded translation table: key hash to translated text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    strings: HashMap<u32, Box<str>>,
}

impl TranslationTable {
    /// A table with no translations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a table from raw bytes. Never fails; see [`load_with_report`](Self::load_with_report).
    pub fn load(bytes: &[u8]) -> Self {
        Self::load_with_report(bytes).0
    }

    /// Load a table and report everything that was discarded.
    pub fn load_with_report(bytes: &[u8]) -> (Self, LoadReport) {
        let size = bytes.len();

        let Some(header) = Header::from_bytes(bytes) else {
            tracing::warn!(size, "translation table too small for header");
            let report = LoadReport::new(size, HeaderStatus::Empty { size }, 0);
            return (Self::empty(), report);
        };

        let needed = header.table_size();
        if size < needed {
            tracing::warn!(
                declared = header.count,
                needed,
                size,
                "translation table truncated, ignoring all entries"
            );
            let status = HeaderStatus::Truncated {
                declared: header.count,
                needed,
                actual: size,
            };
            return (Self::empty(), LoadReport::new(size, status, header.count));
        }

        let mut report = LoadReport::new(size, HeaderStatus::Ok, header.count);
        let mut strings = HashMap::with_capacity(header.count as usize);

        for index in 0..header.count {
            let at = Header::entry_offset(index);
            // `table_size` already fits in the buffer
            let Some(entry) = Entry::from_bytes(&bytes[at..]) else {
                break;
            };

            match entry.locate(bytes) {
                Ok(range) => {
                    let text = decode_utf16le(&bytes[range]).into_boxed_str();
                    if strings.insert(entry.hash, text).is_some() {
                        report.duplicates += 1;
                    }
                }
                Err(reason) => {
                    tracing::debug!(
                        index,
                        hash = entry.hash,
                        offset = entry.offset,
                        %reason,
                        "dropping translation entry"
                    );
                    report.rejected.push(Rejection {
                        index,
                        entry,
                        reason,
                    });
                }
            }
        }

        report.loaded = strings.len();
        if !report.rejected.is_empty() {
            tracing::warn!(
                rejected = report.rejected.len(),
                loaded = report.loaded,
                "translation table has malformed entries"
            );
        }

        (Self { strings }, report)
    }

    /// Translated text for a key hash.
    #[inline]
    pub fn get(&self, hash: u32) -> Option<&str> {
        self.strings.get(&hash).map(|s| &**s)
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.strings.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Entries ordered by hash.
    pub fn sorted_entries(&self) -> Vec<(u32, &str)> {
        let mut entries: Vec<_> = self.strings.iter().map(|(&h, s)| (h, &**s)).collect();
        entries.sort_unstable_by_key(|&(h, _)| h);
        entries
    }
}
