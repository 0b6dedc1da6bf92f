//! Property-based invariants for the table loader.
//!
//! 1. Loading arbitrary bytes never panics and never yields more entries than declared
//! 2. Entries pointing at or past the end of the buffer are absent
//! 3. Entries with odd offsets are absent
//! 4. Tables emitted by the writer load back without rejections; texts with NUL are refused
//! 5. A truncated entry array always degrades to an empty table

use proptest::prelude::*;
use ymo_format::{Entry, HeaderStatus, RejectReason, TableWriter, TranslationTable, WriteError};

/// Header + one entry per hash (each with the given offset), then `tail`.
fn build(entries: &[(u32, u16)], tail: &[u8]) -> Vec<u8> {
    let mut out = (entries.len() as u16).to_le_bytes().to_vec();
    for &(hash, offset) in entries {
        out.extend_from_slice(&Entry { hash, offset }.to_bytes());
    }
    out.extend_from_slice(tail);
    out
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let (table, report) = TranslationTable::load_with_report(&bytes);
        prop_assert!(table.len() <= report.declared as usize);
        prop_assert_eq!(report.loaded, table.len());
        prop_assert_eq!(report.size, bytes.len());
    }

    #[test]
    fn out_of_bounds_offsets_are_absent(
        tail in proptest::collection::vec(any::<u8>(), 0..64),
        excess in 0u16..1024,
    ) {
        let size = 8 + tail.len();
        let offset = (size as u16).saturating_add(excess);
        let bytes = build(&[(42, offset)], &tail);

        let (table, report) = TranslationTable::load_with_report(&bytes);
        prop_assert!(!table.contains(42));
        prop_assert_eq!(report.rejected[0].reason, RejectReason::OutOfBounds);
    }

    #[test]
    fn odd_offsets_are_absent(
        tail in proptest::collection::vec(any::<u8>(), 0..64),
        offset in any::<u16>(),
    ) {
        let offset = offset | 1;
        let bytes = build(&[(42, offset)], &tail);

        let table = TranslationTable::load(&bytes);
        prop_assert!(!table.contains(42));
    }

    #[test]
    fn random_offsets_respect_bounds(
        offsets in proptest::collection::vec(any::<u16>(), 1..16),
        tail in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let entries: Vec<(u32, u16)> = offsets.iter().enumerate().map(|(i, &o)| (i as u32, o)).collect();
        let bytes = build(&entries, &tail);
        let table = TranslationTable::load(&bytes);

        for (hash, offset) in entries {
            if offset as usize >= bytes.len() || offset % 2 != 0 {
                prop_assert!(!table.contains(hash));
            }
        }
    }

    #[test]
    fn writer_output_loads_cleanly(
        pairs in proptest::collection::hash_map(any::<u32>(), "[a-zA-Z0-9 \u{e9}\u{1F600}\\x00]{0,12}", 0..24),
    ) {
        let mut writer = TableWriter::new();
        for (hash, text) in &pairs {
            writer.insert_hash(*hash, text);
        }

        let with_nul: Vec<u32> = pairs
            .iter()
            .filter(|(_, text)| text.contains('\0'))
            .map(|(&hash, _)| hash)
            .collect();

        match writer.emit() {
            Ok(bytes) => {
                prop_assert!(with_nul.is_empty());
                let (table, report) = TranslationTable::load_with_report(&bytes);
                prop_assert!(report.is_clean());
                for (hash, text) in &pairs {
                    prop_assert_eq!(table.get(*hash), Some(text.as_str()));
                }
            }
            Err(WriteError::EmbeddedNul { hash }) => {
                prop_assert!(with_nul.contains(&hash));
            }
            Err(other) => prop_assert!(false, "unexpected write error: {}", other),
        }
    }

    #[test]
    fn truncated_entry_array_is_empty(declared in 1u16..64, keep in 0usize..64) {
        let entries: Vec<(u32, u16)> = (0..declared as u32).map(|h| (h, 0)).collect();
        let mut bytes = build(&entries, &[0; 4]);
        let needed = 2 + declared as usize * 6;
        bytes.truncate(keep.min(needed - 1).max(2));

        let (table, report) = TranslationTable::load_with_report(&bytes);
        prop_assert!(table.is_empty());
        let truncated = matches!(report.header, HeaderStatus::Truncated { .. });
        prop_assert!(truncated);
    }
}
