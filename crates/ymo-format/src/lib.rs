//! Binary format for YMO translation tables.
//!
//! This crate contains:
//! - Layout definitions (Header, Entry, constants)
//! - The defensive loader producing a [`TranslationTable`]
//! - A writer for building table bytes (fixtures, tooling)
//! - A human-readable dump

pub mod table;

pub use table::{
    ByteStorage, ENTRY_SIZE, Entry, HEADER_SIZE, Header, HeaderStatus, LoadReport, MAX_ENTRIES,
    RejectReason, Rejection, TableWriter, TranslationTable, WriteError, dump,
};
