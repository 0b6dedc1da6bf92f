#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives for YMO translation tables.
//!
//! - **Hashing**: FNV-1a 32-bit, the key function of the table format
//! - **UTF-16**: encoding helpers matching the table's code-unit layout
//! - **Colors**: ANSI palette for human-readable dumps

pub mod colors;
pub mod hash;
pub mod utf16;


pub use colors::Colors;
pub use hash::{FNV_OFFSET_BASIS, FNV_PRIME, Fnv1a, fnv1a_32, key_hash};
pub use utf16::{CONTEXT_SEPARATOR, context_key, decode_utf16le, encode_utf16le};
