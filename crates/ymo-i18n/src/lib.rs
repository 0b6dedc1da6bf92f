//! Translation lookup for YMO tables.
//!
//! A [`Translator`] owns a loaded table and a memoization cache. Build one at
//! startup and pass it to whatever needs translated text:
//!
//! ```
//! use ymo_format::TableWriter;
//! use ymo_i18n::Translator;
//!
//! let mut writer = TableWriter::new();
//! writer.insert("Exit", "Quitter");
//! writer.insert_in_context("Menu", "Open", "Ouvrir");
//! let bytes = writer.emit().unwrap();
//!
//! let tr = Translator::from_bytes(&bytes);
//! assert_eq!(tr.resolve("Exit"), "Quitter");
//! assert_eq!(tr.resolve("Help"), "Help");
//! assert_eq!(tr.resolve_in_context("Menu", "Open"), "Ouvrir");
//! assert_eq!(tr.resolve_in_context("Toolbar", "Open"), "Open");
//! ```

mod provider;
mod translator;


pub use provider::{DirectoryProvider, ResourceProvider, TABLE_EXTENSION};
pub use translator::{ResolveStats, Translator};
