//! Sources of raw table bytes.
//!
//! Choosing a table for a locale is the host's job; the translator only asks
//! a [`ResourceProvider`] for the bytes of one language.

use std::io;
use std::path::{Path, PathBuf};

use ymo_format::ByteStorage;

/// File extension of table resources.
pub const TABLE_EXTENSION: &str = "ymo";

/// Supplies the raw table for a language tag such as `fr-FR`.
pub trait ResourceProvider {
    /// Raw table bytes, or `None` when there is no table for `language`.
    fn load(&self, language: &str) -> Option<ByteStorage>;
}

impl<F> ResourceProvider for F
where
    F: Fn(&str) -> Option<ByteStorage>,
{
    fn load(&self, language: &str) -> Option<ByteStorage> {
        self(language)
    }
}

/// Tables stored as `<root>/<language>.ymo`.
///
/// A regional tag falls back to its primary subtag (`fr-CA` tries `fr-CA`,
/// then `fr`).
#[derive(Clone, Debug)]
pub struct DirectoryProvider {
    root: PathBuf,
    extension: String,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: TABLE_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the table for an exact language tag.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.root.join(format!("{language}.{}", self.extension))
    }
}

impl ResourceProvider for DirectoryProvider {
    fn load(&self, language: &str) -> Option<ByteStorage> {
        for candidate in language_candidates(language) {
            let path = self.path_for(candidate);
            match ByteStorage::from_file(&path) {
                Ok(bytes) => {
                    tracing::debug!(path = %path.display(), "loaded translation table");
                    return Some(bytes);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read translation table");
                }
            }
        }
        None
    }
}

/// Tags to try, most specific first. Tags that could escape the root
/// directory yield nothing.
pub(crate) fn language_candidates(language: &str) -> Vec<&str> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Vec::new();
    }

    let mut candidates = vec![language];
    if let Some((primary, _)) = language.split_once(['-', '_'])
        && !primary.is_empty()
    {
        candidates.push(primary);
    }
    candidates
}
