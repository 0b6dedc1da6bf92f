//! Raw table bytes.

use std::io;
use std::ops::Deref;
use std::path::Path;

/// Storage for raw table bytes: either owned, or a `'static` resource
/// (e.g. `include_bytes!`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ByteStorage {
    Owned(Vec<u8>),
    Static(&'static [u8]),
}

impl Deref for ByteStorage {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Static(bytes) => bytes,
        }
    }
}

impl ByteStorage {
    /// Create from owned bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::Owned(bytes)
    }

    /// Wrap an embedded resource without copying.
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::Static(bytes)
    }

    /// Copy bytes from a borrowed slice.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        Self::Owned(bytes.to_vec())
    }

    /// Read a file into memory.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::Owned(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        self
    }
}
