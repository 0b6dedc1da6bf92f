//! FNV-1a 32-bit hashing.
//!
//! Table keys are the FNV-1a digest of the UTF-16LE bytes of the source
//! string, up to (not including) the first NUL. The authoring side must use
//! the same constants, otherwise no lookup will ever hit.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a byte slice with FNV-1a (32-bit).
///
/// # Examples
/// ```
/// use ymo_core::fnv1a_32;
/// assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
/// ```
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hasher = Fnv1a::new();
    hasher.write(bytes);
    hasher.finish()
}

/// Hash a string the way table keys are hashed (UTF-16LE code units).
///
/// Keys are C strings on the authoring side, so hashing stops at the first
/// U+0000: `"a\0b"` hashes like `"a"`.
pub fn key_hash(text: &str) -> u32 {
    let mut hasher = Fnv1a::new();
    for unit in text.encode_utf16().take_while(|&unit| unit != 0) {
        hasher.write(&unit.to_le_bytes());
    }
    hasher.finish()
}

/// Incremental FNV-1a state.
///
/// Feeding bytes in several calls yields the same digest as one call over the
/// concatenation.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a(u32);

impl Fnv1a {
    pub fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u32::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    pub fn finish(self) -> u32 {
        self.0
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}
