//! UTF-16LE helpers matching the table's string layout.

/// Separator between context and message in a context key (`"ctx\x04msg"`).
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Encode a string as UTF-16LE bytes, without a terminator.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Decode UTF-16LE bytes, replacing unpaired surrogates with U+FFFD.
///
/// A trailing odd byte is ignored.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Build the lookup key for a message disambiguated by `context`.
///
/// # Examples
/// ```
/// use ymo_core::context_key;
/// assert_eq!(context_key("File", "Open"), "File\u{4}Open");
/// ```
pub fn context_key(context: &str, message: &str) -> String {
    let mut key = String::with_capacity(context.len() + 1 + message.len());
    key.push_str(context);
    key.push(CONTEXT_SEPARATOR);
    key.push_str(message);
    key
}
