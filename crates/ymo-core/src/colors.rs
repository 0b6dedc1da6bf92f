//! Terminal styling for `ymo dump` and friends.

/// Escape sequences for each part of a table dump.
///
/// Every field is empty in [`Colors::OFF`], so formatting code can splice the
/// fields in unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Section titles (`[header]`, `[entries]`, `[rejected]`).
    pub blue: &'static str,
    /// Decoded translation text.
    pub green: &'static str,
    /// Reason an entry was rejected.
    pub yellow: &'static str,
    /// Entry indices in the rejected list.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Basic 16-color ANSI codes.
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain text.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
