//! Font style specifiers.
//!
//! Styles arrive as strings of `B`, `I` and `U` letters in any order and case.
//! Bold and italic select a font variant; underline is a drawing flag carried
//! next to the style rather than inside it.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle { bold: false, italic: false };
    pub const BOLD: FontStyle = FontStyle { bold: true, italic: false };
    pub const ITALIC: FontStyle = FontStyle { bold: false, italic: true };
    pub const BOLD_ITALIC: FontStyle = FontStyle { bold: true, italic: true };

    pub const ALL: [FontStyle; 4] = [
        FontStyle::REGULAR,
        FontStyle::BOLD,
        FontStyle::ITALIC,
        FontStyle::BOLD_ITALIC,
    ];

    /// Canonical form: `""`, `"B"`, `"I"` or `"BI"`.
    pub fn as_str(self) -> &'static str {
        match (self.bold, self.italic) {
            (false, false) => "",
            (true, false) => "B",
            (false, true) => "I",
            (true, true) => "BI",
        }
    }

    pub fn is_regular(self) -> bool {
        !self.bold && !self.italic
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed style string: the font variant plus the underline flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSpec {
    pub style: FontStyle,
    pub underline: bool,
}

impl StyleSpec {
    /// Parses a style string. Letters other than `B`, `I` and `U` are ignored,
    /// as are duplicates, so `"IB"`, `"bi"` and `"BIB"` all yield `"BI"`.
    pub fn parse(spec: &str) -> Self {
        let mut parsed = StyleSpec::default();
        for c in spec.chars() {
            match c.to_ascii_uppercase() {
                'B' => parsed.style.bold = true,
                'I' => parsed.style.italic = true,
                'U' => parsed.underline = true,
                _ => log::debug!("Ignoring unknown style letter '{}' in '{}'", c, spec),
            }
        }
        parsed
    }
}

impl From<&str> for StyleSpec {
    fn from(spec: &str) -> Self {
        StyleSpec::parse(spec)
    }
}
