use crate::core::{CORE_UNDERLINE_POSITION, CORE_UNDERLINE_THICKNESS, CoreFont};
use crate::encoding::{encode_latin1, encode_win_ansi};
use crate::error::FontError;
use crate::style::FontStyle;
use crate::truetype::TrueTypeFace;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontKind {
    /// One of the standard 14 fonts; never embedded.
    Core,
    /// A user-supplied TrueType font, embedded on output.
    TrueType,
}

impl FontKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FontKind::Core => "core",
            FontKind::TrueType => "TTF",
        }
    }
}

/// A font known to a document's registry.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Registry key: family followed by the canonical style.
    pub key: String,
    pub family: String,
    pub style: FontStyle,
    /// 1-based, assigned on first use; referenced as `/F{index}`.
    pub index: usize,
    pub kind: FontKind,
    /// PostScript name written as `/BaseFont`.
    pub name: String,
    pub underline_position: i32,
    pub underline_thickness: i32,
    pub widths: Cow<'static, [u16; 256]>,
    /// Builtin-encoded fonts take code points as byte codes instead of WinAnsi.
    pub symbolic: bool,
    pub face: Option<Arc<TrueTypeFace>>,
}

impl FontDescriptor {
    pub(crate) fn from_core(font: &'static CoreFont, index: usize) -> Self {
        Self {
            key: font.key.to_string(),
            family: font.family.to_string(),
            style: font.style,
            index,
            kind: FontKind::Core,
            name: font.base_name.to_string(),
            underline_position: CORE_UNDERLINE_POSITION,
            underline_thickness: CORE_UNDERLINE_THICKNESS,
            widths: Cow::Borrowed(font.widths),
            symbolic: font.is_symbolic(),
            face: None,
        }
    }

    pub(crate) fn from_truetype(
        key: String,
        family: String,
        style: FontStyle,
        index: usize,
        face: TrueTypeFace,
    ) -> Self {
        Self {
            key,
            family,
            style,
            index,
            kind: FontKind::TrueType,
            name: face.postscript_name.clone(),
            underline_position: face.underline_position,
            underline_thickness: face.underline_thickness,
            widths: Cow::Owned(face.widths),
            symbolic: false,
            face: Some(Arc::new(face)),
        }
    }

    /// Resource name used in content streams (`F1`, `F2`, ...).
    pub fn resource_name(&self) -> String {
        format!("F{}", self.index)
    }

    /// Encodes `text` into the single-byte codes this font understands.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, FontError> {
        let encoded = if self.symbolic {
            encode_latin1(text)
        } else {
            encode_win_ansi(text)
        };
        encoded.map_err(|(index, ch)| FontError::UnsupportedCharacter {
            ch,
            index,
            family: self.family.clone(),
        })
    }

    pub fn char_width(&self, code: u8) -> u16 {
        self.widths[code as usize]
    }

    /// Sum of advance widths of already-encoded bytes, in 1/1000 em.
    pub fn string_width(&self, encoded: &[u8]) -> u32 {
        encoded.iter().map(|b| u32::from(self.char_width(*b))).sum()
    }
}
