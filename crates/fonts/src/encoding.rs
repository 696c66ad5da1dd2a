//! Single-byte text encodings used by simple fonts.

/// Characters at WinAnsi codes 0x80..=0x9F. `None` marks unassigned codes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// The character a WinAnsi byte code stands for.
pub fn win_ansi_char(code: u8) -> Option<char> {
    match code {
        0x80..=0x9F => WIN_ANSI_HIGH[(code - 0x80) as usize],
        _ => Some(char::from(code)),
    }
}

/// The WinAnsi byte code for `ch`, if the encoding has one.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    match ch as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(ch as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|c| *c == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes `text` as WinAnsi bytes. On failure returns the index and the
/// first character without a code.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, (usize, char)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| win_ansi_code(ch).ok_or((i, ch)))
        .collect()
}

/// Encodes `text` byte-for-byte (code point == byte code), as used by fonts
/// with a builtin encoding.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, (usize, char)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| u8::try_from(u32::from(ch)).map_err(|_| (i, ch)))
        .collect()
}
