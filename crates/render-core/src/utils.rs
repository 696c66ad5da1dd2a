/// Convert a top-left-origin y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f64, page_height: f64) -> f64 {
    page_height - y
}

/// Builds the body of a PDF literal string from byte codes, escaping the
/// characters that would otherwise end or corrupt it. Each code becomes the
/// char with the same value so [`to_single_bytes`] restores it exactly.
pub fn escape_literal(codes: &[u8]) -> String {
    let mut out = String::with_capacity(codes.len());
    for &code in codes {
        match code {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\r' => out.push_str("\\r"),
            _ => out.push(char::from(code)),
        }
    }
    out
}

/// Writes every char as one byte; anything above U+00FF becomes `?`.
pub fn to_single_bytes(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
}
