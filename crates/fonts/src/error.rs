use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Undefined font: {family} - Use built-in fonts or add_font() beforehand")]
    UndefinedFont { family: String },

    #[error("Failed to read font file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data: {0}")]
    InvalidFontData(String),

    #[error(
        "Character \"{ch}\" at index {index} in text is outside the range of characters supported by the font used: \"{family}\". Please consider using a Unicode font."
    )]
    UnsupportedCharacter { ch: char, index: usize, family: String },
}
