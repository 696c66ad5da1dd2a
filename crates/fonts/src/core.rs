//! The standard 14 PDF fonts.
use crate::metrics;
use crate::style::FontStyle;

/// Underline position, in 1/1000 em, used for every core font.
pub const CORE_UNDERLINE_POSITION: i32 = -100;
/// Underline thickness, in 1/1000 em, used for every core font.
pub const CORE_UNDERLINE_THICKNESS: i32 = 50;

/// Families that exist in a single style only.
pub const STYLELESS_FAMILIES: [&str; 2] = ["symbol", "zapfdingbats"];

#[derive(Debug)]
pub struct CoreFont {
    /// Registry key: family followed by the canonical style (`"timesBI"`).
    pub key: &'static str,
    pub family: &'static str,
    pub style: FontStyle,
    /// PostScript name written as `/BaseFont`.
    pub base_name: &'static str,
    pub widths: &'static [u16; 256],
}

impl CoreFont {
    /// Symbol and ZapfDingbats use their builtin encoding instead of WinAnsi.
    pub fn is_symbolic(&self) -> bool {
        is_styleless(self.family)
    }
}

const fn core(
    key: &'static str,
    family: &'static str,
    style: FontStyle,
    base_name: &'static str,
    widths: &'static [u16; 256],
) -> CoreFont {
    CoreFont { key, family, style, base_name, widths }
}

static CORE_FONTS: [CoreFont; 14] = [
    core("courier", "courier", FontStyle::REGULAR, "Courier", &metrics::COURIER),
    core("courierB", "courier", FontStyle::BOLD, "Courier-Bold", &metrics::COURIER),
    core("courierI", "courier", FontStyle::ITALIC, "Courier-Oblique", &metrics::COURIER),
    core("courierBI", "courier", FontStyle::BOLD_ITALIC, "Courier-BoldOblique", &metrics::COURIER),
    core("helvetica", "helvetica", FontStyle::REGULAR, "Helvetica", &metrics::HELVETICA),
    core("helveticaB", "helvetica", FontStyle::BOLD, "Helvetica-Bold", &metrics::HELVETICA_BOLD),
    core("helveticaI", "helvetica", FontStyle::ITALIC, "Helvetica-Oblique", &metrics::HELVETICA),
    core("helveticaBI", "helvetica", FontStyle::BOLD_ITALIC, "Helvetica-BoldOblique", &metrics::HELVETICA_BOLD),
    core("times", "times", FontStyle::REGULAR, "Times-Roman", &metrics::TIMES),
    core("timesB", "times", FontStyle::BOLD, "Times-Bold", &metrics::TIMES_BOLD),
    core("timesI", "times", FontStyle::ITALIC, "Times-Italic", &metrics::TIMES_ITALIC),
    core("timesBI", "times", FontStyle::BOLD_ITALIC, "Times-BoldItalic", &metrics::TIMES_BOLD_ITALIC),
    core("symbol", "symbol", FontStyle::REGULAR, "Symbol", &metrics::SYMBOL),
    core("zapfdingbats", "zapfdingbats", FontStyle::REGULAR, "ZapfDingbats", &metrics::ZAPFDINGBATS),
];

pub fn core_fonts() -> &'static [CoreFont] {
    &CORE_FONTS
}

/// Looks up a core font by registry key (`"helveticaB"`, `"symbol"`, ...).
pub fn lookup(key: &str) -> Option<&'static CoreFont> {
    CORE_FONTS.iter().find(|f| f.key == key)
}

pub fn is_core_family(family: &str) -> bool {
    CORE_FONTS.iter().any(|f| f.family == family)
}

pub fn is_styleless(family: &str) -> bool {
    STYLELESS_FAMILIES.contains(&family)
}

/// Distinct core family names in table order.
pub fn core_families() -> Vec<&'static str> {
    let mut families: Vec<&'static str> = Vec::new();
    for font in &CORE_FONTS {
        if !families.contains(&font.family) {
            families.push(font.family);
        }
    }
    families
}
