//! Graphics state of a document: the current font, cursor, line width and
//! margins, plus whether a page is open.
use vellum_fonts::FontStyle;

/// The font chosen by the last successful `set_font`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CurrentFont {
    pub key: String,
    pub family: String,
    pub style: FontStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct GraphicsState {
    pub font: Option<CurrentFont>,
    pub underline: bool,
    pub font_size_pt: f64,
    pub x: f64,
    pub y: f64,
    /// In user units.
    pub line_width: f64,
    pub margins: Margins,
    /// Inset of cell text from the cell edge, in user units.
    pub cell_margin: f64,
    pub last_cell_height: f64,
    pub page_open: bool,
}

pub(crate) const DEFAULT_FONT_SIZE_PT: f64 = 12.0;
/// 1 cm, in points.
const DEFAULT_MARGIN_PT: f64 = 28.35;
/// 0.2 mm, in points.
const DEFAULT_LINE_WIDTH_PT: f64 = 0.567;

impl GraphicsState {
    /// Initial state for a document whose unit has `k` points per user unit.
    pub fn new(k: f64) -> Self {
        let margin = DEFAULT_MARGIN_PT / k;
        Self {
            font: None,
            underline: false,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            x: margin,
            y: margin,
            line_width: DEFAULT_LINE_WIDTH_PT / k,
            margins: Margins {
                left: margin,
                top: margin,
                right: margin,
            },
            cell_margin: margin / 10.0,
            last_cell_height: 0.0,
            page_open: false,
        }
    }

    /// Moves the cursor to the top-left corner of the printable area.
    pub fn home(&mut self) {
        self.x = self.margins.left;
        self.y = self.margins.top;
    }

    pub fn is_current(&self, key: &str, size_pt: f64) -> bool {
        self.font.as_ref().is_some_and(|f| f.key == key) && self.font_size_pt == size_pt
    }
}
