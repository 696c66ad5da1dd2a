//! Content-stream emitters. Each function formats operators for one drawing
//! call and appends them to a [`ContentSink`]; the document checks the page
//! and font preconditions before calling in.
use vellum_render_core::utils::flip_y;

pub(crate) mod path;
pub(crate) mod text;

/// Coordinate frame of the open page: `k` points per user unit and the page
/// height in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PageFrame {
    pub k: f64,
    pub h: f64,
}

impl PageFrame {
    pub fn x(&self, x: f64) -> f64 {
        x * self.k
    }

    /// Converts a top-left-origin y to bottom-left-origin points.
    pub fn y(&self, y: f64) -> f64 {
        flip_y(y, self.h) * self.k
    }

    pub fn length(&self, value: f64) -> f64 {
        value * self.k
    }
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Outline only.
    #[default]
    Stroke,
    Fill,
    FillStroke,
}

impl PaintStyle {
    pub fn operator(self) -> &'static str {
        match self {
            PaintStyle::Stroke => "S",
            PaintStyle::Fill => "f",
            PaintStyle::FillStroke => "B",
        }
    }

    /// Reads the `"D"`, `"F"`, `"DF"`/`"FD"` shorthands. Anything else strokes.
    pub fn from_shorthand(style: &str) -> Self {
        match style.to_ascii_uppercase().as_str() {
            "F" => PaintStyle::Fill,
            "DF" | "FD" => PaintStyle::FillStroke,
            _ => PaintStyle::Stroke,
        }
    }
}

/// Horizontal placement of text in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the cursor goes after a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMove {
    /// To the right edge of the cell.
    #[default]
    Right,
    /// To the left margin of the next line.
    NextLine,
    /// Below the cell, keeping its left edge.
    Below,
}

/// Frame, background and text placement of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub border: bool,
    pub fill: bool,
    pub align: Align,
    pub then: CellMove,
}

impl CellStyle {
    pub fn bordered() -> Self {
        Self {
            border: true,
            ..Self::default()
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn then(mut self, then: CellMove) -> Self {
        self.then = then;
        self
    }

    /// Paint operator for the cell rectangle, if one is drawn.
    pub(crate) fn paint(&self) -> Option<PaintStyle> {
        match (self.fill, self.border) {
            (true, true) => Some(PaintStyle::FillStroke),
            (true, false) => Some(PaintStyle::Fill),
            (false, true) => Some(PaintStyle::Stroke),
            (false, false) => None,
        }
    }
}
