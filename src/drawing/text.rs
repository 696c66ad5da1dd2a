use super::{Align, CellStyle, PageFrame};
use crate::error::DocumentError;
use vellum_fonts::FontDescriptor;
use vellum_render_core::ContentSink;
use vellum_render_core::utils::escape_literal;

/// The font a text run is shown in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextFont<'a> {
    pub descriptor: &'a FontDescriptor,
    pub size_pt: f64,
    pub underline: bool,
}

impl TextFont<'_> {
    /// Width of already-encoded text in user units.
    pub fn width_of(&self, encoded: &[u8], k: f64) -> f64 {
        f64::from(self.descriptor.string_width(encoded)) * self.size_pt / k / 1000.0
    }
}

/// Selects a font for the following text operators.
pub(crate) fn select_font<S: ContentSink>(sink: &mut S, index: usize, size_pt: f64) {
    sink.append(format!("BT /F{} {:.2} Tf ET", index, size_pt));
}

/// Shows `content` with its baseline starting at `(x, y)`.
///
/// The text is encoded before anything is appended, so a character the font
/// cannot show leaves the sink untouched.
pub(crate) fn show_text<S: ContentSink>(
    sink: &mut S,
    frame: PageFrame,
    font: TextFont<'_>,
    x: f64,
    y: f64,
    content: &str,
) -> Result<(), DocumentError> {
    let encoded = font.descriptor.encode(content)?;
    let mut op = format!(
        "BT {:.2} {:.2} Td ({}) Tj ET",
        frame.x(x),
        frame.y(y),
        escape_literal(&encoded)
    );
    if font.underline && !encoded.is_empty() {
        op.push(' ');
        op.push_str(&underline(frame, font, x, y, &encoded));
    }
    sink.append(op);
    Ok(())
}

/// Bounds of a cell in user units, measured from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellBounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Draws the cell rectangle when `style` frames or fills it, then `text`
/// vertically centred and inset by `padding` from the aligned edge. Both go
/// out as one operator chunk; an empty unframed cell appends nothing.
pub(crate) fn show_cell<S: ContentSink>(
    sink: &mut S,
    frame: PageFrame,
    bounds: CellBounds,
    padding: f64,
    style: CellStyle,
    text: Option<(TextFont<'_>, &str)>,
) -> Result<(), DocumentError> {
    let mut op = String::new();
    if let Some(paint) = style.paint() {
        op.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} re {} ",
            frame.x(bounds.x),
            frame.y(bounds.y),
            frame.length(bounds.w),
            -frame.length(bounds.h),
            paint.operator()
        ));
    }
    if let Some((font, content)) = text
        && !content.is_empty()
    {
        let encoded = font.descriptor.encode(content)?;
        let width = font.width_of(&encoded, frame.k);
        let dx = match style.align {
            Align::Left => padding,
            Align::Center => (bounds.w - width) / 2.0,
            Align::Right => bounds.w - padding - width,
        };
        let x = bounds.x + dx;
        let baseline = bounds.y + 0.5 * bounds.h + 0.3 * font.size_pt / frame.k;
        op.push_str(&format!(
            "BT {:.2} {:.2} Td ({}) Tj ET",
            frame.x(x),
            frame.y(baseline),
            escape_literal(&encoded)
        ));
        if font.underline {
            op.push(' ');
            op.push_str(&underline(frame, font, x, baseline, &encoded));
        }
    }
    if !op.is_empty() {
        sink.append(op);
    }
    Ok(())
}

fn underline(frame: PageFrame, font: TextFont<'_>, x: f64, y: f64, encoded: &[u8]) -> String {
    let size = font.size_pt / frame.k;
    let up = f64::from(font.descriptor.underline_position);
    let ut = f64::from(font.descriptor.underline_thickness);
    let width = font.width_of(encoded, frame.k);
    format!(
        "{:.2} {:.2} {:.2} {:.2} re f",
        frame.x(x),
        (frame.h - y + up / 1000.0 * size) * frame.k,
        frame.length(width),
        -ut / 1000.0 * font.size_pt
    )
}
