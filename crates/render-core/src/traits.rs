use crate::error::RenderError;
use crate::types::{DocumentInfo, PageContent};
use lopdf::ObjectId;
use std::io::Write;
use vellum_fonts::FontRegistry;

/// Append-only destination for the content-stream operators of one page.
///
/// Operators are kept in call order; the drawing code never reads them back.
pub trait ContentSink {
    fn append(&mut self, op: String);
}

impl ContentSink for Vec<String> {
    fn append(&mut self, op: String) {
        self.push(op);
    }
}

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, fonts: &FontRegistry, info: &DocumentInfo)
    -> Result<(), RenderError>;

    fn render_page(&mut self, page: &PageContent) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, writer: W) -> Result<W, RenderError>;
}
