use thiserror::Error;
use vellum_fonts::FontError;
use vellum_render_core::RenderError;

/// Errors raised by [`crate::Document`] operations.
///
/// Every error is returned before the document state or the page content is
/// touched, so a failed call leaves the document as it was.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("No page open, you need to call add_page() first")]
    NoOpenPage,

    #[error("No font set, you need to call set_font() beforehand")]
    NoFontSet,

    #[error("A path needs at least {required} points, got {given}")]
    DegeneratePath { given: usize, required: usize },

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
