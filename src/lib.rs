//! vellum builds PDF documents from drawing calls.
//!
//! A [`Document`] converts coordinates from the configured user unit to PDF
//! points, tracks the current font and cursor, and appends content-stream
//! operators to the open page. Fonts are the standard 14 core fonts, reachable
//! under their family names and a few common aliases, plus TrueType fonts
//! added by the caller.
//!
//! ```no_run
//! use vellum::{Document, DocumentError};
//!
//! fn main() -> Result<(), DocumentError> {
//!     let mut doc = Document::new();
//!     doc.add_page();
//!     doc.set_font("Helvetica", "B", Some(16.0))?;
//!     doc.text(10.0, 20.0, "Hello World!")?;
//!     doc.polygon(&[(10.0, 30.0), (60.0, 30.0), (35.0, 60.0)], false)?;
//!     doc.output_to_file("hello.pdf")
//! }
//! ```

mod config;
mod document;
mod drawing;
mod error;
mod state;

pub use config::DocumentConfig;
pub use document::Document;
pub use drawing::{Align, CellMove, CellStyle, PaintStyle};
pub use error::DocumentError;

pub use vellum_fonts::{FontDescriptor, FontError, FontKind, FontRegistry, FontStyle, FontWarning};
pub use vellum_render_core::{DocumentInfo, PageContent, RenderError};
pub use vellum_types::{Orientation, PageFormat, Point, Unit};
