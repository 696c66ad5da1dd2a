//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the seam between the drawing API and the PDF writer:
//! - `ContentSink` trait: append-only operator buffer for the current page
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - Error types for rendering operations
//! - Shared utility functions for coordinate conversion and string literals

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::{ContentSink, DocumentRenderer};
pub use types::{DocumentInfo, PageContent};
