//! Font handling for vellum.
//!
//! - `core`: the standard 14 fonts and their metrics
//! - `alias`: family-name normalization and alias substitution
//! - `style`: bold/italic/underline style specifiers
//! - `registry`: the per-document `FontRegistry`, which assigns `/F{i}` indices
//! - `truetype`: metrics extraction for user-supplied TrueType fonts

pub mod alias;
pub mod core;
mod descriptor;
pub mod encoding;
mod error;
mod metrics;
pub mod registry;
pub mod style;
pub mod truetype;
mod warning;

pub use descriptor::{FontDescriptor, FontKind};
pub use error::FontError;
pub use registry::{FontRegistry, Selection};
pub use style::{FontStyle, StyleSpec};
pub use truetype::TrueTypeFace;
pub use warning::FontWarning;
