//! PDF file assembly using lopdf.
//!
//! This crate turns finished page content buffers and the font registry into a
//! complete PDF file: catalog, page tree, shared resources and font objects.

mod fonts;
mod renderer;

pub use renderer::{LopdfRenderer, render_to_vec};
