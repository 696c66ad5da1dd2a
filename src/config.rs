//! Document configuration.
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vellum_types::{Orientation, PageFormat, Unit};

/// Settings fixed for the lifetime of a [`crate::Document`].
///
/// ```json
/// { "unit": "pt", "format": "Letter", "orientation": "L", "font_dir": "fonts" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentConfig {
    /// User unit for every coordinate and length passed to the document.
    pub unit: Unit,
    /// Page size; custom sizes are given in points.
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Directory searched by `add_font` when no explicit path is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_dir: Option<PathBuf>,
}

impl DocumentConfig {
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_font_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.font_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let config: DocumentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the page has a usable size.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let (width, height) = self.format.dimensions_pt();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(DocumentError::Config(format!(
                "page size must be positive, got {} x {} pt",
                width, height
            )));
        }
        Ok(())
    }

    /// Page width and height in points after applying the orientation.
    pub fn page_size_pt(&self) -> (f64, f64) {
        self.format.oriented_pt(self.orientation)
    }
}
