//! Page formats and orientation.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageFormat {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    /// Portrait dimensions in points.
    Custom { width: f64, height: f64 },
}

impl PageFormat {
    /// Portrait `(width, height)` in points.
    pub fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            PageFormat::A3 => (841.89, 1190.55),
            PageFormat::A4 => (595.28, 841.89),
            PageFormat::A5 => (420.94, 595.28),
            PageFormat::Letter => (612.0, 792.0),
            PageFormat::Legal => (612.0, 1008.0),
            PageFormat::Custom { width, height } => (*width, *height),
        }
    }

    /// `(width, height)` in points once `orientation` is applied.
    pub fn oriented_pt(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Parse a page format name (e.g., "A4", "Letter")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a3" => Ok(PageFormat::A3),
            "a4" => Ok(PageFormat::A4),
            "a5" => Ok(PageFormat::A5),
            "letter" => Ok(PageFormat::Letter),
            "legal" => Ok(PageFormat::Legal),
            _ => Err(format!("Unknown page format: {}", s)),
        }
    }
}

impl Serialize for PageFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageFormat::A3 => serializer.serialize_str("A3"),
            PageFormat::A4 => serializer.serialize_str("A4"),
            PageFormat::A5 => serializer.serialize_str("A5"),
            PageFormat::Letter => serializer.serialize_str("Letter"),
            PageFormat::Legal => serializer.serialize_str("Legal"),
            PageFormat::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageFormatDef {
            Str(String),
            Map { width: f64, height: f64 },
        }

        match PageFormatDef::deserialize(deserializer)? {
            PageFormatDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageFormatDef::Map { width, height } => Ok(PageFormat::Custom { width, height }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "p" | "portrait" => Ok(Orientation::Portrait),
            "l" | "landscape" => Ok(Orientation::Landscape),
            _ => Err(format!("Incorrect orientation: {}", s)),
        }
    }
}

impl Serialize for Orientation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Orientation::Portrait => serializer.serialize_str("portrait"),
            Orientation::Landscape => serializer.serialize_str("landscape"),
        }
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
