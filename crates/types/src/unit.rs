//! User-space measurement units and their conversion to PDF points.
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Incorrect unit: {0}")]
pub struct UnitParseError(pub String);

/// A measurement unit for user-space coordinates.
///
/// Every coordinate handed to the drawing API is expressed in the document's
/// unit and multiplied by [`Unit::scale_factor`] to obtain PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    Pt,
    #[default]
    Mm,
    Cm,
    In,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Pt, Unit::Mm, Unit::Cm, Unit::In];

    /// Number of points in one unit (`k`).
    pub fn scale_factor(self) -> f64 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }

    /// Size of one point expressed in this unit (`1 / k`).
    pub fn reciprocal(self) -> f64 {
        1.0 / self.scale_factor()
    }

    pub fn to_points(self, value: f64) -> f64 {
        value * self.scale_factor()
    }

    pub fn from_points(self, value: f64) -> f64 {
        value / self.scale_factor()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Unit::Pt),
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "in" => Ok(Unit::In),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
