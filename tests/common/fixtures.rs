use std::path::{Path, PathBuf};
use vellum::Unit;

pub const POLYLINE_COORDINATES: [(f64, f64); 3] = [(10.0, 10.0), (40.0, 10.0), (10.0, 40.0)];

pub const EXPECTED_STROKE: &str = "10.00 831.89 m40.00 831.89 l10.00 801.89 l S ";
pub const EXPECTED_FILL: &str = "10.00 831.89 m40.00 831.89 l10.00 801.89 l B ";
pub const EXPECTED_POLYGON: &str = "10.00 831.89 m40.00 831.89 l10.00 801.89 l h  S ";
pub const EXPECTED_POLYGON_FILL: &str = "10.00 831.89 m40.00 831.89 l10.00 801.89 l h  B ";

/// Every unit with the factor that turns a length in points into that unit.
pub fn units_with_reciprocals() -> Vec<(Unit, f64)> {
    vec![
        (Unit::Pt, 1.0),
        (Unit::Mm, 1.0 / (72.0 / 25.4)),
        (Unit::Cm, 1.0 / (72.0 / 2.54)),
        (Unit::In, 1.0 / 72.0),
    ]
}

pub fn scale_points(points: &[(f64, f64)], factor: f64) -> Vec<(f64, f64)> {
    points.iter().map(|(x, y)| (x * factor, y * factor)).collect()
}

/// Committed TrueType fonts. Their Macintosh-platform name records come first.
pub fn fixture_font(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file)
}

pub const REGULAR_TTF: &str = "VellumTest.ttf";
pub const BOLD_OBLIQUE_TTF: &str = "VellumTest-BoldOblique.ttf";
