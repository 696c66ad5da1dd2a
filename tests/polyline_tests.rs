mod common;

use common::fixtures::*;
use common::{doc_with_page, emitted, init_logging};
use vellum::{Document, DocumentError, PaintStyle, Unit};

#[test]
fn polyline_command_in_every_unit() {
    for (unit, factor) in units_with_reciprocals() {
        let mut doc = doc_with_page(unit);
        let points = scale_points(&POLYLINE_COORDINATES, factor);

        let ops = emitted(&mut doc, |d| d.polyline(&points, false, false).unwrap());
        assert_eq!(ops.concat(), EXPECTED_STROKE, "unit {unit}");

        let ops = emitted(&mut doc, |d| d.polyline(&points, true, false).unwrap());
        assert_eq!(ops.concat(), EXPECTED_FILL, "unit {unit}");

        let ops = emitted(&mut doc, |d| d.polyline(&points, false, true).unwrap());
        assert_eq!(ops.concat(), EXPECTED_POLYGON, "unit {unit}");

        let ops = emitted(&mut doc, |d| d.polyline(&points, true, true).unwrap());
        assert_eq!(ops.concat(), EXPECTED_POLYGON_FILL, "unit {unit}");
    }
}

#[test]
fn polygon_always_closes() {
    let mut doc = doc_with_page(Unit::Pt);
    let ops = emitted(&mut doc, |d| d.polygon(&POLYLINE_COORDINATES, false).unwrap());
    assert_eq!(ops.concat(), EXPECTED_POLYGON);
    let ops = emitted(&mut doc, |d| d.polygon(&POLYLINE_COORDINATES, true).unwrap());
    assert_eq!(ops.concat(), EXPECTED_POLYGON_FILL);
}

#[test]
fn drawing_without_a_page_fails() {
    init_logging();
    let mut doc = Document::with_unit(Unit::Pt);
    let msg = "No page open, you need to call add_page() first";

    let err = doc.polyline(&POLYLINE_COORDINATES, false, false).unwrap_err();
    assert!(matches!(err, DocumentError::NoOpenPage));
    assert_eq!(err.to_string(), msg);

    let err = doc.polygon(&POLYLINE_COORDINATES, false).unwrap_err();
    assert_eq!(err.to_string(), msg);

    assert_eq!(doc.line(0.0, 0.0, 1.0, 1.0).unwrap_err().to_string(), msg);
    assert_eq!(
        doc.rect(0.0, 0.0, 1.0, 1.0, PaintStyle::Fill)
            .unwrap_err()
            .to_string(),
        msg
    );
    assert_eq!(doc.page_count(), 0);
}

#[test]
fn degenerate_paths_are_rejected_without_output() {
    let mut doc = doc_with_page(Unit::Mm);
    let before = doc.operations().len();

    let err = doc.polyline::<(f64, f64)>(&[], false, false).unwrap_err();
    assert!(matches!(err, DocumentError::DegeneratePath { given: 0, required: 2 }));

    let err = doc.polygon(&[(1.0, 1.0)], true).unwrap_err();
    assert!(matches!(err, DocumentError::DegeneratePath { given: 1, required: 2 }));

    assert_eq!(doc.operations().len(), before);
}

#[test]
fn two_point_polyline_is_a_segment() {
    let mut doc = doc_with_page(Unit::Pt);
    let ops = emitted(&mut doc, |d| d.polyline(&[(0.0, 0.0), (100.0, 0.0)], false, false).unwrap());
    assert_eq!(ops, vec!["0.00 841.89 m", "100.00 841.89 l", " S "]);
}

#[test]
fn polyline_ignores_cursor_position() {
    let mut doc = doc_with_page(Unit::Cm);
    doc.set_x(10.0);
    doc.set_y(10.0);
    let points = scale_points(&POLYLINE_COORDINATES, 1.0 / (72.0 / 2.54));
    let ops = emitted(&mut doc, |d| d.polyline(&points, true, true).unwrap());
    assert_eq!(ops.concat(), EXPECTED_POLYGON_FILL);
}

#[test]
fn line_rect_and_line_width() {
    let mut doc = doc_with_page(Unit::Pt);
    let ops = emitted(&mut doc, |d| {
        d.set_line_width(2.0);
        d.line(10.0, 10.0, 40.0, 10.0).unwrap();
        d.rect(10.0, 10.0, 30.0, 20.0, PaintStyle::Stroke).unwrap();
        d.rect(10.0, 10.0, 30.0, 20.0, PaintStyle::from_shorthand("F")).unwrap();
    });
    assert_eq!(
        ops,
        vec![
            "2.00 w",
            "10.00 831.89 m 40.00 831.89 l S",
            "10.00 831.89 30.00 -20.00 re S",
            "10.00 831.89 30.00 -20.00 re f",
        ]
    );
}

#[test]
fn line_width_set_before_a_page_carries_over() {
    init_logging();
    let mut doc = Document::with_unit(Unit::Mm);
    doc.set_line_width(1.0);
    doc.add_page();
    assert_eq!(doc.operations(), &["2 J".to_string(), "2.83 w".to_string()]);
}
