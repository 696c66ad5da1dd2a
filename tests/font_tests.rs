mod common;

use common::{doc_with_page, emitted, init_logging};
use itertools::Itertools;
use vellum::{Document, DocumentError, FontError, FontKind, FontWarning, Unit};
use vellum_fonts::core::{core_families, is_styleless, lookup};

/// `""`, `"B"`, ..., `"BUI"`, `"IUB"`: every ordering of every subset of B/U/I.
fn style_permutations(min_len: usize) -> Vec<String> {
    (min_len..4)
        .flat_map(|n| "BUI".chars().permutations(n).map(String::from_iter))
        .collect()
}

#[test]
fn adding_core_fonts_registers_nothing() {
    let mut doc = doc_with_page(Unit::Mm);
    doc.add_font("Helvetica", "", None).unwrap();
    doc.add_font("Helvetica", "B", None).unwrap();
    doc.add_font("helvetica", "IB", None).unwrap();
    doc.add_font("times", "", None).unwrap();
    doc.add_font("courier", "", None).unwrap();
    doc.add_font("Arial", "", None).unwrap();
    assert!(doc.fonts().is_empty());
    assert_eq!(doc.warnings().len(), 6);
    assert!(doc
        .warnings()
        .iter()
        .all(|w| matches!(w, FontWarning::AlreadyRegistered { .. })));
    assert_eq!(
        doc.warnings()[1].to_string(),
        "Core font or font already added 'helveticaB': doing nothing"
    );
}

#[test]
fn text_without_a_font_fails() {
    let mut doc = doc_with_page(Unit::Mm);
    let before = doc.operations().len();
    let err = doc.text(10.0, 10.0, "Hello World!").unwrap_err();
    assert!(matches!(err, DocumentError::NoFontSet));
    assert_eq!(err.to_string(), "No font set, you need to call set_font() beforehand");
    assert_eq!(doc.operations().len(), before);
}

#[test]
fn text_without_a_page_reports_the_page_first() {
    init_logging();
    let mut doc = Document::new();
    let err = doc.text(10.0, 10.0, "Hello World!").unwrap_err();
    assert!(matches!(err, DocumentError::NoOpenPage));
}

#[test]
fn unknown_font_is_rejected() {
    let mut doc = doc_with_page(Unit::Mm);
    let err = doc.set_font("Dummy", "", None).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::Font(FontError::UndefinedFont { ref family }) if family == "dummy"
    ));
    assert_eq!(
        err.to_string(),
        "Undefined font: dummy - Use built-in fonts or add_font() beforehand"
    );
    assert!(doc.fonts().is_empty());
    assert!(doc.font_family().is_none());
}

#[test]
fn every_builtin_font_in_every_style() {
    let mut doc = doc_with_page(Unit::Mm);
    for (i, family) in core_families().into_iter().sorted().enumerate() {
        let styles: &[&str] = if is_styleless(family) {
            &[""]
        } else {
            &["", "B", "I", "BI"]
        };
        for (j, style) in styles.iter().enumerate() {
            let mut capitalized = family.to_string();
            capitalized[..1].make_ascii_uppercase();
            doc.set_font(&capitalized, style, Some(36.0)).unwrap();

            let repeated = emitted(&mut doc, |d| d.set_font(family, style, Some(36.0)).unwrap());
            assert!(repeated.is_empty(), "{family}{style} selected twice");

            let y = 10.0 + 40.0 * i as f64 + 10.0 * j as f64;
            doc.text(0.0, y, "Hello World!").unwrap();
            assert_eq!(doc.font_family(), Some(family));
            assert_eq!(doc.font_style(), *style);
        }
    }
    assert_eq!(doc.fonts().len(), 14);
    assert!(doc.warnings().is_empty());
}

#[test]
fn aliases_become_core_fonts() {
    let mut doc = doc_with_page(Unit::Mm);
    let aliases = ["ARIAL", "Arial", "arial", "couriernew", "timesnewroman"];
    let alternatives = ["helvetica", "helvetica", "helvetica", "courier", "times"];

    for (alias, alternative) in aliases.iter().zip(alternatives) {
        doc.set_font(alias, "", None).unwrap();
        let warnings = doc.take_warnings();
        assert_eq!(
            warnings,
            vec![FontWarning::Substituted {
                given: alias.to_lowercase(),
                target: alternative.to_string(),
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            format!("Substitutting font {} by core font {}", alias.to_lowercase(), alternative)
        );
        assert_eq!(doc.font_family(), Some(alternative));
    }

    let keys: Vec<&str> = doc.fonts().keys().collect();
    assert_eq!(keys, vec!["helvetica", "courier", "times"]);
}

#[test]
fn core_font_attributes() {
    let mut doc = doc_with_page(Unit::Mm);
    doc.set_font("courier", "", None).unwrap();
    doc.set_font("times", "", None).unwrap();

    let courier = doc.fonts().get("courier").unwrap();
    assert_eq!(courier.index, 1);
    assert_eq!(courier.kind, FontKind::Core);
    assert_eq!(courier.kind.as_str(), "core");
    assert_eq!(courier.name, "Courier");
    assert_eq!(courier.underline_position, -100);
    assert_eq!(courier.underline_thickness, 50);
    assert_eq!(*courier.widths, *lookup("courier").unwrap().widths);

    let times = doc.fonts().get("times").unwrap();
    assert_eq!(times.index, 2);
    assert_eq!(times.kind, FontKind::Core);
    assert_eq!(times.name, "Times-Roman");
    assert_eq!(times.underline_position, -100);
    assert_eq!(times.underline_thickness, 50);
    assert_eq!(*times.widths, *lookup("times").unwrap().widths);
}

#[test]
fn indices_follow_first_use() {
    let mut doc = doc_with_page(Unit::Mm);
    let mut indices = Vec::new();
    for family in ["times", "courier", "times"] {
        doc.set_font(family, "", None).unwrap();
        indices.push(doc.current_font().unwrap().index);
    }
    assert_eq!(indices, vec![1, 2, 1]);
    assert_eq!(doc.fonts().len(), 2);
}

#[test]
fn style_letters_in_any_order() {
    let mut doc = doc_with_page(Unit::Mm);
    for style in style_permutations(0) {
        doc.set_font("Times", &style, None).unwrap();
        assert_eq!(doc.underline(), style.contains('U'), "style {style:?}");

        let mut expected = style.replace('U', "");
        if expected == "IB" {
            expected = "BI".to_string();
        }
        assert_eq!(doc.font_style(), expected, "style {style:?}");
    }
}

#[test]
fn styleless_fonts_drop_bold_and_italic() {
    let mut doc = doc_with_page(Unit::Mm);
    for family in ["zapfdingbats", "symbol"] {
        for style in style_permutations(1) {
            doc.set_font(family, &style, None).unwrap();
            let warnings = doc.take_warnings();
            if style.contains('B') || style.contains('I') {
                assert_eq!(
                    warnings,
                    vec![FontWarning::StyleDropped {
                        family: family.to_string()
                    }]
                );
                assert_eq!(
                    warnings[0].to_string(),
                    format!(
                        "Built-in font {family} only has a single 'style' and can't be bold or italic"
                    )
                );
            } else {
                assert!(warnings.is_empty());
            }
            assert_eq!(doc.font_style(), "");
            assert_eq!(doc.underline(), style.contains('U'));
        }
    }
    let keys: Vec<&str> = doc.fonts().keys().collect();
    assert_eq!(keys, vec!["zapfdingbats", "symbol"]);
}

#[test]
fn reselecting_a_font_keeps_earlier_content() {
    let mut doc = doc_with_page(Unit::Mm);
    doc.set_font("Times", "B", Some(14.0)).unwrap();
    doc.text(10.0, 10.0, "ABC").unwrap();
    doc.set_font("Times", "", Some(10.0)).unwrap();
    doc.text(60.0, 10.0, "DEF").unwrap();
    let before = doc.operations().to_vec();

    doc.set_font("Times", "B", Some(14.0)).unwrap();

    let after = doc.operations();
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(after[before.len()..], ["BT /F1 14.00 Tf ET".to_string()]);
    assert_eq!(doc.fonts().len(), 2);
}

#[test]
fn selection_emits_only_when_something_changes() {
    let mut doc = doc_with_page(Unit::Pt);
    let ops = emitted(&mut doc, |d| {
        d.set_font("helvetica", "", Some(12.0)).unwrap();
        d.set_font("helvetica", "U", None).unwrap();
        d.set_font("", "B", None).unwrap();
        d.set_font_size(12.0);
        d.set_font_size(9.5);
    });
    assert_eq!(
        ops,
        vec!["BT /F1 12.00 Tf ET", "BT /F2 12.00 Tf ET", "BT /F2 9.50 Tf ET"]
    );
    assert_eq!(doc.font_family(), Some("helvetica"));
    assert_eq!(doc.font_style(), "B");
}

#[test]
fn non_positive_sizes_are_ignored() {
    let mut doc = doc_with_page(Unit::Pt);
    doc.set_font("times", "", Some(11.0)).unwrap();
    let ops = emitted(&mut doc, |d| {
        d.set_font_size(0.0);
        d.set_font_size(-5.0);
        d.set_font("times", "", Some(-1.0)).unwrap();
    });
    assert!(ops.is_empty());
    assert_eq!(doc.font_size_pt(), 11.0);
}

#[test]
fn font_set_before_first_page_is_selected_on_it() {
    init_logging();
    let mut doc = Document::new();
    doc.set_font("courier", "", Some(10.0)).unwrap();
    doc.add_page();
    assert_eq!(doc.operations().last().map(String::as_str), Some("BT /F1 10.00 Tf ET"));
}

#[test]
fn failed_selection_keeps_current_font() {
    let mut doc = doc_with_page(Unit::Mm);
    doc.set_font("courier", "B", Some(10.0)).unwrap();
    let ops = emitted(&mut doc, |d| {
        assert!(d.set_font("nonexistent", "", Some(20.0)).is_err());
    });
    assert!(ops.is_empty());
    assert_eq!(doc.font_family(), Some("courier"));
    assert_eq!(doc.font_style(), "B");
    assert_eq!(doc.font_size_pt(), 10.0);
}

#[test]
fn family_resolution_is_idempotent() {
    let mut doc = doc_with_page(Unit::Mm);
    assert_eq!(doc.resolve_family("Times New Roman"), "times");
    assert_eq!(doc.resolve_family("times"), "times");
    assert_eq!(doc.resolve_family(" Helvetica "), "helvetica");
    assert_eq!(doc.take_warnings().len(), 1);
    assert!(doc.fonts().is_empty());
}
