//! Content stream emission benchmarks
//!
//! Measures how fast drawing calls turn into page operators, and the cost of
//! writing the finished document.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vellum::{Document, Unit};

fn zigzag(points: usize) -> Vec<(f64, f64)> {
    (0..points)
        .map(|i| (10.0 + (i % 180) as f64, 10.0 + (i % 2) as f64 * 50.0))
        .collect()
}

fn benchmark_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline");

    for point_count in [3, 100, 1000] {
        let points = zigzag(point_count);
        group.bench_with_input(
            BenchmarkId::new("points", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut doc = Document::with_unit(Unit::Mm);
                    doc.add_page();
                    doc.polyline(black_box(points), false, true)
                        .expect("Failed to draw polyline");
                    doc
                });
            },
        );
    }

    group.finish();
}

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for line_count in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("lines", line_count),
            &line_count,
            |b, &line_count| {
                b.iter(|| {
                    let mut doc = Document::with_unit(Unit::Pt);
                    doc.add_page();
                    doc.set_font("Helvetica", "U", Some(10.0))
                        .expect("Failed to set font");
                    for i in 0..line_count {
                        let y = 20.0 + (i % 80) as f64 * 10.0;
                        doc.text(20.0, y, black_box("The quick brown fox (jumps) over the lazy dog"))
                            .expect("Failed to draw text");
                    }
                    doc
                });
            },
        );
    }

    group.finish();
}

fn benchmark_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    for page_count in [1, 10, 50] {
        group.bench_with_input(
            BenchmarkId::new("pages", page_count),
            &page_count,
            |b, &page_count| {
                b.iter(|| {
                    let mut doc = Document::new();
                    doc.set_font("Times", "", Some(12.0))
                        .expect("Failed to set font");
                    for page in 0..page_count {
                        doc.add_page();
                        doc.text(20.0, 20.0, &format!("Page {}", page + 1))
                            .expect("Failed to draw text");
                        doc.polygon(&zigzag(20), true).expect("Failed to draw polygon");
                    }
                    doc.output().expect("Failed to write PDF")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_polyline, benchmark_text, benchmark_output);
criterion_main!(benches);
