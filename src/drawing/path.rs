use super::{PageFrame, PaintStyle};
use crate::error::DocumentError;
use vellum_render_core::ContentSink;
use vellum_types::Point;

/// Fewest points a path can be drawn from.
pub(crate) const MIN_PATH_POINTS: usize = 2;

/// Emits a moveto, one lineto per further point, the optional close token and
/// the paint token, each as its own operator chunk.
pub(crate) fn polyline<S: ContentSink>(
    sink: &mut S,
    frame: PageFrame,
    points: &[Point],
    fill: bool,
    polygon: bool,
) -> Result<(), DocumentError> {
    let Some((first, rest)) = points.split_first() else {
        return Err(degenerate(0));
    };
    if rest.is_empty() {
        return Err(degenerate(1));
    }

    sink.append(format!("{:.2} {:.2} m", frame.x(first.x), frame.y(first.y)));
    for point in rest {
        sink.append(format!("{:.2} {:.2} l", frame.x(point.x), frame.y(point.y)));
    }
    if polygon {
        sink.append(" h ".to_string());
    }
    sink.append(if fill { " B " } else { " S " }.to_string());
    Ok(())
}

fn degenerate(given: usize) -> DocumentError {
    DocumentError::DegeneratePath {
        given,
        required: MIN_PATH_POINTS,
    }
}

pub(crate) fn line<S: ContentSink>(sink: &mut S, frame: PageFrame, from: Point, to: Point) {
    sink.append(format!(
        "{:.2} {:.2} m {:.2} {:.2} l S",
        frame.x(from.x),
        frame.y(from.y),
        frame.x(to.x),
        frame.y(to.y)
    ));
}

pub(crate) fn rect<S: ContentSink>(
    sink: &mut S,
    frame: PageFrame,
    origin: Point,
    w: f64,
    h: f64,
    style: PaintStyle,
) {
    sink.append(format!(
        "{:.2} {:.2} {:.2} {:.2} re {}",
        frame.x(origin.x),
        frame.y(origin.y),
        frame.length(w),
        -frame.length(h),
        style.operator()
    ));
}

pub(crate) fn line_width<S: ContentSink>(sink: &mut S, frame: PageFrame, width: f64) {
    sink.append(format!("{:.2} w", frame.length(width)));
}
