//! SVG renderer for plans.
//!
//! Produces path strings per layer and a standalone SVG document with the
//! same layering and colours as the raster renderer. Labels are emitted as
//! `<text>` so the export stays editable.

use std::fmt::Write as _;

use crate::model::{DrawElement, FixtureKind, PlanDocument, FIXTURE_HEIGHT, FIXTURE_WIDTH};
use crate::renderer::RenderOptions;

/// Grid as SVG path commands.
pub fn render_grid(pitch: u32, width: u32, height: u32) -> String {
    let lines = crate::grid::grid_lines(width, height, pitch);
    let mut path = String::new();
    for x in &lines.vertical {
        let _ = write!(path, "M {} 0 L {} {} ", x, x, height);
    }
    for y in &lines.horizontal {
        let _ = write!(path, "M 0 {} L {} {} ", y, width, y);
    }
    path
}

/// Freehand strokes as SVG path commands. One-point strokes are skipped.
pub fn render_lines(doc: &PlanDocument) -> String {
    let mut path = String::new();
    for line in doc.elements().iter().filter_map(DrawElement::as_line) {
        if !line.is_renderable() {
            continue;
        }
        for (i, p) in line.points().iter().enumerate() {
            let cmd = if i == 0 { "M" } else { "L" };
            let _ = write!(path, "{} {} {} ", cmd, p.x, p.y);
        }
    }
    path
}

/// Measurement segments as SVG path commands.
pub fn render_measurements(doc: &PlanDocument) -> String {
    let mut path = String::new();
    for m in doc.measurements() {
        let _ = write!(
            path,
            "M {} {} L {} {} ",
            m.from.x, m.from.y, m.to.x, m.to.y
        );
    }
    path
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Complete SVG document for a `width` x `height` canvas.
pub fn render_svg(doc: &PlanDocument, width: u32, height: u32, options: &RenderOptions) -> String {
    let font = escape(&options.label_font_family);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    if options.show_grid {
        let grid = render_grid(doc.grid_pitch(), width, height);
        if !grid.is_empty() {
            let _ = writeln!(
                svg,
                r##"<path d="{}" stroke="#e0e0e0" stroke-width="0.5" fill="none"/>"##,
                grid.trim_end()
            );
        }
    }

    for room in doc.rooms() {
        let _ = writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="rgb(200,220,255)" fill-opacity="0.3" stroke="#4a90e2" stroke-width="2"/>"##,
            room.origin.x, room.origin.y, room.width, room.height
        );
        if options.draw_labels {
            let _ = writeln!(
                svg,
                r##"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="#333333">{}</text>"##,
                i64::from(room.origin.x) + 5,
                i64::from(room.origin.y) + 15,
                font,
                options.room_label_size,
                escape(&room.name)
            );
        }
    }

    let lines = render_lines(doc);
    if !lines.is_empty() {
        let _ = writeln!(
            svg,
            r##"<path d="{}" stroke="#333333" stroke-width="3" fill="none"/>"##,
            lines.trim_end()
        );
    }

    for fixture in doc.elements().iter().filter_map(|e| match e {
        DrawElement::Fixture(f) => Some(f),
        DrawElement::Line(_) => None,
    }) {
        let (x, y) = (fixture.position.x, fixture.position.y);
        let fill = match fixture.kind {
            FixtureKind::Door => "#8b4513",
            FixtureKind::Window => "#87ceeb",
        };
        let _ = writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="#333333" stroke-width="1"/>"##,
            x, y, FIXTURE_WIDTH, FIXTURE_HEIGHT, fill
        );
        if fixture.kind == FixtureKind::Window {
            let tick = i64::from(x) + i64::from(FIXTURE_WIDTH / 2);
            let _ = writeln!(
                svg,
                r##"<path d="M {} {} L {} {}" stroke="#333333" stroke-width="1"/>"##,
                tick,
                y,
                tick,
                i64::from(y) + i64::from(FIXTURE_HEIGHT)
            );
        }
    }

    let measures = render_measurements(doc);
    if !measures.is_empty() {
        let _ = writeln!(
            svg,
            r##"<path d="{}" stroke="#ff4444" stroke-width="3" fill="none"/>"##,
            measures.trim_end()
        );
    }
    if options.draw_labels {
        for m in doc.measurements() {
            let (mx, my) = m.label_anchor();
            let _ = writeln!(
                svg,
                r##"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="#ff4444">{}</text>"##,
                mx,
                my,
                font,
                options.measurement_label_size,
                escape(&m.display_label())
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}
