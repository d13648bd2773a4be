use siteplan_designer::svg_renderer::{render_grid, render_lines};
use siteplan_designer::{
    render_svg, Fixture, FixtureKind, PlanDocument, Point, PolyLine, RenderOptions,
};

#[test]
fn test_grid_path_covers_canvas() {
    let path = render_grid(20, 800, 600);
    assert_eq!(path.matches('M').count(), 41 + 31);
    assert!(path.starts_with("M 0 0 L 0 600 "));
    assert!(path.contains("M 800 0 L 800 600 "));
}

#[test]
fn test_lines_skip_single_points() {
    let mut doc = PlanDocument::new();
    doc.append_element(PolyLine::new(Point::new(0, 0)).into());
    let line = PolyLine::from_points(vec![Point::new(0, 0), Point::new(40, 0), Point::new(40, 40)]);
    doc.append_element(line.unwrap().into());
    assert_eq!(render_lines(&doc), "M 0 0 L 40 0 L 40 40 ");
}

#[test]
fn test_document_layers() {
    let mut doc = PlanDocument::new();
    doc.commit_room("Salle <d'eau>", Point::new(0, 0), Point::new(100, 60));
    doc.append_element(Fixture::new(FixtureKind::Window, Point::new(200, 0)).into());
    doc.commit_measurement(Point::new(0, 80), Point::new(100, 80), "2.5");

    let svg = render_svg(&doc, 800, 600, &RenderOptions::default());
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Salle &lt;d&apos;eau&gt;"));
    assert!(svg.contains(r##"fill="#87ceeb""##));
    assert!(svg.contains(">2.5m</text>"));

    let room = svg.find("stroke=\"#4a90e2\"").unwrap();
    let window = svg.find("#87ceeb").unwrap();
    let measure = svg.find("stroke=\"#ff4444\"").unwrap();
    assert!(room < window && window < measure);
}

#[test]
fn test_without_grid_or_labels() {
    let options = RenderOptions {
        show_grid: false,
        draw_labels: false,
        ..RenderOptions::default()
    };
    let mut doc = PlanDocument::new();
    doc.commit_room("Salon", Point::new(0, 0), Point::new(100, 60));
    let svg = render_svg(&doc, 800, 600, &options);
    assert!(!svg.contains("#e0e0e0"));
    assert!(!svg.contains("<text"));
}
