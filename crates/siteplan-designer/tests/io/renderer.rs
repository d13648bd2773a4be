use image::{ImageFormat, Rgba, RgbaImage};
use siteplan_designer::{
    Backdrop, EditorContext, Fixture, FixtureKind, PlanDocument, PlanRenderer, Point, PolyLine,
    RenderOptions, Tool,
};
use std::io::Cursor;
use tempfile::TempDir;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn plain_options() -> RenderOptions {
    RenderOptions {
        show_grid: false,
        draw_labels: false,
        ..RenderOptions::default()
    }
}

fn renderer() -> PlanRenderer {
    PlanRenderer::with_options(800, 600, plain_options()).unwrap()
}

fn close(actual: [u8; 4], expected: [u8; 4], tolerance: u8) -> bool {
    actual
        .iter()
        .zip(expected)
        .all(|(a, e)| a.abs_diff(e) <= tolerance)
}

#[test]
fn test_empty_plan_is_white() {
    let mut r = renderer();
    r.render(&PlanDocument::new(), None);
    assert_eq!(r.pixel(10, 10), Some(WHITE));
    assert_eq!(r.pixel(799, 599), Some(WHITE));
    assert_eq!(r.pixel(800, 0), None);
}

#[test]
fn test_grid_lines_drawn() {
    let mut r = PlanRenderer::with_options(
        200,
        200,
        RenderOptions {
            draw_labels: false,
            ..RenderOptions::default()
        },
    )
    .unwrap();
    r.render(&PlanDocument::new(), None);
    let on_line = r.pixel(20, 10).unwrap();
    assert!(on_line[0] < 255, "grid line missing: {on_line:?}");
    assert_eq!(r.pixel(10, 10), Some(WHITE));
}

#[test]
fn test_fixture_colors() {
    let mut doc = PlanDocument::new();
    doc.append_element(Fixture::new(FixtureKind::Door, Point::new(200, 200)).into());
    doc.append_element(Fixture::new(FixtureKind::Window, Point::new(300, 200)).into());

    let mut r = renderer();
    r.render(&doc, None);
    assert!(close(r.pixel(210, 202).unwrap(), [0x8b, 0x45, 0x13, 255], 2));
    assert!(close(r.pixel(304, 202).unwrap(), [0x87, 0xce, 0xeb, 255], 2));
}

#[test]
fn test_room_is_translucent_blue() {
    let mut doc = PlanDocument::new();
    doc.commit_room("Salon", Point::new(0, 0), Point::new(100, 60));

    let mut r = renderer();
    r.render(&doc, None);
    let inside = r.pixel(50, 30).unwrap();
    assert!(close(inside, [238, 244, 255, 255], 3), "{inside:?}");
    let border = r.pixel(100, 30).unwrap();
    assert!(border[0] < 200, "{border:?}");
}

#[test]
fn test_lines_and_measurements() {
    let mut doc = PlanDocument::new();
    let line = PolyLine::from_points(vec![Point::new(100, 300), Point::new(200, 300)]).unwrap();
    doc.append_element(line.into());
    doc.append_element(PolyLine::new(Point::new(400, 100)).into());
    doc.commit_measurement(Point::new(0, 400), Point::new(100, 400), "1.0");

    let mut r = renderer();
    r.render(&doc, None);
    assert!(close(r.pixel(150, 300).unwrap(), [0x33, 0x33, 0x33, 255], 2));
    assert!(close(r.pixel(50, 400).unwrap(), [0xff, 0x44, 0x44, 255], 2));
    // A one-point stroke draws nothing.
    assert_eq!(r.pixel(400, 100), Some(WHITE));
}

#[test]
fn test_full_repaint_forgets_previous_frame() {
    let mut doc = PlanDocument::new();
    doc.append_element(Fixture::new(FixtureKind::Door, Point::new(200, 200)).into());
    let mut r = renderer();
    r.render(&doc, None);

    doc.clear();
    r.render(&doc, None);
    assert_eq!(r.pixel(210, 202), Some(WHITE));
}

#[test]
fn test_backdrop_at_half_opacity() {
    let black = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let mut png = Vec::new();
    black
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let mut r = renderer();
    r.set_backdrop(Some(Backdrop::from_bytes(&png, 800, 600).unwrap()));
    r.render(&PlanDocument::new(), None);
    let px = r.pixel(10, 10).unwrap();
    assert!(close(px, [128, 128, 128, 255], 3), "{px:?}");
}

#[test]
fn test_invalid_backdrop_rejected() {
    assert!(matches!(
        Backdrop::from_bytes(b"not an image", 800, 600),
        Err(siteplan_core::ExportError::Decode { .. })
    ));
}

#[test]
fn test_overlay_drawn_only_when_given() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Room);
    editor.start(Point::new(100, 100));
    editor.move_to(Point::new(300, 300));

    let mut r = renderer();
    r.render(editor.document(), None);
    let plain = r.to_rgba_image();
    r.render(editor.document(), Some(&editor.overlay()));
    assert_ne!(plain, r.to_rgba_image());
}

#[test]
fn test_png_export() {
    let mut doc = PlanDocument::new();
    doc.append_element(Fixture::new(FixtureKind::Door, Point::new(20, 20)).into());
    let mut r = renderer();
    r.render(&doc, None);

    let bytes = r.encode_png().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.png");
    r.save_png(&path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (800, 600));
    assert_eq!(decoded.get_pixel(30, 22).0, [0x8b, 0x45, 0x13, 255]);
}
