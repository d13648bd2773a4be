use siteplan_core::PlanScale;
use siteplan_designer::{
    DrawElement, Fixture, FixtureKind, Grid, PlanDocument, Point, PolyLine, Room, Selection,
};

fn populated() -> PlanDocument {
    let mut doc = PlanDocument::with_settings(Grid::new(25).unwrap(), PlanScale::OneTo50);
    for i in 0..3 {
        doc.append_element(DrawElement::Line(PolyLine::new(Point::new(i * 25, 0))));
    }
    doc.append_element(Fixture::new(FixtureKind::Door, Point::new(0, 100)).into());
    doc.append_element(Fixture::new(FixtureKind::Window, Point::new(50, 100)).into());
    doc.commit_room("Salon", Point::new(0, 0), Point::new(100, 75));
    doc.commit_room("Cuisine", Point::new(100, 0), Point::new(200, 75));
    for i in 0..3 {
        doc.commit_measurement(Point::new(0, i * 25), Point::new(100, i * 25), "1.0");
    }
    doc
}

#[test]
fn test_clear_keeps_scale_and_grid() {
    let mut doc = populated();
    assert_eq!(doc.elements().len(), 5);
    assert_eq!(doc.rooms().len(), 2);
    assert_eq!(doc.measurements().len(), 3);

    doc.clear();
    assert!(doc.elements().is_empty());
    assert!(doc.rooms().is_empty());
    assert!(doc.measurements().is_empty());
    assert_eq!(doc.scale(), PlanScale::OneTo50);
    assert_eq!(doc.grid_pitch(), 25);
}

#[test]
fn test_room_normalized_from_any_corner_order() {
    let a = Point::new(100, 60);
    let b = Point::new(0, 0);
    let expected = Room::new("R", Point::new(0, 0), 100, 60);
    assert_eq!(Room::from_corners("R", a, b), expected);
    assert_eq!(Room::from_corners("R", b, a), expected);
    assert_eq!(
        Room::from_corners("R", Point::new(0, 60), Point::new(100, 0)),
        expected
    );
}

#[test]
fn test_degenerate_geometry_accepted() {
    let mut doc = PlanDocument::new();
    doc.commit_room("Placard", Point::new(40, 40), Point::new(40, 40));
    doc.append_element(PolyLine::new(Point::new(0, 0)).into());
    assert_eq!(doc.rooms()[0].area(), 0);
    assert!(!doc.elements()[0].as_line().unwrap().is_renderable());
}

#[test]
fn test_insertion_order_is_z_order() {
    let mut doc = PlanDocument::new();
    doc.append_element(Fixture::new(FixtureKind::Door, Point::new(0, 0)).into());
    doc.append_element(Fixture::new(FixtureKind::Window, Point::new(0, 0)).into());
    assert_eq!(
        doc.hit_test(&Point::new(5, 2), 0.0),
        Some(Selection::Element(1))
    );
}

#[test]
fn test_remove_room_and_summaries() {
    let mut doc = populated();
    let summaries = doc.room_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].name, "Cuisine");
    assert_eq!(summaries[1].width_px, 100);
    assert_eq!(summaries[1].width_cells, 4.0);
    assert_eq!(summaries[1].height_cells, 3.0);

    let removed = doc.remove_room(0).unwrap();
    assert_eq!(removed.name, "Salon");
    assert_eq!(doc.rooms()[0].name, "Cuisine");
    assert!(doc.remove_room(5).is_err());
}

#[test]
fn test_set_grid_pitch_rejects_zero() {
    let mut doc = PlanDocument::new();
    assert!(doc.set_grid_pitch(0).is_err());
    assert_eq!(doc.grid_pitch(), 20);
    doc.set_grid_pitch(10).unwrap();
    assert_eq!(doc.grid_pitch(), 10);
}

#[test]
fn test_far_fixture_hit_test_does_not_overflow() {
    let doc = siteplan_designer::deserialize(
        r#"{"elements":[{"type":"door","x":2147483647,"y":2147483647}]}"#,
    );
    assert_eq!(doc.elements().len(), 1);
    assert_eq!(doc.hit_test(&Point::new(0, 0), 5.0), None);
    assert_eq!(
        doc.selection_bounds(Selection::Element(0)),
        Some((i32::MAX, i32::MAX, i32::MAX, i32::MAX))
    );
}
