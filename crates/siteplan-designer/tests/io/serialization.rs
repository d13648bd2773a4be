use siteplan_core::PlanScale;
use siteplan_designer::{
    deserialize, serialize, try_deserialize, AcceptDefaults, DrawElement, EditorContext, Fixture,
    FixtureKind, FixedPrompt, PlanDocument, Point, Room, Tool,
};

const LEGACY_PLAN: &str = r#"{
    "elements": [
        {"type": "line", "points": [{"x": 0, "y": 0}, {"x": 40, "y": 0}], "id": 1712345678901},
        {"type": "door", "x": 200, "y": 200, "id": 1712345678902},
        {"type": "window", "x": 240, "y": 200, "id": 1712345678903}
    ],
    "rooms": [{"name": "Salon", "x": 0, "y": 0, "width": 100, "height": 60, "id": 1712345678904}],
    "measurements": [{"x1": 0, "y1": 0, "x2": 100, "y2": 0, "value": "2.5"}],
    "scale": 1,
    "gridSize": 20,
    "currentTool": "door"
}"#;

#[test]
fn test_loads_legacy_plan() {
    let doc = try_deserialize(LEGACY_PLAN).unwrap();

    assert_eq!(doc.elements().len(), 3);
    assert_eq!(
        doc.elements()[1],
        DrawElement::Fixture(Fixture::new(FixtureKind::Door, Point::new(200, 200)))
    );
    assert_eq!(
        doc.rooms(),
        &[Room::new("Salon", Point::new(0, 0), 100, 60)]
    );
    assert_eq!(doc.measurements()[0].value, "2.5");
    assert_eq!(doc.scale(), PlanScale::OneTo100);
    assert_eq!(doc.grid_pitch(), 20);
    assert_eq!(doc.active_tool(), Tool::Door);
}

#[test]
fn test_round_trip_editor_plan() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Draw);
    editor.start(Point::new(100, 100));
    editor.move_to(Point::new(140, 100));
    editor.move_to(Point::new(140, 140));
    editor.end(Point::new(140, 140), &mut AcceptDefaults);
    editor.set_tool(Tool::Room);
    editor.start(Point::new(0, 0));
    editor.end(Point::new(100, 60), &mut FixedPrompt::room("Chaufferie"));
    editor.set_tool(Tool::Measure);
    editor.start(Point::new(0, 80));
    editor.end(Point::new(100, 80), &mut FixedPrompt::label("2.5"));
    editor.set_tool(Tool::Window);
    editor.start(Point::new(300, 0));
    editor.set_scale(PlanScale::OneTo200);

    let json = serialize(editor.document()).unwrap();
    let restored = deserialize(&json);
    assert_eq!(&restored, editor.document());
}

#[test]
fn test_wire_shape() {
    let mut doc = PlanDocument::new();
    doc.commit_room("Salon", Point::new(0, 0), Point::new(100, 60));
    doc.commit_measurement(Point::new(0, 0), Point::new(100, 0), "2.5");

    let value: serde_json::Value = serde_json::from_str(&serialize(&doc).unwrap()).unwrap();
    assert_eq!(
        value["rooms"][0],
        serde_json::json!({"name": "Salon", "x": 0, "y": 0, "width": 100, "height": 60})
    );
    assert_eq!(
        value["measurements"][0],
        serde_json::json!({"x1": 0, "y1": 0, "x2": 100, "y2": 0, "value": "2.5"})
    );
    assert_eq!(value["scale"], 100);
    assert_eq!(value["gridSize"], 20);
    assert_eq!(value["currentTool"], "select");
}

#[test]
fn test_malformed_input_recovers_empty() {
    for bad in ["", "not json", "null", r#"{"elements": 3}"#, r#"{"rooms":[{"name":"x"}]}"#] {
        assert!(try_deserialize(bad).is_err(), "{bad:?} should be rejected");
        let doc = deserialize(bad);
        assert!(doc.is_empty());
        assert_eq!(doc.grid_pitch(), 20);
        assert_eq!(doc.scale(), PlanScale::OneTo100);
    }
}

#[test]
fn test_missing_fields_default() {
    let doc = try_deserialize("{}").unwrap();
    assert_eq!(doc, PlanDocument::new());
}

#[test]
fn test_empty_line_dropped_and_zero_grid_replaced() {
    let doc = try_deserialize(
        r#"{"elements":[{"type":"line","points":[]},{"type":"door","x":0,"y":0}],"gridSize":0,"currentTool":"lasso"}"#,
    )
    .unwrap();
    assert_eq!(doc.elements().len(), 1);
    assert_eq!(doc.grid_pitch(), 20);
    assert_eq!(doc.active_tool(), Tool::Select);
}

#[test]
fn test_scale_variants() {
    for (raw, scale) in [
        ("50", PlanScale::OneTo50),
        ("200.0", PlanScale::OneTo200),
        (r#""200""#, PlanScale::OneTo200),
        ("7", PlanScale::OneTo100),
    ] {
        let doc = try_deserialize(&format!(r#"{{"scale":{raw}}}"#)).unwrap();
        assert_eq!(doc.scale(), scale, "scale {raw}");
    }
}
