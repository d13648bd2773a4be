use siteplan_designer::{
    AcceptDefaults, CancelAll, CanvasRect, DrawElement, EditOutcome, EditorContext,
    EditorOptions, Fixture, FixtureKind, FixedPrompt, Gesture, GesturePreview, PointerPhase,
    Point, RawPointer, Room, Selection, Tool,
};

fn editor_with(tool: Tool) -> EditorContext {
    let mut editor = EditorContext::default();
    editor.set_tool(tool);
    editor
}

#[test]
fn test_draw_stroke_collects_points() {
    let mut editor = editor_with(Tool::Draw);

    assert_eq!(editor.start(Point::new(100, 100)), EditOutcome::GestureStarted);
    editor.move_to(Point::new(140, 100));
    editor.move_to(Point::new(140, 140));
    assert_eq!(
        editor.end(Point::new(140, 140), &mut AcceptDefaults),
        EditOutcome::LineFinished(0)
    );

    let doc = editor.document();
    assert_eq!(doc.elements().len(), 1);
    let line = doc.elements()[0].as_line().unwrap();
    assert_eq!(
        line.points(),
        &[
            Point::new(100, 100),
            Point::new(140, 100),
            Point::new(140, 140)
        ]
    );
    assert!(editor.pending().is_none());
}

#[test]
fn test_draw_skips_repeated_points() {
    let mut editor = editor_with(Tool::Draw);
    editor.start(Point::new(0, 0));
    assert_eq!(editor.move_to(Point::new(0, 0)), EditOutcome::Ignored);
    assert_eq!(editor.move_to(Point::new(20, 0)), EditOutcome::Updated);
    assert_eq!(editor.move_to(Point::new(20, 0)), EditOutcome::Ignored);
    editor.end(Point::new(20, 0), &mut AcceptDefaults);

    let line = editor.document().elements()[0].as_line().unwrap();
    assert_eq!(line.points().len(), 2);
}

#[test]
fn test_room_from_raw_pointer_snaps_corners() {
    let mut editor = editor_with(Tool::Room);
    let rect = CanvasRect::at_origin(800.0, 600.0);
    let mut prompt = FixedPrompt::room("Salon");

    editor.handle_pointer(PointerPhase::Start, &RawPointer::mouse(0.0, 0.0), &rect, &mut prompt);
    let outcome = editor.handle_pointer(
        PointerPhase::End,
        &RawPointer::mouse(97.0, 53.0),
        &rect,
        &mut prompt,
    );

    assert_eq!(outcome, EditOutcome::RoomAdded(0));
    assert_eq!(
        editor.document().rooms(),
        &[Room::new("Salon", Point::new(0, 0), 100, 60)]
    );
}

#[test]
fn test_room_cancelled_prompt_discards() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(100, 60));

    assert_eq!(
        editor.end(Point::new(100, 60), &mut CancelAll),
        EditOutcome::RoomDiscarded
    );
    assert!(editor.document().rooms().is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn test_room_blank_name_discards() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(0, 0));
    let outcome = editor.end(Point::new(40, 40), &mut FixedPrompt::room("   "));
    assert_eq!(outcome, EditOutcome::RoomDiscarded);
    assert!(editor.document().rooms().is_empty());
}

#[test]
fn test_room_default_name_and_reverse_drag() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(100, 100));
    editor.end(Point::new(40, 20), &mut AcceptDefaults);

    let room = &editor.document().rooms()[0];
    assert_eq!(room.name, "Pièce");
    assert_eq!(room.origin, Point::new(40, 20));
    assert_eq!((room.width, room.height), (60, 80));
}

#[test]
fn test_door_single_click() {
    let mut editor = editor_with(Tool::Door);

    assert_eq!(editor.start(Point::new(200, 200)), EditOutcome::FixturePlaced(0));
    assert!(editor.pending().is_none());
    assert_eq!(
        editor.document().elements(),
        &[DrawElement::Fixture(Fixture::new(
            FixtureKind::Door,
            Point::new(200, 200)
        ))]
    );

    // The release of the same click changes nothing.
    assert_eq!(
        editor.end(Point::new(200, 200), &mut AcceptDefaults),
        EditOutcome::Ignored
    );
    assert_eq!(editor.document().elements().len(), 1);
}

#[test]
fn test_window_tool_places_window() {
    let mut editor = editor_with(Tool::Window);
    editor.start(Point::new(40, 0));
    assert!(matches!(
        editor.document().elements()[0],
        DrawElement::Fixture(Fixture {
            kind: FixtureKind::Window,
            ..
        })
    ));
}

#[test]
fn test_measure_uses_prompt_label() {
    let mut editor = editor_with(Tool::Measure);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(100, 0));
    editor.end(Point::new(100, 0), &mut FixedPrompt::label("2.5"));

    let m = &editor.document().measurements()[0];
    assert_eq!(m.value, "2.5");
    assert_eq!(m.display_label(), "2.5m");
}

#[test]
fn test_second_start_is_ignored() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(0, 0));
    assert_eq!(editor.start(Point::new(200, 200)), EditOutcome::Ignored);
    assert_eq!(
        editor.pending(),
        Some(&Gesture::Room {
            start: Point::new(0, 0),
            current: Point::new(0, 0)
        })
    );

    let mut editor = editor_with(Tool::Draw);
    editor.start(Point::new(0, 0));
    editor.start(Point::new(40, 40));
    assert_eq!(editor.document().elements().len(), 1);
}

#[test]
fn test_tool_switch_cancels_stroke() {
    let mut editor = editor_with(Tool::Draw);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(20, 20));
    assert_eq!(editor.document().elements().len(), 1);

    editor.set_tool(Tool::Room);
    assert!(editor.pending().is_none());
    assert!(editor.document().elements().is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn test_tool_switch_cancels_room() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(60, 60));
    editor.set_tool(Tool::Select);

    assert_eq!(
        editor.end(Point::new(60, 60), &mut AcceptDefaults),
        EditOutcome::Ignored
    );
    assert!(editor.document().rooms().is_empty());
    assert_eq!(editor.active_tool(), Tool::Select);
}

#[test]
fn test_select_hits_topmost_element_then_room() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Room);
    editor.start(Point::new(0, 0));
    editor.end(Point::new(200, 200), &mut AcceptDefaults);
    editor.set_tool(Tool::Door);
    editor.start(Point::new(40, 40));

    editor.set_tool(Tool::Select);
    assert_eq!(
        editor.start(Point::new(40, 40)),
        EditOutcome::Selected(Some(Selection::Element(0)))
    );
    assert_eq!(
        editor.start(Point::new(160, 160)),
        EditOutcome::Selected(Some(Selection::Room(0)))
    );
    assert_eq!(editor.start(Point::new(600, 500)), EditOutcome::Selected(None));
    assert_eq!(editor.document().elements().len(), 1);
}

#[test]
fn test_delete_selection_is_undoable() {
    let mut editor = editor_with(Tool::Window);
    editor.start(Point::new(100, 100));
    editor.set_tool(Tool::Select);
    editor.start(Point::new(100, 100));

    assert!(editor.delete_selection());
    assert!(editor.document().elements().is_empty());
    assert!(!editor.delete_selection());

    assert!(editor.undo());
    assert_eq!(editor.document().elements().len(), 1);
}

#[test]
fn test_overlay_previews() {
    let mut editor = editor_with(Tool::Room);
    editor.start(Point::new(100, 100));
    editor.move_to(Point::new(60, 140));
    assert_eq!(
        editor.overlay().preview,
        Some(GesturePreview::Room {
            origin: Point::new(60, 100),
            width: 40,
            height: 40
        })
    );

    let mut editor = editor_with(Tool::Measure);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(80, 0));
    assert_eq!(
        editor.overlay().preview,
        Some(GesturePreview::Measure {
            from: Point::new(0, 0),
            to: Point::new(80, 0)
        })
    );
    editor.end(Point::new(80, 0), &mut AcceptDefaults);
    assert_eq!(editor.overlay().preview, None);
}

#[test]
fn test_clear_plan_keeps_metadata_and_undoes() {
    let mut editor = editor_with(Tool::Door);
    editor.start(Point::new(20, 20));
    editor.set_scale(siteplan_core::PlanScale::OneTo50);

    assert!(editor.clear_plan());
    assert!(editor.document().is_empty());
    assert_eq!(editor.document().scale(), siteplan_core::PlanScale::OneTo50);
    assert!(!editor.clear_plan());

    assert!(editor.undo());
    assert_eq!(editor.document().elements().len(), 1);
}

#[test]
fn test_remove_room_out_of_range() {
    let mut editor = EditorContext::default();
    assert!(editor.remove_room(0).is_err());
}

#[test]
fn test_close_discards_everything() {
    let mut editor = editor_with(Tool::Draw);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(20, 0));
    editor.close();

    assert!(editor.document().is_empty());
    assert!(editor.pending().is_none());
    assert!(!editor.can_undo());
}

#[test]
fn test_clamped_editor_keeps_points_on_canvas() {
    let options = EditorOptions {
        clamp_to_canvas: true,
        ..EditorOptions::default()
    };
    let mut editor = EditorContext::new(options);
    editor.set_tool(Tool::Door);
    let rect = editor.options().canvas_rect();
    editor.handle_pointer(
        PointerPhase::Start,
        &RawPointer::touch(950.0, -30.0),
        &rect,
        &mut AcceptDefaults,
    );
    assert_eq!(
        editor.document().elements()[0],
        Fixture::new(FixtureKind::Door, Point::new(800, 0)).into()
    );
}

#[test]
fn test_far_pointer_stays_on_grid_and_selectable() {
    let mut editor = editor_with(Tool::Door);
    let rect = editor.options().canvas_rect();
    editor.handle_pointer(
        PointerPhase::Start,
        &RawPointer::mouse(1e12, 0.0),
        &rect,
        &mut AcceptDefaults,
    );
    let door = match &editor.document().elements()[0] {
        DrawElement::Fixture(f) => f.position,
        other => panic!("expected a fixture, got {:?}", other),
    };
    assert_eq!(door.x % 20, 0);
    assert!(door.x > 0);

    editor.set_tool(Tool::Select);
    assert_eq!(editor.start(Point::new(0, 0)), EditOutcome::Selected(None));
    assert_eq!(
        editor.start(door),
        EditOutcome::Selected(Some(Selection::Element(0)))
    );
}
