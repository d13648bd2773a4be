use siteplan_core::PlanScale;
use siteplan_designer::commands::SetScale;
use siteplan_designer::{AcceptDefaults, EditorContext, History, PlanCommand, PlanDocument, Point, Tool};

#[test]
fn test_history_creation() {
    let history = History::new(50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_push_undo_redo() {
    let mut doc = PlanDocument::new();
    let mut history = History::default();
    history.push(
        PlanCommand::SetScale(SetScale {
            old: PlanScale::OneTo100,
            new: PlanScale::OneTo200,
        }),
        &mut doc,
    )
    .unwrap();
    assert_eq!(doc.scale(), PlanScale::OneTo200);
    assert_eq!(history.undo_name(), Some("Change Scale"));

    assert!(history.undo(&mut doc));
    assert_eq!(doc.scale(), PlanScale::OneTo100);
    assert!(history.can_redo());

    assert!(history.redo(&mut doc));
    assert_eq!(doc.scale(), PlanScale::OneTo200);
    assert!(!history.redo(&mut doc));
}

#[test]
fn test_new_edit_clears_redo() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Door);
    editor.start(Point::new(0, 0));
    editor.start(Point::new(40, 0));
    assert!(editor.undo());
    assert!(editor.can_redo());

    editor.start(Point::new(80, 0));
    assert!(!editor.can_redo());
    assert_eq!(editor.document().elements().len(), 2);
}

#[test]
fn test_depth_is_bounded() {
    let mut doc = PlanDocument::new();
    let mut history = History::new(3);
    for i in 0..5 {
        let index = doc.commit_room(format!("R{i}"), Point::new(0, 0), Point::new(20, 20));
        history.record(PlanCommand::added_room(index));
    }
    assert_eq!(history.undo_depth(), 3);
    while history.undo(&mut doc) {}
    assert_eq!(doc.rooms().len(), 2);
}

#[test]
fn test_undo_redo_room_and_stroke() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Room);
    editor.start(Point::new(0, 0));
    editor.end(Point::new(100, 60), &mut AcceptDefaults);
    editor.set_tool(Tool::Draw);
    editor.start(Point::new(0, 100));
    editor.move_to(Point::new(100, 100));
    editor.end(Point::new(100, 100), &mut AcceptDefaults);
    let full = editor.document().snapshot();

    assert!(editor.undo());
    assert!(editor.document().elements().is_empty());
    assert!(editor.undo());
    assert!(editor.document().rooms().is_empty());
    assert!(!editor.undo());

    assert!(editor.redo());
    assert!(editor.redo());
    assert_eq!(editor.document(), &full);
}

#[test]
fn test_undo_cancels_pending_stroke() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Door);
    editor.start(Point::new(0, 0));
    editor.set_tool(Tool::Draw);
    editor.start(Point::new(40, 40));
    editor.move_to(Point::new(60, 40));

    assert!(editor.undo());
    assert!(editor.pending().is_none());
    assert!(editor.document().is_empty());
}

#[test]
fn test_failed_push_is_not_recorded() {
    let mut doc = PlanDocument::new();
    let mut history = History::default();
    let index = doc.commit_room("A", Point::new(0, 0), Point::new(20, 20));
    history.record(PlanCommand::added_room(index));
    assert!(history.undo(&mut doc));
    assert!(history.can_redo());

    assert!(history
        .push(PlanCommand::remove_element(3), &mut doc)
        .is_err());
    assert_eq!(history.undo_depth(), 0);
    assert!(history.can_redo());
}

#[test]
fn test_removing_the_pending_stroke_records_nothing() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Draw);
    editor.start(Point::new(0, 0));
    editor.move_to(Point::new(20, 0));
    assert_eq!(editor.document().elements().len(), 1);

    assert!(editor.remove_element(0).is_err());
    assert!(editor.document().is_empty());
    assert!(editor.pending().is_none());
    assert!(!editor.can_undo());
}

#[test]
fn test_remove_after_cancel_targets_committed_element() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Door);
    editor.start(Point::new(0, 0));
    editor.set_tool(Tool::Draw);
    editor.start(Point::new(40, 40));
    editor.move_to(Point::new(60, 40));

    editor.remove_element(0).unwrap();
    assert!(editor.document().is_empty());
    assert_eq!(editor.history().undo_name(), Some("Delete Element"));

    assert!(editor.undo());
    assert_eq!(editor.document().elements().len(), 1);
}
