//! Undoable plan edits.
//!
//! Each command knows how to re-apply and revert one change to a
//! [`PlanDocument`]. Gestures mutate the document first and record the
//! matching command afterwards; toolbar actions go through
//! [`crate::history::History::push`], which applies the command itself.

use siteplan_core::{PlanError, PlanScale};

use crate::model::{DrawElement, Measurement, PlanContents, PlanDocument, Room};

#[derive(Debug, Clone, PartialEq)]
pub enum PlanCommand {
    AddElement(AddElement),
    RemoveElement(RemoveElement),
    AddRoom(AddRoom),
    RemoveRoom(RemoveRoom),
    AddMeasurement(AddMeasurement),
    RemoveMeasurement(RemoveMeasurement),
    ClearPlan(ClearPlan),
    SetScale(SetScale),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddElement {
    pub index: usize,
    pub element: Option<DrawElement>, // None when on the plan, Some when undone
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveElement {
    pub index: usize,
    pub element: Option<DrawElement>, // Some when removed, None when restored
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddRoom {
    pub index: usize,
    pub room: Option<Room>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveRoom {
    pub index: usize,
    pub room: Option<Room>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddMeasurement {
    pub index: usize,
    pub measurement: Option<Measurement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveMeasurement {
    pub index: usize,
    pub measurement: Option<Measurement>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClearPlan {
    pub contents: Option<PlanContents>, // Some once the plan has been cleared
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetScale {
    pub old: PlanScale,
    pub new: PlanScale,
}

impl PlanCommand {
    /// Command for an element already appended at `index`.
    pub fn added_element(index: usize) -> Self {
        Self::AddElement(AddElement {
            index,
            element: None,
        })
    }

    /// Command for a room already committed at `index`.
    pub fn added_room(index: usize) -> Self {
        Self::AddRoom(AddRoom { index, room: None })
    }

    /// Command for a measurement already committed at `index`.
    pub fn added_measurement(index: usize) -> Self {
        Self::AddMeasurement(AddMeasurement {
            index,
            measurement: None,
        })
    }

    pub fn remove_element(index: usize) -> Self {
        Self::RemoveElement(RemoveElement {
            index,
            element: None,
        })
    }

    pub fn remove_room(index: usize) -> Self {
        Self::RemoveRoom(RemoveRoom { index, room: None })
    }

    pub fn remove_measurement(index: usize) -> Self {
        Self::RemoveMeasurement(RemoveMeasurement {
            index,
            measurement: None,
        })
    }

    pub fn clear() -> Self {
        Self::ClearPlan(ClearPlan::default())
    }

    /// Label for menus ("Undo Add Room").
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddElement(cmd) => match &cmd.element {
                Some(DrawElement::Fixture(_)) => "Add Fixture",
                Some(DrawElement::Line(_)) => "Draw Line",
                None => "Add Element",
            },
            Self::RemoveElement(_) => "Delete Element",
            Self::AddRoom(_) => "Add Room",
            Self::RemoveRoom(_) => "Delete Room",
            Self::AddMeasurement(_) => "Add Measurement",
            Self::RemoveMeasurement(_) => "Delete Measurement",
            Self::ClearPlan(_) => "Clear Plan",
            Self::SetScale(_) => "Change Scale",
        }
    }

    /// Performs the change. Fails without touching the document when the
    /// target is gone.
    pub fn apply(&mut self, doc: &mut PlanDocument) -> Result<(), PlanError> {
        match self {
            Self::AddElement(cmd) => {
                if let Some(element) = cmd.element.take() {
                    doc.insert_element(cmd.index, element);
                }
            }
            Self::RemoveElement(cmd) => {
                cmd.element = Some(doc.remove_element(cmd.index)?);
            }
            Self::AddRoom(cmd) => {
                if let Some(room) = cmd.room.take() {
                    doc.insert_room(cmd.index, room);
                }
            }
            Self::RemoveRoom(cmd) => {
                cmd.room = Some(doc.remove_room(cmd.index)?);
            }
            Self::AddMeasurement(cmd) => {
                if let Some(measurement) = cmd.measurement.take() {
                    doc.insert_measurement(cmd.index, measurement);
                }
            }
            Self::RemoveMeasurement(cmd) => {
                cmd.measurement = Some(doc.remove_measurement(cmd.index)?);
            }
            Self::ClearPlan(cmd) => {
                cmd.contents = Some(doc.take_contents());
            }
            Self::SetScale(cmd) => doc.set_scale(cmd.new),
        }
        Ok(())
    }

    pub fn undo(&mut self, doc: &mut PlanDocument) {
        match self {
            Self::AddElement(cmd) => {
                if let Ok(element) = doc.remove_element(cmd.index) {
                    cmd.element = Some(element);
                }
            }
            Self::RemoveElement(cmd) => {
                if let Some(element) = cmd.element.take() {
                    doc.insert_element(cmd.index, element);
                }
            }
            Self::AddRoom(cmd) => {
                if let Ok(room) = doc.remove_room(cmd.index) {
                    cmd.room = Some(room);
                }
            }
            Self::RemoveRoom(cmd) => {
                if let Some(room) = cmd.room.take() {
                    doc.insert_room(cmd.index, room);
                }
            }
            Self::AddMeasurement(cmd) => {
                if let Ok(measurement) = doc.remove_measurement(cmd.index) {
                    cmd.measurement = Some(measurement);
                }
            }
            Self::RemoveMeasurement(cmd) => {
                if let Some(measurement) = cmd.measurement.take() {
                    doc.insert_measurement(cmd.index, measurement);
                }
            }
            Self::ClearPlan(cmd) => {
                if let Some(contents) = cmd.contents.take() {
                    doc.restore_contents(contents);
                }
            }
            Self::SetScale(cmd) => doc.set_scale(cmd.old),
        }
    }
}
