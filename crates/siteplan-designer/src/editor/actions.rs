//! Toolbar actions: undo/redo, clear, scale and deletions.

use siteplan_core::{PlanError, PlanScale};

use super::EditorContext;
use crate::commands::{PlanCommand, SetScale};
use crate::model::Selection;

impl EditorContext {
    /// Reverts the last committed edit. A pending gesture is cancelled first.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        self.selection = None;
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        self.selection = None;
        self.history.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empties the plan as one undoable step. Scale and grid are kept.
    ///
    /// Returns false when the plan was already empty.
    pub fn clear_plan(&mut self) -> bool {
        self.cancel_gesture();
        self.selection = None;
        if self.document.is_empty() {
            return false;
        }
        if let Err(e) = self.history.push(PlanCommand::clear(), &mut self.document) {
            tracing::warn!("Clearing plan failed: {}", e);
            return false;
        }
        tracing::info!("Plan cleared");
        true
    }

    pub fn set_scale(&mut self, scale: PlanScale) {
        let old = self.document.scale();
        if old == scale {
            return;
        }
        let cmd = PlanCommand::SetScale(SetScale { old, new: scale });
        match self.history.push(cmd, &mut self.document) {
            Ok(()) => tracing::debug!("Scale set to {}", scale),
            Err(e) => tracing::warn!("Changing scale failed: {}", e),
        }
    }

    /// Deletes a room from the room list.
    ///
    /// A pending gesture is cancelled before the index is resolved.
    pub fn remove_room(&mut self, index: usize) -> Result<(), PlanError> {
        self.cancel_gesture();
        self.selection = None;
        self.history
            .push(PlanCommand::remove_room(index), &mut self.document)
    }

    /// Deletes an element. Indices refer to the plan after any pending
    /// stroke has been cancelled.
    pub fn remove_element(&mut self, index: usize) -> Result<(), PlanError> {
        self.cancel_gesture();
        self.selection = None;
        self.history
            .push(PlanCommand::remove_element(index), &mut self.document)
    }

    pub fn remove_measurement(&mut self, index: usize) -> Result<(), PlanError> {
        self.cancel_gesture();
        self.history
            .push(PlanCommand::remove_measurement(index), &mut self.document)
    }

    /// Deletes whatever the select tool picked. Returns false with no selection.
    pub fn delete_selection(&mut self) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };
        let removed = match selection {
            Selection::Element(index) => self.remove_element(index),
            Selection::Room(index) => self.remove_room(index),
        };
        self.selection = None;
        removed.is_ok()
    }
}
