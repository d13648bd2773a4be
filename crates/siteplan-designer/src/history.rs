//! Bounded undo/redo stacks of [`PlanCommand`]s.

use siteplan_core::constants::DEFAULT_HISTORY_DEPTH;

use siteplan_core::PlanError;

use crate::commands::PlanCommand;
use crate::model::PlanDocument;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<PlanCommand>,
    redo_stack: Vec<PlanCommand>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Applies a command to the document and records it. A command that
    /// fails to apply is not recorded and the redo stack is kept.
    pub fn push(
        &mut self,
        mut cmd: PlanCommand,
        doc: &mut PlanDocument,
    ) -> Result<(), PlanError> {
        cmd.apply(doc)?;
        self.record(cmd);
        Ok(())
    }

    /// Records a command whose effect is already on the document.
    pub fn record(&mut self, cmd: PlanCommand) {
        if self.max_depth == 0 {
            return;
        }
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Reverts the last command. Returns false when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut PlanDocument) -> bool {
        let Some(mut cmd) = self.undo_stack.pop() else {
            return false;
        };
        cmd.undo(doc);
        tracing::debug!("Undo {}", cmd.name());
        self.redo_stack.push(cmd);
        true
    }

    /// Re-applies the last undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut PlanDocument) -> bool {
        let Some(mut cmd) = self.redo_stack.pop() else {
            return false;
        };
        if let Err(e) = cmd.apply(doc) {
            tracing::warn!("Dropping {} from redo: {}", cmd.name(), e);
            return false;
        }
        tracing::debug!("Redo {}", cmd.name());
        self.undo_stack.push(cmd);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command `undo` would revert.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(PlanCommand::name)
    }

    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(PlanCommand::name)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
