//! Pointer gestures per tool.

use super::{EditorContext, Prompt};
use crate::commands::PlanCommand;
use crate::input::{normalize, CanvasRect, RawPointer};
use crate::model::{DrawElement, Fixture, PolyLine, Point, Selection};
use crate::tools::Tool;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// Gesture begun by `start` and not yet ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Stroke being drawn; the line already sits in the plan at `element_index`.
    Drawing { element_index: usize },
    /// Room rectangle being dragged out.
    Room { start: Point, current: Point },
    /// Dimension segment being dragged out.
    Measure { start: Point, current: Point },
}

/// What a pointer event did to the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Nothing happened.
    Ignored,
    /// Select tool: new selection, `None` when nothing was hit.
    Selected(Option<Selection>),
    /// A drag gesture is now pending.
    GestureStarted,
    /// The pending gesture moved.
    Updated,
    /// A door or window was stamped at this element index.
    FixturePlaced(usize),
    /// A stroke was finished at this element index.
    LineFinished(usize),
    /// A room was committed at this index.
    RoomAdded(usize),
    /// The room dialog was cancelled or left empty.
    RoomDiscarded,
    /// A measurement was committed at this index.
    MeasurementAdded(usize),
}

impl EditOutcome {
    /// Whether the plan changed and needs a repaint of committed content.
    pub fn is_commit(&self) -> bool {
        matches!(
            self,
            Self::FixturePlaced(_)
                | Self::LineFinished(_)
                | Self::RoomAdded(_)
                | Self::MeasurementAdded(_)
        )
    }
}

impl EditorContext {
    /// Snaps a raw pointer event using this editor's grid and clamp setting.
    pub fn normalize(&self, raw: &RawPointer, rect: &CanvasRect) -> Point {
        normalize(
            raw,
            rect,
            &self.document.grid(),
            self.options.clamp_to_canvas,
        )
    }

    /// Normalizes a raw event and dispatches it to `start`, `move_to` or `end`.
    pub fn handle_pointer(
        &mut self,
        phase: PointerPhase,
        raw: &RawPointer,
        rect: &CanvasRect,
        prompt: &mut dyn Prompt,
    ) -> EditOutcome {
        let point = self.normalize(raw, rect);
        match phase {
            PointerPhase::Start => self.start(point),
            PointerPhase::Move => self.move_to(point),
            PointerPhase::End => self.end(point, prompt),
        }
    }

    /// Pointer down at a snapped point.
    ///
    /// Ignored while another gesture is pending.
    pub fn start(&mut self, point: Point) -> EditOutcome {
        if self.pending.is_some() {
            tracing::debug!("Ignoring start at {:?}: gesture already pending", point);
            return EditOutcome::Ignored;
        }

        let tool = self.document.active_tool();
        match tool {
            Tool::Select => {
                self.selection = self.document.hit_test(&point, self.options.hit_tolerance);
                EditOutcome::Selected(self.selection)
            }
            Tool::Draw => {
                let element_index = self
                    .document
                    .append_element(DrawElement::Line(PolyLine::new(point)));
                self.pending = Some(Gesture::Drawing { element_index });
                EditOutcome::GestureStarted
            }
            Tool::Room => {
                self.pending = Some(Gesture::Room {
                    start: point,
                    current: point,
                });
                EditOutcome::GestureStarted
            }
            Tool::Measure => {
                self.pending = Some(Gesture::Measure {
                    start: point,
                    current: point,
                });
                EditOutcome::GestureStarted
            }
            Tool::Door | Tool::Window => {
                let Some(kind) = tool.fixture_kind() else {
                    return EditOutcome::Ignored;
                };
                let index = self
                    .document
                    .append_element(Fixture::new(kind, point).into());
                self.history.record(PlanCommand::added_element(index));
                tracing::debug!("Placed {} at ({}, {})", kind.name(), point.x, point.y);
                EditOutcome::FixturePlaced(index)
            }
        }
    }

    /// Pointer moved. No-op without a pending gesture.
    pub fn move_to(&mut self, point: Point) -> EditOutcome {
        match self.pending.as_mut() {
            Some(Gesture::Drawing { element_index }) => {
                let index = *element_index;
                match self.document.element_mut(index) {
                    Some(DrawElement::Line(line)) => {
                        if line.extend(point) {
                            EditOutcome::Updated
                        } else {
                            EditOutcome::Ignored
                        }
                    }
                    _ => EditOutcome::Ignored,
                }
            }
            Some(Gesture::Room { current, .. }) | Some(Gesture::Measure { current, .. }) => {
                if *current == point {
                    EditOutcome::Ignored
                } else {
                    *current = point;
                    EditOutcome::Updated
                }
            }
            None => EditOutcome::Ignored,
        }
    }

    /// Pointer released. Commits the pending gesture, asking `prompt` for
    /// any text it needs.
    pub fn end(&mut self, point: Point, prompt: &mut dyn Prompt) -> EditOutcome {
        let Some(gesture) = self.pending.take() else {
            return EditOutcome::Ignored;
        };

        match gesture {
            Gesture::Drawing { element_index } => {
                self.history.record(PlanCommand::added_element(element_index));
                tracing::debug!("Finished stroke {}", element_index);
                EditOutcome::LineFinished(element_index)
            }
            Gesture::Room { start, .. } => {
                let name = prompt
                    .room_name(&self.options.default_room_name)
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty());
                let Some(name) = name else {
                    tracing::debug!("Room discarded");
                    return EditOutcome::RoomDiscarded;
                };
                let index = self.document.commit_room(name, start, point);
                self.history.record(PlanCommand::added_room(index));
                tracing::debug!("Added room {}", index);
                EditOutcome::RoomAdded(index)
            }
            Gesture::Measure { start, .. } => {
                let suggested = format!("{:.1}", start.distance_to(&point));
                let value = prompt
                    .measurement_label(&suggested)
                    .map(|label| label.trim().to_string())
                    .filter(|label| !label.is_empty())
                    .unwrap_or(suggested);
                let index = self.document.commit_measurement(start, point, value);
                self.history.record(PlanCommand::added_measurement(index));
                tracing::debug!("Added measurement {}", index);
                EditOutcome::MeasurementAdded(index)
            }
        }
    }
}
