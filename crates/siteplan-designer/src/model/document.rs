use siteplan_core::constants::DEFAULT_GRID_PITCH;
use siteplan_core::{PlanError, PlanScale};

use super::{DrawElement, Measurement, Point, Room, Selection};
use crate::grid::Grid;
use crate::tools::Tool;

/// The sketch attached to one job-site survey.
///
/// Insertion order of `elements` is the render z-order: later entries are
/// drawn on top. Rooms and measurements are kept in their own sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDocument {
    elements: Vec<DrawElement>,
    rooms: Vec<Room>,
    measurements: Vec<Measurement>,
    scale: PlanScale,
    grid: Grid,
    active_tool: Tool,
}

/// One line of the room list shown beside the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub index: usize,
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
    pub width_cells: f64,
    pub height_cells: f64,
}

impl Default for PlanDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanDocument {
    /// Empty plan with the default 20px grid at 1:100.
    pub fn new() -> Self {
        Self::with_settings(Grid::new_unchecked(DEFAULT_GRID_PITCH), PlanScale::default())
    }

    pub fn with_settings(grid: Grid, scale: PlanScale) -> Self {
        Self {
            elements: Vec::new(),
            rooms: Vec::new(),
            measurements: Vec::new(),
            scale,
            grid,
            active_tool: Tool::default(),
        }
    }

    pub fn elements(&self) -> &[DrawElement] {
        &self.elements
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn scale(&self) -> PlanScale {
        self.scale
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn grid_pitch(&self) -> u32 {
        self.grid.pitch()
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.rooms.is_empty() && self.measurements.is_empty()
    }

    pub fn set_scale(&mut self, scale: PlanScale) {
        self.scale = scale;
    }

    /// Changes the snapping unit for future input. Existing coordinates are kept.
    pub fn set_grid_pitch(&mut self, pitch: u32) -> Result<(), PlanError> {
        self.grid = Grid::new(pitch)?;
        Ok(())
    }

    pub fn set_active_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    /// Appends an element on top of the z-order and returns its index.
    pub fn append_element(&mut self, element: DrawElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Commits a room spanning the two corners, normalized to a positive size.
    pub fn commit_room(&mut self, name: impl Into<String>, a: Point, b: Point) -> usize {
        self.rooms.push(Room::from_corners(name, a, b));
        self.rooms.len() - 1
    }

    pub fn commit_measurement(&mut self, from: Point, to: Point, value: impl Into<String>) -> usize {
        self.measurements.push(Measurement::new(from, to, value));
        self.measurements.len() - 1
    }

    /// Immutable copy handed to the serializer.
    pub fn snapshot(&self) -> PlanDocument {
        self.clone()
    }

    /// Drops every element, room and measurement. Scale and grid survive.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.rooms.clear();
        self.measurements.clear();
    }

    pub fn remove_element(&mut self, index: usize) -> Result<DrawElement, PlanError> {
        check_index("elements", index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    pub fn remove_room(&mut self, index: usize) -> Result<Room, PlanError> {
        check_index("rooms", index, self.rooms.len())?;
        Ok(self.rooms.remove(index))
    }

    pub fn remove_measurement(&mut self, index: usize) -> Result<Measurement, PlanError> {
        check_index("measurements", index, self.measurements.len())?;
        Ok(self.measurements.remove(index))
    }

    /// Topmost element under `point`, else the topmost room.
    pub fn hit_test(&self, point: &Point, tolerance: f64) -> Option<Selection> {
        if let Some(index) = self
            .elements
            .iter()
            .rposition(|e| e.contains_point(point, tolerance))
        {
            return Some(Selection::Element(index));
        }
        self.rooms
            .iter()
            .rposition(|r| r.contains_point(point, tolerance))
            .map(Selection::Room)
    }

    /// Bounding box of a selection, if it still refers to something.
    pub fn selection_bounds(&self, selection: Selection) -> Option<(i32, i32, i32, i32)> {
        match selection {
            Selection::Element(i) => self.elements.get(i).map(DrawElement::bounds),
            Selection::Room(i) => self.rooms.get(i).map(Room::bounds),
        }
    }

    pub fn room_summaries(&self) -> Vec<RoomSummary> {
        let pitch = f64::from(self.grid.pitch());
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| RoomSummary {
                index,
                name: room.name.clone(),
                width_px: room.width,
                height_px: room.height,
                width_cells: f64::from(room.width) / pitch,
                height_cells: f64::from(room.height) / pitch,
            })
            .collect()
    }

    pub(crate) fn element_mut(&mut self, index: usize) -> Option<&mut DrawElement> {
        self.elements.get_mut(index)
    }

    pub(crate) fn insert_element(&mut self, index: usize, element: DrawElement) {
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
    }

    pub(crate) fn insert_room(&mut self, index: usize, room: Room) {
        let index = index.min(self.rooms.len());
        self.rooms.insert(index, room);
    }

    pub(crate) fn insert_measurement(&mut self, index: usize, measurement: Measurement) {
        let index = index.min(self.measurements.len());
        self.measurements.insert(index, measurement);
    }

    /// Moves the three sequences out, leaving them empty.
    pub(crate) fn take_contents(&mut self) -> PlanContents {
        PlanContents {
            elements: std::mem::take(&mut self.elements),
            rooms: std::mem::take(&mut self.rooms),
            measurements: std::mem::take(&mut self.measurements),
        }
    }

    pub(crate) fn restore_contents(&mut self, contents: PlanContents) {
        self.elements = contents.elements;
        self.rooms = contents.rooms;
        self.measurements = contents.measurements;
    }

    pub(crate) fn from_parts(
        contents: PlanContents,
        grid: Grid,
        scale: PlanScale,
        active_tool: Tool,
    ) -> Self {
        Self {
            elements: contents.elements,
            rooms: contents.rooms,
            measurements: contents.measurements,
            scale,
            grid,
            active_tool,
        }
    }
}

/// The mutable payload of a plan, detached from its metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanContents {
    pub elements: Vec<DrawElement>,
    pub rooms: Vec<Room>,
    pub measurements: Vec<Measurement>,
}

fn check_index(collection: &'static str, index: usize, len: usize) -> Result<(), PlanError> {
    if index < len {
        Ok(())
    } else {
        Err(PlanError::IndexOutOfRange {
            collection,
            index,
            len,
        })
    }
}
