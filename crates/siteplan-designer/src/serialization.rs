//! Serialization and deserialization of the `plan_data` string.
//!
//! The stored shape is the JSON object the survey screens have always
//! written, so plans saved by older clients load unchanged:
//!
//! ```json
//! {"elements":[{"type":"line","points":[{"x":0,"y":0}]},{"type":"door","x":200,"y":200}],
//!  "rooms":[{"name":"Salon","x":0,"y":0,"width":100,"height":60}],
//!  "measurements":[{"x1":0,"y1":0,"x2":100,"y2":0,"value":"2.5"}],
//!  "scale":100,"gridSize":20,"currentTool":"select"}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use siteplan_core::constants::DEFAULT_GRID_PITCH;
use siteplan_core::{PlanError, PlanScale};

use crate::grid::Grid;
use crate::model::{
    DrawElement, Fixture, FixtureKind, Measurement, PlanContents, PlanDocument, Point, PolyLine,
    Room,
};
use crate::tools::Tool;

/// Complete plan as stored in a survey record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub elements: Vec<ElementData>,
    #[serde(default)]
    pub rooms: Vec<RoomData>,
    #[serde(default)]
    pub measurements: Vec<MeasurementData>,
    #[serde(default, deserialize_with = "lenient_scale")]
    pub scale: PlanScale,
    #[serde(rename = "gridSize", default = "default_grid_size")]
    pub grid_size: u32,
    #[serde(rename = "currentTool", default, deserialize_with = "lenient_tool")]
    pub current_tool: Tool,
}

/// Serialized drawn element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementData {
    Line {
        #[serde(default)]
        points: Vec<PointData>,
    },
    Door {
        #[serde(deserialize_with = "coord")]
        x: i32,
        #[serde(deserialize_with = "coord")]
        y: i32,
    },
    Window {
        #[serde(deserialize_with = "coord")]
        x: i32,
        #[serde(deserialize_with = "coord")]
        y: i32,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointData {
    #[serde(deserialize_with = "coord")]
    pub x: i32,
    #[serde(deserialize_with = "coord")]
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomData {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "coord")]
    pub x: i32,
    #[serde(deserialize_with = "coord")]
    pub y: i32,
    #[serde(deserialize_with = "coord")]
    pub width: i32,
    #[serde(deserialize_with = "coord")]
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementData {
    #[serde(deserialize_with = "coord")]
    pub x1: i32,
    #[serde(deserialize_with = "coord")]
    pub y1: i32,
    #[serde(deserialize_with = "coord")]
    pub x2: i32,
    #[serde(deserialize_with = "coord")]
    pub y2: i32,
    #[serde(default, deserialize_with = "label")]
    pub value: String,
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_PITCH
}

/// Accepts integer or fractional JSON numbers, rounding to whole pixels.
fn coord<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("coordinate is not a finite number"));
    }
    Ok(value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
}

/// Accepts a string or a bare number for a measurement label.
fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

/// Accepts `100`, `100.0` or `"100"`. Unknown ratios read as 1:100.
fn lenient_scale<'de, D>(deserializer: D) -> Result<PlanScale, D::Error>
where
    D: Deserializer<'de>,
{
    let scale = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| PlanScale::from(v.round() as u32)),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };
    Ok(scale.unwrap_or_default())
}

/// Unknown tool names fall back to `select`.
fn lenient_tool<'de, D>(deserializer: D) -> Result<Tool, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|n| n.parse().ok()).unwrap_or_default())
}

impl PlanFile {
    pub fn from_document(doc: &PlanDocument) -> Self {
        Self {
            elements: doc.elements().iter().map(ElementData::from_element).collect(),
            rooms: doc.rooms().iter().map(RoomData::from_room).collect(),
            measurements: doc
                .measurements()
                .iter()
                .map(MeasurementData::from_measurement)
                .collect(),
            scale: doc.scale(),
            grid_size: doc.grid_pitch(),
            current_tool: doc.active_tool(),
        }
    }

    /// Rebuilds the document. Lines without points are dropped and a zero
    /// grid size is replaced by the default, both with a warning.
    pub fn into_document(self) -> PlanDocument {
        let grid = Grid::new(self.grid_size).unwrap_or_else(|_| {
            tracing::warn!(
                "Plan has grid size {}, using {}",
                self.grid_size,
                DEFAULT_GRID_PITCH
            );
            Grid::new_unchecked(DEFAULT_GRID_PITCH)
        });

        let mut elements = Vec::with_capacity(self.elements.len());
        for (index, data) in self.elements.into_iter().enumerate() {
            match data.into_element() {
                Some(element) => elements.push(element),
                None => tracing::warn!("Dropping empty line at element {}", index),
            }
        }

        let contents = PlanContents {
            elements,
            rooms: self.rooms.into_iter().map(RoomData::into_room).collect(),
            measurements: self
                .measurements
                .into_iter()
                .map(MeasurementData::into_measurement)
                .collect(),
        };
        PlanDocument::from_parts(contents, grid, self.scale, self.current_tool)
    }
}

impl ElementData {
    pub fn from_element(element: &DrawElement) -> Self {
        match element {
            DrawElement::Line(line) => Self::Line {
                points: line.points().iter().copied().map(PointData::from).collect(),
            },
            DrawElement::Fixture(fixture) => {
                let Point { x, y } = fixture.position;
                match fixture.kind {
                    FixtureKind::Door => Self::Door { x, y },
                    FixtureKind::Window => Self::Window { x, y },
                }
            }
        }
    }

    fn into_element(self) -> Option<DrawElement> {
        match self {
            Self::Line { points } => {
                PolyLine::from_points(points.into_iter().map(Point::from).collect())
                    .map(DrawElement::Line)
            }
            Self::Door { x, y } => Some(Fixture::new(FixtureKind::Door, Point::new(x, y)).into()),
            Self::Window { x, y } => {
                Some(Fixture::new(FixtureKind::Window, Point::new(x, y)).into())
            }
        }
    }
}

impl From<Point> for PointData {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointData> for Point {
    fn from(p: PointData) -> Self {
        Point::new(p.x, p.y)
    }
}

impl RoomData {
    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            x: room.origin.x,
            y: room.origin.y,
            width: i32::try_from(room.width).unwrap_or(i32::MAX),
            height: i32::try_from(room.height).unwrap_or(i32::MAX),
        }
    }

    /// Negative sizes from hand-edited data are normalized like a drag.
    fn into_room(self) -> Room {
        let a = Point::new(self.x, self.y);
        let b = Point::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        );
        Room::from_corners(self.name, a, b)
    }
}

impl MeasurementData {
    pub fn from_measurement(m: &Measurement) -> Self {
        Self {
            x1: m.from.x,
            y1: m.from.y,
            x2: m.to.x,
            y2: m.to.y,
            value: m.value.clone(),
        }
    }

    fn into_measurement(self) -> Measurement {
        Measurement::new(
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
            self.value,
        )
    }
}

/// Serializes a plan to its `plan_data` string.
pub fn serialize(doc: &PlanDocument) -> Result<String, PlanError> {
    serde_json::to_string(&PlanFile::from_document(doc)).map_err(|e| PlanError::MalformedPlan {
        reason: e.to_string(),
    })
}

/// Parses a `plan_data` string, reporting why it could not be read.
pub fn try_deserialize(data: &str) -> Result<PlanDocument, PlanError> {
    let file: PlanFile = serde_json::from_str(data).map_err(|e| PlanError::MalformedPlan {
        reason: e.to_string(),
    })?;
    Ok(file.into_document())
}

/// Parses a `plan_data` string. Unreadable input yields an empty plan.
pub fn deserialize(data: &str) -> PlanDocument {
    match try_deserialize(data) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Ignoring unreadable plan data: {}", e);
            PlanDocument::new()
        }
    }
}
