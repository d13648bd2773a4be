use super::Point;

/// Width of a door/window stamp in pixels.
pub const FIXTURE_WIDTH: i32 = 20;
/// Height of a door/window stamp in pixels.
pub const FIXTURE_HEIGHT: i32 = 4;

/// Freehand stroke built point by point during a drag.
///
/// Always holds at least one point. A single point draws nothing until the
/// stroke is extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyLine {
    points: Vec<Point>,
}

impl PolyLine {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Builds a stroke from stored points. Returns `None` for an empty list.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Point {
        // Non-empty by construction.
        self.points[self.points.len() - 1]
    }

    /// Appends `point` unless it repeats the last one. Returns whether it was added.
    pub fn extend(&mut self, point: Point) -> bool {
        if self.last() == point {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Whether the stroke has a visible segment.
    pub fn is_renderable(&self) -> bool {
        self.points.len() > 1
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        if self.points.len() == 1 {
            return p.distance_to(&self.points[0]);
        }
        self.points
            .windows(2)
            .map(|seg| p.distance_to_segment(&seg[0], &seg[1]))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let first = self.points[0];
        self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
        )
    }
}

/// Kind of a fixture stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Door,
    Window,
}

impl FixtureKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}

/// Door or window stamped at a single point.
///
/// `position` is the top-left corner of the drawn icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub kind: FixtureKind,
    pub position: Point,
}

impl Fixture {
    pub fn new(kind: FixtureKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.position.x,
            self.position.y,
            self.position.x.saturating_add(FIXTURE_WIDTH),
            self.position.y.saturating_add(FIXTURE_HEIGHT),
        )
    }

    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        let (px, py) = (f64::from(p.x), f64::from(p.y));
        px >= f64::from(x1) - tolerance
            && px <= f64::from(x2) + tolerance
            && py >= f64::from(y1) - tolerance
            && py <= f64::from(y2) + tolerance
    }
}

/// An entry of the plan's z-ordered element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawElement {
    Line(PolyLine),
    Fixture(Fixture),
}

impl DrawElement {
    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        match self {
            Self::Line(line) => line.distance_to(p) <= tolerance,
            Self::Fixture(fixture) => fixture.contains_point(p, tolerance),
        }
    }

    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        match self {
            Self::Line(line) => line.bounds(),
            Self::Fixture(fixture) => fixture.bounds(),
        }
    }

    pub fn as_line(&self) -> Option<&PolyLine> {
        match self {
            Self::Line(line) => Some(line),
            Self::Fixture(_) => None,
        }
    }
}

impl From<PolyLine> for DrawElement {
    fn from(line: PolyLine) -> Self {
        Self::Line(line)
    }
}

impl From<Fixture> for DrawElement {
    fn from(fixture: Fixture) -> Self {
        Self::Fixture(fixture)
    }
}
