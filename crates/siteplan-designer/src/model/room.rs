use super::Point;

/// Named rectangular room.
///
/// `origin` is the top-left corner. The size is stored unsigned, so a room
/// dragged in any direction ends up with the same normalized rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Room {
    pub fn new(name: impl Into<String>, origin: Point, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            origin,
            width,
            height,
        }
    }

    /// Room spanning two opposite corners given in any order.
    pub fn from_corners(name: impl Into<String>, a: Point, b: Point) -> Self {
        Self {
            name: name.into(),
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.origin.x,
            self.origin.y,
            self.origin.x.saturating_add_unsigned(self.width),
            self.origin.y.saturating_add_unsigned(self.height),
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

    /// Area in square pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
