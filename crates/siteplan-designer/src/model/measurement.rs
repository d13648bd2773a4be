use super::Point;

/// Dimension annotation between two points.
///
/// `value` is the caller's label, displayed with an `m` suffix. The unit is
/// not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub from: Point,
    pub to: Point,
    pub value: String,
}

impl Measurement {
    pub fn new(from: Point, to: Point, value: impl Into<String>) -> Self {
        Self {
            from,
            to,
            value: value.into(),
        }
    }

    /// Length of the segment in pixels.
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    /// Label position: the segment midpoint.
    pub fn label_anchor(&self) -> (f64, f64) {
        self.from.midpoint(&self.to)
    }

    /// Text drawn on the plan.
    pub fn display_label(&self) -> String {
        format!("{}m", self.value)
    }
}
