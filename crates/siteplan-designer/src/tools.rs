//! Editor tools.

use serde::{Deserialize, Serialize};
use siteplan_core::PlanError;
use std::fmt;
use std::str::FromStr;

use crate::model::FixtureKind;

/// Tool selected in the plan toolbar. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pick an element or room
    #[default]
    Select,
    /// Freehand stroke
    Draw,
    /// Drag out a named room
    Room,
    /// Dimension annotation
    Measure,
    /// Stamp a door
    Door,
    /// Stamp a window
    Window,
}

impl Tool {
    /// All tools, in toolbar order.
    pub const ALL: [Tool; 6] = [
        Self::Select,
        Self::Draw,
        Self::Room,
        Self::Measure,
        Self::Door,
        Self::Window,
    ];

    /// Identifier used in persisted plans.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Draw => "draw",
            Self::Room => "room",
            Self::Measure => "measure",
            Self::Door => "door",
            Self::Window => "window",
        }
    }

    /// Toolbar tooltip.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Select => "Sélectionner",
            Self::Draw => "Dessiner",
            Self::Room => "Ajouter pièce",
            Self::Measure => "Coter",
            Self::Door => "Porte",
            Self::Window => "Fenêtre",
        }
    }

    /// Fixture stamped by this tool, for the single-click tools.
    pub fn fixture_kind(&self) -> Option<FixtureKind> {
        match self {
            Self::Door => Some(FixtureKind::Door),
            Self::Window => Some(FixtureKind::Window),
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| PlanError::UnknownTool {
                name: s.to_string(),
            })
    }
}
