//! Plan scale
//!
//! The display/print scale chosen in the editor toolbar. It is cosmetic:
//! stored coordinates stay in canvas pixels whatever the scale.

use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display scale of a plan
///
/// Persisted as its denominator (`50`, `100`, `200`). Denominators that
/// are not supported read back as the default 1:100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum PlanScale {
    /// 1:50
    OneTo50,
    /// 1:100
    #[default]
    OneTo100,
    /// 1:200
    OneTo200,
}

impl PlanScale {
    /// All selectable scales, in toolbar order.
    pub const ALL: [PlanScale; 3] = [Self::OneTo50, Self::OneTo100, Self::OneTo200];

    /// Denominator of the ratio.
    pub fn denominator(self) -> u32 {
        match self {
            Self::OneTo50 => 50,
            Self::OneTo100 => 100,
            Self::OneTo200 => 200,
        }
    }

    /// Looks up a scale by denominator.
    pub fn from_denominator(value: u32) -> Option<Self> {
        match value {
            50 => Some(Self::OneTo50),
            100 => Some(Self::OneTo100),
            200 => Some(Self::OneTo200),
            _ => None,
        }
    }
}

impl From<u32> for PlanScale {
    fn from(value: u32) -> Self {
        Self::from_denominator(value).unwrap_or_default()
    }
}

impl From<PlanScale> for u32 {
    fn from(scale: PlanScale) -> Self {
        scale.denominator()
    }
}

impl fmt::Display for PlanScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.denominator())
    }
}

impl FromStr for PlanScale {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("1:").unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::from_denominator)
            .ok_or_else(|| PlanError::UnknownScale {
                value: s.to_string(),
            })
    }
}
