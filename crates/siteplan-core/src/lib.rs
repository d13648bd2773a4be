//! # SitePlan Core
//!
//! Core types shared by the SitePlan crates: the error taxonomy, the plan
//! scale and editor-wide defaults.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{Error, ExportError, PlanError, Result, StoreError};
pub use units::PlanScale;
