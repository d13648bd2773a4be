//! Survey records that carry a `plan_data` field.
//!
//! The plan editor never owns the survey itself; it reads the serialized
//! plan on open and hands a new string back on save. [`SurveyRecord`] is
//! that seam. [`JsonSurveyRecord`] keeps a whole record as a JSON object
//! and is what the command-line tools work with.

use serde_json::{Map, Value};
use siteplan_core::{Error, Result, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the field holding the serialized plan.
pub const PLAN_DATA_FIELD: &str = "plan_data";

/// External record owning the serialized plan.
pub trait SurveyRecord {
    /// Stored plan, `None` when the survey has no sketch yet.
    fn plan_data(&self) -> Option<&str>;

    /// Replaces the stored plan.
    fn set_plan_data(&mut self, data: String) -> Result<()>;
}

/// Survey record held as a JSON object, optionally backed by a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSurveyRecord {
    fields: Map<String, Value>,
    path: Option<PathBuf>,
}

impl JsonSurveyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a record from JSON text. The top level must be an object.
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => Ok(Self { fields, path: None }),
            Ok(_) => Err(Error::other("survey record must be a JSON object")),
            Err(e) => Err(Error::other(format!("invalid survey record: {e}"))),
        }
    }

    /// Loads a record from disk and remembers the path for [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::MissingRecord {
                id: path.display().to_string(),
            }
            .into());
        }
        let text = fs::read_to_string(path)?;
        let mut record = Self::from_json(&text)?;
        record.path = Some(path.to_path_buf());
        tracing::info!("Loaded survey record from {}", path.display());
        Ok(record)
    }

    /// Writes the record back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| StoreError::Write {
            reason: "record has no backing file".to_string(),
        })?;
        self.save_to(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.fields).map_err(|e| StoreError::Write {
            reason: e.to_string(),
        })?;
        fs::write(path, text).map_err(|e| StoreError::Write {
            reason: format!("{}: {}", path.display(), e),
        })?;
        tracing::info!("Saved survey record to {}", path.display());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Any other field of the record.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

impl SurveyRecord for JsonSurveyRecord {
    fn plan_data(&self) -> Option<&str> {
        self.fields
            .get(PLAN_DATA_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn set_plan_data(&mut self, data: String) -> Result<()> {
        self.fields
            .insert(PLAN_DATA_FIELD.to_string(), Value::String(data));
        Ok(())
    }
}
