//! Open/save against a survey record.

use siteplan_core::Result;

use super::EditorContext;
use crate::serialization;
use crate::survey::SurveyRecord;

impl EditorContext {
    /// Loads the record's plan, or starts an empty one when it has none.
    ///
    /// Unreadable plan data is logged and replaced by an empty plan with
    /// the editor's grid and scale.
    pub fn open(&mut self, record: &dyn SurveyRecord) {
        self.reset();
        if let Some(data) = record.plan_data() {
            match serialization::try_deserialize(data) {
                Ok(doc) => self.document = doc,
                Err(e) => tracing::warn!("Ignoring unreadable plan data: {}", e),
            }
            tracing::info!(
                "Opened plan: {} elements, {} rooms, {} measurements",
                self.document.elements().len(),
                self.document.rooms().len(),
                self.document.measurements().len()
            );
        }
    }

    /// Current plan as a `plan_data` string.
    pub fn plan_data(&self) -> Result<String> {
        Ok(serialization::serialize(&self.document)?)
    }

    /// Writes the plan into the record. On failure the plan stays as it
    /// was so the save can be retried.
    pub fn save(&self, record: &mut dyn SurveyRecord) -> Result<()> {
        let data = self.plan_data()?;
        if let Err(e) = record.set_plan_data(data) {
            tracing::warn!("Saving plan failed: {}", e);
            return Err(e);
        }
        tracing::info!("Plan saved");
        Ok(())
    }
}
