// File: src/form.rs

use tokio::sync::RwLock;
use hostbot_common::models::{FormSchema, FormState, SubmissionState, SubmitOutcome};
use crate::services::SubmissionService;
use crate::Error;

/// One form instance: the field values the user is typing plus the
/// controller that submits them.
///
/// Only the form writes its values; the controller's single write is the
/// reset after an accepted submission.
pub struct IntakeForm {
    values: RwLock<FormState>,
    controller: SubmissionService,
}

impl IntakeForm {
    pub fn new(controller: SubmissionService) -> Self {
        Self {
            values: RwLock::new(FormState::new(controller.schema())),
            controller,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        self.controller.schema()
    }

    /// Sets one field. Any edit starts a fresh cycle after a settled attempt.
    pub async fn edit(&self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        self.values.write().await.set(name, value)?;
        self.controller.acknowledge_edit();
        Ok(())
    }

    pub async fn value(&self, name: &str) -> Option<String> {
        self.values.read().await.get(name).map(str::to_string)
    }

    pub async fn snapshot(&self) -> FormState {
        self.values.read().await.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.controller.submit(&self.values).await
    }
}
