// File: hostbot-common/src/models/mod.rs
pub mod schema;
pub mod form;
pub mod submission;
pub mod notification;
pub mod config;

pub use schema::{FieldKind, FormField, FormSchema, SchemaKind};
pub use form::FormState;
pub use submission::{FailureKind, HttpResponse, SubmissionState, SubmitOutcome};
pub use notification::{Notification, NotificationKind};
pub use config::IntakeConfig;
