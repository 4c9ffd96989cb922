// File: src/services/mod.rs

pub mod validator;
pub mod response;
pub mod notifier;
pub mod submission_service;

pub use validator::{validate, ValidationResult};
pub use response::{interpret_response, IntakeVerdict};
pub use notifier::TracingNotifier;
pub use submission_service::SubmissionService;
