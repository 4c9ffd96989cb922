// src/lib.rs

pub mod http;
pub mod form;
pub mod services;

pub use hostbot_common::error::Error;
pub use hostbot_common::models;
pub use hostbot_common::traits;
pub use http::{DefaultHttpClient, HttpClient};
pub use form::IntakeForm;
pub use services::SubmissionService;
