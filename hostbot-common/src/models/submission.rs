// File: hostbot-common/src/models/submission.rs

use std::fmt;
use serde::{Deserialize, Serialize};

/// Why an attempt ended in `Failed`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Required field(s) were empty; nothing was sent.
    LocalValidation,
    /// The intake service answered and declined.
    RemoteRejection,
    /// No usable response: network error, timeout or a body that is not JSON.
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::LocalValidation => write!(f, "local-validation"),
            FailureKind::RemoteRejection => write!(f, "remote-rejection"),
            FailureKind::Transport => write!(f, "transport"),
        }
    }
}

/// Lifecycle of the current submission attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed { kind: FailureKind, reason: String },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// `Succeeded` or `Failed`: settled for this attempt, re-enterable afterwards.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed { .. })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }
}

/// What a single `submit` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed { kind: FailureKind, reason: String },
    /// Another attempt was already in flight; nothing happened.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// Raw answer from the intake endpoint, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
