// File: src/services/response.rs

use serde_json::Value;
use tracing::{error, warn};
use hostbot_common::models::{FailureKind, HttpResponse};
use crate::Error;

/// Reason used when the service declines without a usable `message`.
pub const GENERIC_REJECTION: &str = "Request failed";
/// Reason used when no structured answer is available at all.
pub const GENERIC_TRANSPORT_FAILURE: &str = "Server error";

/// How the controller should settle an attempt, given what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeVerdict {
    Accepted { message: Option<String> },
    Rejected { reason: String },
    Unreachable { reason: String },
}

impl IntakeVerdict {
    /// `(kind, reason)` for the failing verdicts.
    pub fn failure(&self) -> Option<(FailureKind, &str)> {
        match self {
            IntakeVerdict::Accepted { .. } => None,
            IntakeVerdict::Rejected { reason } => Some((FailureKind::RemoteRejection, reason)),
            IntakeVerdict::Unreachable { reason } => Some((FailureKind::Transport, reason)),
        }
    }
}

/// Classifies the outcome of the intake POST.
///
/// Accepted only with a 2xx status *and* a JSON body whose `success` is the
/// boolean `true`. Anything else that parses as JSON is a rejection, with the
/// body's `message` as reason when it is a non-empty string. A missing
/// response or a body that is not JSON is a transport failure.
pub fn interpret_response(result: Result<HttpResponse, Error>) -> IntakeVerdict {
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            error!("Intake request did not complete: {}", e);
            return IntakeVerdict::Unreachable { reason: GENERIC_TRANSPORT_FAILURE.to_string() };
        }
    };

    let body: Value = match serde_json::from_str(&response.body) {
        Ok(v) => v,
        Err(e) => {
            error!("Intake response (status {}) is not JSON: {}", response.status, e);
            return IntakeVerdict::Unreachable { reason: GENERIC_TRANSPORT_FAILURE.to_string() };
        }
    };

    let message = body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string);

    let accepted = response.is_success_status()
        && matches!(body.get("success"), Some(Value::Bool(true)));

    if accepted {
        IntakeVerdict::Accepted { message }
    } else {
        warn!("Intake service declined the request (status {})", response.status);
        IntakeVerdict::Rejected {
            reason: message.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(status: u16, body: &str) -> IntakeVerdict {
        interpret_response(Ok(HttpResponse::new(status, body)))
    }

    #[test]
    fn success_requires_status_and_flag() {
        assert_eq!(verdict(200, r#"{"success":true}"#), IntakeVerdict::Accepted { message: None });
        assert_eq!(
            verdict(201, r#"{"success":true,"message":"queued"}"#),
            IntakeVerdict::Accepted { message: Some("queued".into()) }
        );
        assert_eq!(
            verdict(400, r#"{"success":true}"#),
            IntakeVerdict::Rejected { reason: GENERIC_REJECTION.into() }
        );
    }

    #[test]
    fn non_boolean_success_is_a_rejection() {
        for body in [r#"{"success":"true"}"#, r#"{"success":1}"#, r#"{}"#, r#"[]"#, "null"] {
            assert_eq!(
                verdict(200, body),
                IntakeVerdict::Rejected { reason: GENERIC_REJECTION.into() },
                "body {body}"
            );
        }
    }

    #[test]
    fn rejection_uses_service_message_when_present() {
        assert_eq!(
            verdict(200, r#"{"success":false,"message":"Invalid token"}"#),
            IntakeVerdict::Rejected { reason: "Invalid token".into() }
        );
        assert_eq!(
            verdict(429, r#"{"message":"Slow down"}"#),
            IntakeVerdict::Rejected { reason: "Slow down".into() }
        );
        assert_eq!(
            verdict(200, r#"{"success":false,"message":""}"#),
            IntakeVerdict::Rejected { reason: GENERIC_REJECTION.into() }
        );
    }

    #[test]
    fn unparsable_body_is_a_transport_failure() {
        let v = verdict(500, "<html>Internal Server Error</html>");
        assert_eq!(v, IntakeVerdict::Unreachable { reason: GENERIC_TRANSPORT_FAILURE.into() });
        assert_eq!(v.failure(), Some((FailureKind::Transport, GENERIC_TRANSPORT_FAILURE)));

        let v = interpret_response(Err(Error::Transport("connection refused".into())));
        assert_eq!(v.failure(), Some((FailureKind::Transport, GENERIC_TRANSPORT_FAILURE)));
    }
}
