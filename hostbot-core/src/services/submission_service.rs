// File: src/services/submission_service.rs

use std::sync::Arc;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use hostbot_common::models::{
    FailureKind, FormSchema, FormState, IntakeConfig, Notification, SubmissionState, SubmitOutcome,
};
use hostbot_common::traits::Notifier;
use crate::http::{DefaultHttpClient, HttpClient};
use crate::services::response::{interpret_response, IntakeVerdict};
use crate::services::validator::validate;
use crate::Error;

/// Reason recorded when an attempt is abandoned before the response arrived
/// (the submit future was dropped, or the transport panicked).
pub const INTERRUPTED_REASON: &str = "Submission interrupted";

/// Drives one form's submissions against the intake service.
///
/// Owns the `SubmissionState`. At most one request is in flight at a time:
/// the Idle/Failed/Succeeded -> InFlight transition is a single check-and-set
/// under the state lock, and `submit` calls that lose the race return
/// `SubmitOutcome::Ignored` without touching anything.
pub struct SubmissionService {
    schema: FormSchema,
    endpoint: String,
    http: Arc<dyn HttpClient>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SubmissionState>,
}

/// What the synchronous part of `submit` decided.
enum Claim {
    AlreadyInFlight,
    Invalid(String),
    Post(Value),
}

impl SubmissionService {
    pub fn new(
        schema: FormSchema,
        endpoint: impl Into<String>,
        http: Arc<dyn HttpClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            schema,
            endpoint: endpoint.into(),
            http,
            notifier,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Builds a service backed by the reqwest transport.
    pub fn from_config(config: &IntakeConfig, notifier: Arc<dyn Notifier>) -> Result<Self, Error> {
        let endpoint = config.endpoint_url()?;
        let http = DefaultHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(
            FormSchema::for_kind(config.schema),
            endpoint.as_str(),
            Arc::new(http),
            notifier,
        ))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> SubmissionState {
        self.state.lock().clone()
    }

    /// A field was edited: a settled attempt goes back to `Idle`.
    /// An in-flight attempt is left alone.
    pub fn acknowledge_edit(&self) {
        let mut state = self.state.lock();
        if state.is_settled() {
            debug!("Field edited after {:?}; back to Idle", *state);
            *state = SubmissionState::Idle;
        }
    }

    /// Runs one submission attempt for the given form values.
    ///
    /// Invalid input fails locally without a request. Valid input is POSTed
    /// once; on acceptance the form is cleared, on any failure it is left as
    /// the user entered it. Exactly one notification is emitted unless the
    /// call is ignored.
    pub async fn submit(&self, form: &RwLock<FormState>) -> SubmitOutcome {
        let values = form.read().await.clone();

        let claim = {
            let mut state = self.state.lock();
            if state.is_in_flight() {
                Claim::AlreadyInFlight
            } else {
                let validation = validate(&self.schema, &values);
                match validation.message(&self.schema) {
                    Some(message) => {
                        *state = SubmissionState::Failed {
                            kind: FailureKind::LocalValidation,
                            reason: message.clone(),
                        };
                        Claim::Invalid(message)
                    }
                    None => {
                        *state = SubmissionState::InFlight;
                        Claim::Post(self.build_payload(&values))
                    }
                }
            }
        };

        let payload = match claim {
            Claim::AlreadyInFlight => {
                debug!("Submit ignored: a request is already in flight");
                return SubmitOutcome::Ignored;
            }
            Claim::Invalid(message) => {
                info!("Submission blocked locally: {}", message);
                self.notifier.notify(Notification::error(message.clone()));
                return SubmitOutcome::Failed {
                    kind: FailureKind::LocalValidation,
                    reason: message,
                };
            }
            Claim::Post(payload) => payload,
        };

        let attempt = Uuid::new_v4();
        let guard = InFlightGuard::new(&self.state, attempt);
        info!(
            "Submitting {} field(s) to {} (attempt {})",
            self.schema.fields.len(), self.endpoint, attempt
        );

        let result = self.http.post_json(&self.endpoint, &payload).await;
        let verdict = interpret_response(result);

        match verdict.failure() {
            None => {
                form.write().await.reset();
                guard.settle(SubmissionState::Succeeded);
                if let IntakeVerdict::Accepted { message: Some(m) } = &verdict {
                    debug!("Intake service says: {}", m);
                }
                info!("Attempt {} accepted; form cleared", attempt);
                self.notifier.notify(Notification::submitted());
                SubmitOutcome::Succeeded
            }
            Some((kind, reason)) => {
                let reason = reason.to_string();
                guard.settle(SubmissionState::Failed { kind, reason: reason.clone() });
                warn!("Attempt {} failed ({}): {}", attempt, kind, reason);
                self.notifier.notify(Notification::submission_failed(reason.clone()));
                SubmitOutcome::Failed { kind, reason }
            }
        }
    }

    /// One entry per schema field, keyed by field name. Values are trimmed;
    /// empty optional fields go out as `""`.
    fn build_payload(&self, values: &FormState) -> Value {
        let mut body = Map::new();
        let mut shown = Vec::with_capacity(self.schema.fields.len());
        for field in &self.schema.fields {
            let value = values.get(&field.name).unwrap_or_default().trim();
            if field.kind.is_secret() {
                shown.push(format!("{}=<redacted>", field.name));
            } else {
                shown.push(format!("{}={:?}", field.name, value));
            }
            body.insert(field.name.clone(), Value::String(value.to_string()));
        }
        debug!("Payload: {}", shown.join(", "));
        Value::Object(body)
    }
}

/// Makes sure the state never stays `InFlight` once the attempt's future is
/// gone, whether it finished, was dropped, or unwound.
struct InFlightGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    attempt: Uuid,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(state: &'a Mutex<SubmissionState>, attempt: Uuid) -> Self {
        Self { state, attempt, settled: false }
    }

    fn settle(mut self, outcome: SubmissionState) {
        *self.state.lock() = outcome;
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.state.lock();
        if state.is_in_flight() {
            warn!("Attempt {} abandoned before a response arrived", self.attempt);
            *state = SubmissionState::Failed {
                kind: FailureKind::Transport,
                reason: INTERRUPTED_REASON.to_string(),
            };
        }
    }
}
