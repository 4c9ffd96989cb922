// File: hostbot-core/tests/test_utils/mod.rs
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;
use hostbot_core::{Error, HttpClient, IntakeForm, SubmissionService};
use hostbot_core::models::{FormSchema, HttpResponse, Notification};
use hostbot_core::traits::Notifier;

pub const TEST_ENDPOINT: &str = "http://intake.test/token";

/// Keeps every notification so tests can count and inspect them.
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// Answers every request with the same canned result and records the bodies.
pub struct ScriptedHttpClient {
    reply: Box<dyn Fn() -> Result<HttpResponse, Error> + Send + Sync>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl ScriptedHttpClient {
    pub fn replying(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::with(move || Ok(HttpResponse::new(status, body.clone())))
    }

    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::with(move || Err(Error::Transport(message.clone())))
    }

    fn with(reply: impl Fn() -> Result<HttpResponse, Error> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push((url.to_string(), body.clone()));
        (self.reply)()
    }
}

/// Holds every request until `release` is signalled, so a test can observe
/// the controller while it is in flight.
pub struct GatedHttpClient {
    pub started: Notify,
    pub release: Notify,
    calls: AtomicUsize,
    reply: HttpResponse,
}

impl GatedHttpClient {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
            reply: HttpResponse::new(status, body),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for GatedHttpClient {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<HttpResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}

pub fn build_form(
    schema: FormSchema,
    http: Arc<dyn HttpClient>,
    notifier: Arc<RecordingNotifier>,
) -> IntakeForm {
    IntakeForm::new(SubmissionService::new(schema, TEST_ENDPOINT, http, notifier))
}
