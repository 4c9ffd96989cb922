//! HTTP Client abstraction layer for the intake endpoint
//!
//! The submission controller never talks to `reqwest` directly. It goes
//! through [`HttpClient`], which lets tests substitute a fake transport
//! (blocking, failing, recording) without a network.
//!
//! The default implementation wraps reqwest and reports the status code and
//! the raw body text. Interpreting that body is the controller's job, so a
//! non-2xx status is *not* an error at this layer; only a missing response is.
//!
//! # Example Usage:
//! ``
//! use hostbot_core::http::{HttpClient, DefaultHttpClient};
//!
//! let client = DefaultHttpClient::new();
//! let response = client.post_json(url, &serde_json::json!({ "token": "..." })).await?;
//! ``

use std::time::Duration;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use hostbot_common::models::HttpResponse;
use crate::Error;

/// A generic trait for issuing the intake POST.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, Error>;
}

#[derive(Clone)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Client with an overall request timeout. An elapsed timeout surfaces as
    /// `Error::Http`, same as any other transport failure.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for DefaultHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, Error> {
        let response = self.client
            .post(url)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("Intake endpoint answered with status {} ({} bytes)", status, text.len());

        Ok(HttpResponse::new(status, text))
    }
}
