// File: hostbot-common/src/models/config.rs

use std::time::Duration;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::error::Error;
use crate::models::schema::SchemaKind;

pub const DEFAULT_INTAKE_ENDPOINT: &str = "https://api.mintgram.live/token";

/// Where and what the form submits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub endpoint: String,
    pub schema: SchemaKind,
    /// Transport-level timeout. `None` waits for the network stack to give up.
    pub request_timeout: Option<Duration>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_INTAKE_ENDPOINT.to_string(),
            schema: SchemaKind::default(),
            request_timeout: None,
        }
    }
}

impl IntakeConfig {
    /// Parses the endpoint and makes sure it is something we can POST to.
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "endpoint must be http or https, got '{}'", other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_intake() {
        let cfg = IntakeConfig::default();
        assert_eq!(cfg.endpoint_url().unwrap().as_str(), DEFAULT_INTAKE_ENDPOINT);
        assert_eq!(cfg.schema, SchemaKind::Minimal);
        assert!(cfg.request_timeout.is_none());
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        let cfg = IntakeConfig {
            endpoint: "ftp://example.com/token".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.endpoint_url(), Err(Error::Config(_))));

        let cfg = IntakeConfig {
            endpoint: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.endpoint_url(), Err(Error::InvalidUrl(_))));
    }
}
