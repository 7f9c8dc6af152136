use anyhow::{Context, Result};
use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::config::Config;

const EMPTY_OBJECT: &[u8] = b"{}";

/// Failure of a single upstream basket call
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Pantry answered with a non-2xx status
    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),
    /// Connection, TLS, or body read failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Shareable Pantry client for use across async handlers
///
/// Cloning is cheap: the underlying `reqwest::Client` keeps its connection
/// pool behind an `Arc`.
#[derive(Clone)]
pub struct PantryClient {
    http: Client,
    base_url: Arc<str>,
}

impl PantryClient {
    /// Create a new Pantry client from configuration
    ///
    /// No request timeout is configured; calls wait as long as the
    /// upstream and the HTTP client defaults allow.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create Pantry HTTP client")?;

        let base_url = config.basket_base_url();
        tracing::info!("Forwarding basket requests to: {}", base_url);

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Target URL for a basket. The name is inserted as given.
    pub fn basket_url(&self, basket_name: &str) -> String {
        format!("{}/{}", self.base_url, basket_name)
    }

    /// Issue exactly one upstream call for `basket_name`
    ///
    /// A body, when present, is sent verbatim as `application/json`. An
    /// empty body goes out as `{}`.
    ///
    /// # Returns
    /// * `Ok(json)` - upstream answered 2xx; a body that is not JSON comes
    ///   back as a JSON string holding the raw text
    /// * `Err(UpstreamError::Status)` - upstream answered non-2xx
    /// * `Err(UpstreamError::Transport)` - the call itself failed
    pub async fn send(
        &self,
        method: Method,
        basket_name: &str,
        body: Option<Bytes>,
    ) -> Result<JsonValue, UpstreamError> {
        let url = self.basket_url(basket_name);

        let mut request = self.http.request(method, url.as_str());
        if let Some(body) = body {
            let body = if body.is_empty() {
                Bytes::from_static(EMPTY_OBJECT)
            } else {
                body
            };
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Upstream {} answered {}", url, status);
            return Err(UpstreamError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(decode_body(&bytes))
    }
}

fn decode_body(bytes: &[u8]) -> JsonValue {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(bytes).into_owned()))
}
