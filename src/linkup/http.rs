//! Linkup HTTP transport
//!
//! One POST per item: API key header, JSON body, fixed timeout.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::credentials::mask_credential;
use crate::config::LinkupConfig;
use crate::resource::Payload;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Linkup request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },
}

/// A fully composed request, kept around so it can be echoed back
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Payload,
    pub timeout: Duration,
}

impl RequestOptions {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Headers as a JSON object with the API key masked
    pub fn masked_headers(&self) -> Value {
        let headers: Map<String, Value> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let value = if k.eq_ignore_ascii_case(API_KEY_HEADER) {
                    mask_credential(v)
                } else {
                    v.clone()
                };
                (k.clone(), Value::String(value))
            })
            .collect();
        Value::Object(headers)
    }
}

/// Compose the request for `endpoint` against the configured base URL
pub fn build_request_options(
    config: &LinkupConfig,
    endpoint: &str,
    api_key: &str,
    body: Payload,
) -> RequestOptions {
    RequestOptions {
        method: "POST".to_string(),
        url: format!("{}{}", config.base_url.trim_end_matches('/'), endpoint),
        headers: vec![
            (API_KEY_HEADER.to_string(), api_key.to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), config.user_agent.clone()),
        ],
        body,
        timeout: config.timeout,
    }
}

/// Sends a composed request and returns the decoded response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestOptions) -> Result<Value>;
}

/// reqwest-backed transport
pub struct LinkupHttpClient {
    http_client: Client,
}

impl LinkupHttpClient {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for LinkupHttpClient {
    async fn send(&self, options: &RequestOptions) -> Result<Value> {
        let mut request = match options.method.as_str() {
            "GET" => self.http_client.get(&options.url),
            "POST" => self.http_client.post(&options.url),
            _ => return Err(anyhow!("Unsupported HTTP method: {}", options.method)),
        };

        for (name, value) in &options.headers {
            request = request.header(name, value);
        }

        debug!(
            "Sending {} request to {}, api_key: {}",
            options.method,
            options.url,
            mask_credential(options.header(API_KEY_HEADER).unwrap_or_default())
        );

        let response = request
            .json(&options.body)
            .timeout(options.timeout)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("Response status: {}", status);
        trace!("Response body (first 2000 chars): {}", preview(&text, 2000));

        if !status.is_success() {
            warn!(
                "Linkup request failed: status={}, body={}",
                status,
                preview(&text, 500)
            );
            return Err(RequestError::Status { status, body: text }.into());
        }

        Ok(decode_body(text))
    }
}

/// JSON bodies are parsed; anything else is returned as a string
pub fn decode_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}

fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Payload {
        let mut body = Payload::new();
        body.insert("country".to_string(), json!("FR"));
        body
    }

    #[test]
    fn test_build_request_options() {
        let config = LinkupConfig::default();
        let options = build_request_options(&config, "/profile/me", "secret-api-key", body());

        assert_eq!(options.method, "POST");
        assert_eq!(options.url, "https://api.linkupapi.com/v1/profile/me");
        assert_eq!(options.header("x-api-key"), Some("secret-api-key"));
        assert_eq!(options.header("content-type"), Some("application/json"));
        assert_eq!(options.header("User-Agent"), Some(config.user_agent.as_str()));
        assert_eq!(options.timeout, Duration::from_millis(30000));
        assert_eq!(options.body.get("country"), Some(&json!("FR")));
    }

    #[test]
    fn test_trailing_slash_base_url() {
        let config = LinkupConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..LinkupConfig::default()
        };
        let options = build_request_options(&config, "/auth/login", "k", Payload::new());
        assert_eq!(options.url, "http://localhost:8080/v1/auth/login");
    }

    #[test]
    fn test_masked_headers() {
        let options =
            build_request_options(&LinkupConfig::default(), "/x", "abcd1234efgh", Payload::new());
        let headers = options.masked_headers();
        assert_eq!(headers["x-api-key"], "abcd...efgh");
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(r#"{"ok": true}"#.to_string()), json!({"ok": true}));
        assert_eq!(decode_body("plain text".to_string()), json!("plain text"));
        assert_eq!(decode_body("[1,2]".to_string()), json!([1, 2]));
    }

    #[test]
    fn test_status_error_message() {
        let err = RequestError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Linkup request failed (401 Unauthorized): invalid key"
        );
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("héllo", 2), "hé");
    }
}
