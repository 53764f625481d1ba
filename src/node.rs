//! Per-item execution loop
//!
//! Every input item yields exactly one output item, in input order. A
//! failure on one item is recorded on that item and never stops the batch.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::LinkupConfig;
use crate::linkup::credentials::{load_credentials, CredentialStore, EnvCredentialStore};
use crate::linkup::http::{build_request_options, LinkupHttpClient, RequestOptions, Transport};
use crate::resource::{
    build_request_body, default_operation, default_resource, endpoint_for, select_fields,
    AdvancedOptions, FieldBag,
};

const ADVANCED_OPTIONS: &str = "additionalFields";

/// One output item handed back to the host
#[derive(Debug, Clone, PartialEq)]
pub struct NodeItem {
    pub json: Value,
    /// Index of the input item this result belongs to
    pub paired_item: usize,
}

impl NodeItem {
    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some() && self.json.get("_meta").is_none()
    }
}

/// Host-side parameter lookup, evaluated per item
pub trait NodeParameters: Send + Sync {
    fn parameter(&self, name: &str, item_index: usize) -> Option<Value>;
}

/// The same parameters for every item
impl NodeParameters for Map<String, Value> {
    fn parameter(&self, name: &str, _item_index: usize) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// One parameter set per item
impl NodeParameters for Vec<Map<String, Value>> {
    fn parameter(&self, name: &str, item_index: usize) -> Option<Value> {
        self.get(item_index).and_then(|params| params.get(name).cloned())
    }
}

/// RFC 3339 UTC timestamp with millisecond precision
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct LinkupNode {
    config: LinkupConfig,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
}

impl LinkupNode {
    pub fn new(
        config: LinkupConfig,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            config,
            transport,
            credentials,
        }
    }

    /// Configuration and credentials from the environment, reqwest transport
    pub fn from_env() -> Result<Self> {
        let config = LinkupConfig::from_env()?;
        let transport = LinkupHttpClient::new()?;
        Ok(Self::new(
            config,
            Arc::new(transport),
            Arc::new(EnvCredentialStore),
        ))
    }

    pub fn config(&self) -> &LinkupConfig {
        &self.config
    }

    /// Process the batch sequentially
    pub async fn execute(&self, items: &[Value], params: &dyn NodeParameters) -> Vec<NodeItem> {
        let mut results = Vec::with_capacity(items.len());

        for index in 0..items.len() {
            let resource = params
                .parameter("resource", index)
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| default_resource().to_string());
            let operation = params
                .parameter("operation", index)
                .and_then(|v| v.as_str().map(str::to_string))
                .or_else(|| default_operation(&resource).map(str::to_string))
                .unwrap_or_default();

            debug!("Item {}: {}/{}", index, resource, operation);

            let json = match self.execute_item(index, &resource, &operation, params).await {
                Ok(json) => json,
                Err(e) => {
                    warn!("Item {} failed ({}/{}): {:#}", index, resource, operation, e);
                    failure_json(&e, &resource, &operation)
                }
            };

            results.push(NodeItem {
                json,
                paired_item: index,
            });
        }

        results
    }

    async fn execute_item(
        &self,
        index: usize,
        resource: &str,
        operation: &str,
        params: &dyn NodeParameters,
    ) -> Result<Value> {
        let credentials = load_credentials(self.credentials.as_ref()).await?;

        let advanced = params
            .parameter(ADVANCED_OPTIONS, index)
            .map(|v| AdvancedOptions::from_fields(&FieldBag::from_value(&v)))
            .unwrap_or_default();
        if advanced != AdvancedOptions::default() {
            // TODO: wire timeout/retryCount into the request once the retry policy is agreed
            debug!(
                "Advanced options not applied: timeout={:?}, retry_count={:?}",
                advanced.timeout_ms, advanced.retry_count
            );
        }

        let fields = select_fields(operation, |name| params.parameter(name, index));
        let body = build_request_body(operation, &fields, &credentials);
        let endpoint = endpoint_for(operation);
        let request = build_request_options(&self.config, endpoint, &credentials.api_key, body);

        let response = self.transport.send(&request).await?;

        Ok(self.success_json(resource, operation, endpoint, &request, response))
    }

    fn success_json(
        &self,
        resource: &str,
        operation: &str,
        endpoint: &str,
        request: &RequestOptions,
        response: Value,
    ) -> Value {
        let mut json = Map::new();
        json.insert(
            "_debug".to_string(),
            json!({
                "requestBody": request.body,
                "requestHeaders": request.masked_headers(),
                "endpoint": endpoint,
                "apiResponse": response,
            }),
        );

        match response {
            Value::Object(fields) => json.extend(fields),
            other => {
                json.insert("data".to_string(), other);
            }
        }

        json.insert(
            "_meta".to_string(),
            json!({
                "resource": resource,
                "operation": operation,
                "timestamp": timestamp(),
                "nodeVersion": self.config.node_version,
            }),
        );

        Value::Object(json)
    }
}

fn failure_json(error: &anyhow::Error, resource: &str, operation: &str) -> Value {
    let message = error.to_string();
    let message = if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    };
    json!({
        "error": message,
        "resource": resource,
        "operation": operation,
        "timestamp": timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NODE_VERSION;
    use crate::linkup::credentials::CredentialRecord;
    use crate::linkup::http::RequestError;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeTransport {
        response: Value,
        fail_with: Option<StatusCode>,
        sent: Mutex<Vec<RequestOptions>>,
    }

    impl FakeTransport {
        fn returning(response: Value) -> Arc<Self> {
            Arc::new(Self {
                response,
                fail_with: None,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: StatusCode) -> Arc<Self> {
            Arc::new(Self {
                response: Value::Null,
                fail_with: Some(status),
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<RequestOptions> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: &RequestOptions) -> Result<Value> {
            self.sent.lock().unwrap().push(request.clone());
            match self.fail_with {
                Some(status) => Err(RequestError::Status {
                    status,
                    body: "rejected".to_string(),
                }
                .into()),
                None => Ok(self.response.clone()),
            }
        }
    }

    /// Fails on the n-th load (1-based)
    struct FlakyStore {
        fail_on: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CredentialStore for FlakyStore {
        async fn load(&self) -> Result<Option<CredentialRecord>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call == self.fail_on {
                return Err(anyhow!("credential store unavailable"));
            }
            Ok(Some(CredentialRecord {
                api_key: Some("abcd1234efgh".to_string()),
                login_token: Some("session-token".to_string()),
                ..Default::default()
            }))
        }
    }

    fn record() -> Arc<CredentialRecord> {
        Arc::new(CredentialRecord {
            api_key: Some("abcd1234efgh".to_string()),
            login_token: Some("session-token".to_string()),
            ..Default::default()
        })
    }

    fn param_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn items(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({"index": i})).collect()
    }

    #[tokio::test]
    async fn test_success_item_shape() {
        let transport = FakeTransport::returning(json!({"status": "success", "data": {"id": 1}}));
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), record());
        let params = param_map(json!({
            "resource": "profile",
            "operation": "extractProfileInfo",
            "profileParams": {"profileUrl": "https://linkedin.com/in/jane"}
        }));

        let results = node.execute(&items(1), &params).await;
        assert_eq!(results.len(), 1);
        let item = &results[0];
        assert_eq!(item.paired_item, 0);
        assert!(!item.is_error());

        let json = &item.json;
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["_debug"]["endpoint"], "/profile/info");
        assert_eq!(json["_debug"]["requestBody"]["linkedin_url"], "https://linkedin.com/in/jane");
        assert_eq!(json["_debug"]["requestBody"]["login_token"], "session-token");
        assert_eq!(json["_debug"]["requestBody"]["country"], "FR");
        assert_eq!(json["_debug"]["requestHeaders"]["x-api-key"], "abcd...efgh");
        assert_eq!(json["_debug"]["apiResponse"]["status"], "success");
        assert_eq!(json["_meta"]["resource"], "profile");
        assert_eq!(json["_meta"]["operation"], "extractProfileInfo");
        assert_eq!(json["_meta"]["nodeVersion"], NODE_VERSION);
        assert!(json["_meta"]["timestamp"].as_str().unwrap().ends_with('Z'));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://api.linkupapi.com/v1/profile/info");
        assert_eq!(sent[0].header("x-api-key"), Some("abcd1234efgh"));
    }

    #[tokio::test]
    async fn test_non_object_response_goes_under_data() {
        let transport = FakeTransport::returning(json!(["a", "b"]));
        let node = LinkupNode::new(LinkupConfig::default(), transport, record());
        let params = param_map(json!({"resource": "post", "operation": "getFeed"}));

        let results = node.execute(&items(1), &params).await;
        assert_eq!(results[0].json["data"], json!(["a", "b"]));
        assert_eq!(results[0].json["_debug"]["apiResponse"], json!(["a", "b"]));
    }

    #[tokio::test]
    async fn test_batch_isolation() {
        let transport = FakeTransport::returning(json!({"ok": true}));
        let store = Arc::new(FlakyStore {
            fail_on: 2,
            calls: AtomicUsize::new(0),
        });
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), store);
        let params = param_map(json!({"resource": "profile", "operation": "getMyProfile"}));

        let results = node.execute(&items(3), &params).await;
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(|r| r.paired_item).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        assert!(!results[0].is_error());
        assert!(results[1].is_error());
        assert!(!results[2].is_error());

        let failed = &results[1].json;
        assert_eq!(failed["error"], "credential store unavailable");
        assert_eq!(failed["resource"], "profile");
        assert_eq!(failed["operation"], "getMyProfile");
        assert!(failed.get("_debug").is_none());

        assert_eq!(transport.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_item() {
        let transport = FakeTransport::returning(json!({}));
        let store = Arc::new(CredentialRecord {
            api_key: Some("__n8n_BLANK_VALUE_abc".to_string()),
            ..Default::default()
        });
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), store);
        let params = param_map(json!({"resource": "profile", "operation": "getMyProfile"}));

        let results = node.execute(&items(2), &params).await;
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(result.is_error());
            assert!(result.json["error"].as_str().unwrap().starts_with("Missing API key"));
        }
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_fails_item() {
        let transport = FakeTransport::failing(StatusCode::BAD_REQUEST);
        let node = LinkupNode::new(LinkupConfig::default(), transport, record());
        let params = param_map(json!({"resource": "post", "operation": "repost"}));

        let results = node.execute(&items(1), &params).await;
        assert!(results[0].is_error());
        assert_eq!(
            results[0].json["error"],
            "Linkup request failed (400 Bad Request): rejected"
        );
        assert!(results[0].json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_operation_targets_sentinel_endpoint() {
        let transport = FakeTransport::returning(json!({}));
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), record());
        let params = param_map(json!({"resource": "profile", "operation": "teleport"}));

        node.execute(&items(1), &params).await;
        let sent = transport.sent();
        assert_eq!(sent[0].url, "https://api.linkupapi.com/v1/unknown");
        assert_eq!(sent[0].body.get("country"), Some(&json!("FR")));
        assert_eq!(sent[0].body.get("login_token"), Some(&json!("session-token")));
    }

    #[tokio::test]
    async fn test_selectors_fall_back_to_defaults() {
        let transport = FakeTransport::returning(json!({}));
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), record());

        let results = node.execute(&items(1), &Map::new()).await;
        assert_eq!(results[0].json["_meta"]["resource"], "authentication");
        assert_eq!(results[0].json["_meta"]["operation"], "login");
        assert!(transport.sent()[0].url.ends_with("/auth/login"));
        assert!(transport.sent()[0].body.get("login_token").is_none());
    }

    #[tokio::test]
    async fn test_per_item_parameters() {
        let transport = FakeTransport::returning(json!({}));
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), record());
        let params: Vec<Map<String, Value>> = vec![
            param_map(json!({
                "resource": "network",
                "operation": "getInvitationStatus",
                "getInvitationStatusParams": {"profileUrl": "u1", "country": "US"}
            })),
            param_map(json!({
                "resource": "post",
                "operation": "timeSpent",
                "postsParams": {"postUrl": "p", "duration": 1500.9}
            })),
        ];

        let results = node.execute(&items(2), &params).await;
        assert_eq!(results.len(), 2);

        let sent = transport.sent();
        assert_eq!(sent[0].body.get("linkedin_url"), Some(&json!("u1")));
        assert_eq!(sent[0].body.get("country"), Some(&json!("US")));
        assert_eq!(sent[1].body.get("duration"), Some(&json!(1500)));
        assert!(sent[1].url.ends_with("/posts/time-spent"));
    }

    #[tokio::test]
    async fn test_advanced_options_do_not_change_request() {
        let transport = FakeTransport::returning(json!({}));
        let node = LinkupNode::new(LinkupConfig::default(), transport.clone(), record());
        let params = param_map(json!({
            "resource": "profile",
            "operation": "getMyProfile",
            "additionalFields": {"timeout": 1000, "retryCount": 5}
        }));

        node.execute(&items(1), &params).await;
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].timeout, std::time::Duration::from_millis(30000));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        // millisecond precision: "2024-01-01T00:00:00.000Z"
        assert_eq!(ts.len(), 24);
    }
}
