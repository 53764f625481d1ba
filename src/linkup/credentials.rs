//! Linkup credential resolution
//!
//! Supports:
//! - In-memory credential records (what the host hands over)
//! - Environment variables (LINKUP_API_KEY, LINKUP_EMAIL, LINKUP_PASSWORD,
//!   LINKUP_COUNTRY, LINKUP_LOGIN_TOKEN), with `.env` loading

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::debug;

/// Placeholder the host's credential UI may persist instead of an empty value
pub const BLANK_VALUE_MARKER: &str = "__n8n_BLANK_VALUE_";

/// Country used when neither the credentials nor the form provide one
pub const DEFAULT_COUNTRY: &str = "FR";

const API_KEY_VAR: &str = "LINKUP_API_KEY";
const EMAIL_VAR: &str = "LINKUP_EMAIL";
const PASSWORD_VAR: &str = "LINKUP_PASSWORD";
const COUNTRY_VAR: &str = "LINKUP_COUNTRY";
const LOGIN_TOKEN_VAR: &str = "LINKUP_LOGIN_TOKEN";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Missing API key. Configure your Linkup credentials in the node settings.")]
    Missing,

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Raw credential record as stored by the host, before sanitization
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub linkedin_email: Option<String>,
    #[serde(default)]
    pub linkedin_password: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub login_token: Option<String>,
}

impl CredentialRecord {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }
}

/// Sanitized credential bundle used for one item
#[derive(Debug, Clone, PartialEq)]
pub struct LinkupCredentials {
    pub api_key: String,
    pub email: String,
    pub password: String,
    pub country: String,
    /// Session token; empty when the account has not logged in yet
    pub login_token: String,
}

impl LinkupCredentials {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            email: String::new(),
            password: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            login_token: String::new(),
        }
    }

    pub fn with_login_token(mut self, login_token: impl Into<String>) -> Self {
        self.login_token = login_token.into();
        self
    }
}

/// Opaque credential lookup provided by the host
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the stored record; `None` when nothing is configured
    async fn load(&self) -> Result<Option<CredentialRecord>>;
}

#[async_trait]
impl CredentialStore for CredentialRecord {
    async fn load(&self) -> Result<Option<CredentialRecord>> {
        Ok(Some(self.clone()))
    }
}

/// Reads credentials from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialStore;

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn load(&self) -> Result<Option<CredentialRecord>> {
        // dotenv touches the filesystem
        let record = tokio::task::spawn_blocking(load_from_env).await?;
        Ok(record)
    }
}

fn load_from_env() -> Option<CredentialRecord> {
    dotenvy::dotenv().ok();

    let record = CredentialRecord {
        api_key: env::var(API_KEY_VAR).ok(),
        linkedin_email: env::var(EMAIL_VAR).ok(),
        linkedin_password: env::var(PASSWORD_VAR).ok(),
        country: env::var(COUNTRY_VAR).ok(),
        login_token: env::var(LOGIN_TOKEN_VAR).ok(),
    };

    if record == CredentialRecord::default() {
        debug!("No Linkup credentials found in environment");
        return None;
    }
    Some(record)
}

/// Treat empty values and blank-placeholder values as absent
pub fn sanitize_credential_value(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() && !v.contains(BLANK_VALUE_MARKER) => Some(v.to_string()),
        _ => None,
    }
}

/// Sanitize a stored record into a usable bundle
pub fn resolve_credentials(
    record: Option<CredentialRecord>,
) -> Result<LinkupCredentials, CredentialsError> {
    let record = record.ok_or(CredentialsError::Missing)?;

    let api_key =
        sanitize_credential_value(record.api_key.as_deref()).ok_or(CredentialsError::Missing)?;

    Ok(LinkupCredentials {
        api_key,
        email: sanitize_credential_value(record.linkedin_email.as_deref()).unwrap_or_default(),
        password: sanitize_credential_value(record.linkedin_password.as_deref())
            .unwrap_or_default(),
        country: sanitize_credential_value(record.country.as_deref())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        login_token: sanitize_credential_value(record.login_token.as_deref()).unwrap_or_default(),
    })
}

/// Fetch from the store and sanitize
pub async fn load_credentials(
    store: &dyn CredentialStore,
) -> Result<LinkupCredentials, CredentialsError> {
    let record = store.load().await?;
    let credentials = resolve_credentials(record)?;
    debug!(
        "Resolved Linkup credentials, api_key: {}, session: {}",
        mask_credential(&credentials.api_key),
        !credentials.login_token.is_empty()
    );
    Ok(credentials)
}

/// Mask sensitive credential values for logging
pub fn mask_credential(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
