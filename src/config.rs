use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

const BASE_URL_VAR: &str = "LINKUP_API_BASE_URL";
const TIMEOUT_VAR: &str = "LINKUP_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "https://api.linkupapi.com/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const NODE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = concat!("linkup-node/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct LinkupConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Reported in every result's `_meta.nodeVersion`
    pub node_version: String,
}

impl Default for LinkupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: USER_AGENT.to_string(),
            node_version: NODE_VERSION.to_string(),
        }
    }
}

impl LinkupConfig {
    /// Defaults, overridden by the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        load_config()
    }
}

pub fn load_config() -> Result<LinkupConfig> {
    dotenvy::dotenv().ok();
    config_from_lookup(|name| env::var(name).ok())
}

fn config_from_lookup<F>(lookup: F) -> Result<LinkupConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LinkupConfig::default();

    if let Some(raw) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config.base_url = validate_base_url(raw.trim())?;
    }

    if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
        let millis = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{TIMEOUT_VAR} `{raw}` is not a whole number of milliseconds"))?;
        if millis == 0 {
            bail!("{TIMEOUT_VAR} must be greater than zero");
        }
        config.timeout = Duration::from_millis(millis);
    }

    Ok(config)
}

fn validate_base_url(raw: &str) -> Result<String> {
    let parsed =
        Url::parse(raw).with_context(|| format!("{BASE_URL_VAR} `{raw}` is not a valid URL"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => bail!("{BASE_URL_VAR} must use http or https, got `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = config_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LinkupConfig::default());
        assert_eq!(config.base_url, "https://api.linkupapi.com/v1");
        assert_eq!(config.timeout, Duration::from_millis(30000));
        assert!(config.user_agent.starts_with("linkup-node/"));
        assert_eq!(config.node_version, NODE_VERSION);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from_lookup(lookup(&[
            ("LINKUP_API_BASE_URL", "http://localhost:9000/v1/"),
            ("LINKUP_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = config_from_lookup(lookup(&[
            ("LINKUP_API_BASE_URL", "  "),
            ("LINKUP_TIMEOUT_MS", ""),
        ]))
        .unwrap();
        assert_eq!(config, LinkupConfig::default());
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_from_lookup(lookup(&[("LINKUP_API_BASE_URL", "not a url")])).is_err());
        assert!(config_from_lookup(lookup(&[("LINKUP_API_BASE_URL", "ftp://x.example")])).is_err());
        assert!(config_from_lookup(lookup(&[("LINKUP_TIMEOUT_MS", "soon")])).is_err());
        assert!(config_from_lookup(lookup(&[("LINKUP_TIMEOUT_MS", "0")])).is_err());
    }
}
