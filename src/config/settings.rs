//! Settings structures for the relay configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default Confluence site searched when no base URL is configured
pub const DEFAULT_CONFLUENCE_BASE: &str = "https://secil-pt.atlassian.net/wiki";

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub confluence: ConfluenceSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable lookup
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CONFLUENCE_TOKEN") {
            self.confluence.token = ApiToken::new(val);
        }
        if let Some(val) = lookup("CONFLUENCE_BASE_URL") {
            self.confluence.base_url = val;
        }
        if let Some(val) = lookup("RELAY_DEBUG") {
            if let Some(debug) = parse_flag(&val) {
                self.general.debug = debug;
            }
        }
        if let Some(val) = lookup("RELAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("RELAY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.confluence.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!(
                "confluence.base_url must be http(s), got {}",
                self.confluence.base_url
            );
        }
        Ok(())
    }
}

/// Parse a boolean environment flag; unrecognized values yield `None`
fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Upstream Confluence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluenceSettings {
    /// Wiki base URL, e.g. `https://example.atlassian.net/wiki`
    pub base_url: String,
    /// Bearer token used for every outbound search. Never serialized.
    #[serde(skip_serializing)]
    pub token: Option<ApiToken>,
}

impl Default for ConfluenceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONFLUENCE_BASE.to_string(),
            token: None,
        }
    }
}

/// Bearer credential. Never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a raw token; blank values count as absent
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// User agent sent upstream (none = crate default)
    pub useragent: Option<String>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            useragent: None,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
