//! Gateway configuration loading
//!
//! The configuration file is untrusted JSON. Loading never fails the
//! caller: unreadable or unparseable files are reported and replaced by
//! the built-in defaults, and recognized keys carrying the wrong kind of
//! value are ignored field by field.

use crate::acl::{self, AclEntry};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error};

/// Gateway configuration, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis server requests are bridged to.
    pub redis_host: String,
    /// Redis server port.
    pub redis_port: u16,
    /// Password sent to Redis with AUTH, if any.
    pub redis_auth: Option<String>,
    /// Address the HTTP front end listens on.
    pub http_host: String,
    /// HTTP listen port.
    pub http_port: u16,
    /// Access-control chain in declaration order.
    pub acls: Vec<AclEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: "127.0.0.1".to_string(),
            redis_port: 6379,
            redis_auth: None,
            http_host: "0.0.0.0".to_string(),
            http_port: 7379,
            acls: Vec::new(),
        }
    }
}

impl Config {
    /// Load the configuration from a JSON file.
    ///
    /// Always returns a usable configuration: if the file cannot be read
    /// or parsed, the error is logged (with the offending line for parse
    /// errors) and the defaults are returned.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut config = Self::default();

        match read_document(path) {
            Ok(Value::Object(entries)) => {
                for (key, value) in &entries {
                    config.apply(key, value);
                }
                debug!(
                    path = %path.display(),
                    acl_entries = config.acls.len(),
                    "Parsed configuration file"
                );
            }
            // A parseable document whose root is not an object has no keys
            // to apply; the defaults stand.
            Ok(_) => {}
            Err(e) => {
                error!(path = %path.display(), "{:#}; using default configuration", e);
            }
        }

        config
    }

    /// Apply one top-level key. Unknown keys and recognized keys carrying
    /// the wrong kind of value are ignored; keys are independent, so the
    /// order the document yields them in does not matter.
    fn apply(&mut self, key: &str, value: &Value) {
        match (key, value) {
            ("redis_host", Value::String(host)) => self.redis_host = host.clone(),
            ("redis_port", Value::Number(port)) => {
                if let Some(port) = port.as_i64() {
                    self.redis_port = port as u16;
                }
            }
            ("redis_auth", Value::String(auth)) => self.redis_auth = Some(auth.clone()),
            ("http_host", Value::String(host)) => self.http_host = host.clone(),
            ("http_port", Value::Number(port)) => {
                if let Some(port) = port.as_i64() {
                    self.http_port = port as u16;
                }
            }
            ("acl", Value::Array(items)) => self.acls = acl::parse_entries(items),
            _ => {}
        }
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    // serde_json reports the 1-based line and column in its message
    serde_json::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))
}
