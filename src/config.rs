//! Configuration types for refetch

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, time::Duration};

/// Request configuration for a [`Fetcher`](crate::Fetcher)
///
/// Describes the transport-level shape of the request: method, headers, body,
/// and an optional per-request timeout. The default configuration is a plain
/// GET with no headers, no body, and no deadline.
///
/// Value equality is the configuration's identity:
/// [`Fetcher::update`](crate::Fetcher::update) compares the previous and new
/// configuration with `==` and only re-executes on an actual change. A config
/// rebuilt fresh with identical field values compares equal and does not
/// re-trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// HTTP method (default: "GET")
    #[serde(default = "default_method")]
    pub method: String,

    /// Request headers as name/value pairs (default: empty)
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body payload (default: none)
    #[serde(default)]
    pub body: Option<String>,

    /// Per-request timeout passed through to the HTTP client (None = no deadline)
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }
}

fn default_method() -> String {
    "GET".to_string()
}
