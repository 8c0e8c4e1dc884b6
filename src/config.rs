// src/config.rs
// Environment-based configuration for the model gateway and HTTP server

use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";
pub const DEFAULT_API_VERSION: &str = "2023-05-29";
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the remote model picks tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodingMethod {
    Greedy,
}

impl DecodingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
        }
    }
}

/// Generation parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodingPolicy {
    pub method: DecodingMethod,
    pub max_new_tokens: u32,
}

impl Default for DecodingPolicy {
    fn default() -> Self {
        Self {
            method: DecodingMethod::Greedy,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

/// watsonx.ai credentials and endpoint identifiers
///
/// Every identifier is optional here: a missing value only surfaces when a
/// generation call is attempted.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// IBM Cloud API key (IBM_API_KEY)
    pub api_key: Option<String>,
    /// Service base URL, e.g. https://us-south.ml.cloud.ibm.com (IBM_GRANITE_ENDPOINT)
    pub endpoint: Option<String>,
    /// Model identifier, e.g. ibm/granite-13b-instruct-v2 (IBM_MODEL_ID)
    pub model_id: Option<String>,
    /// watsonx project the usage is billed to (IBM_PROJECT_ID)
    pub project_id: Option<String>,
    /// IAM token exchange endpoint (IBM_IAM_URL)
    pub iam_url: String,
    /// `version` query parameter of the ml/v1 API (IBM_API_VERSION)
    pub api_version: String,
    pub decoding: DecodingPolicy,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            model_id: None,
            project_id: None,
            iam_url: DEFAULT_IAM_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            decoding: DecodingPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Load from process environment variables
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|name| std::env::var(name).ok());
        config.log_status();
        config
    }

    /// Build from an arbitrary variable lookup, filtering blank values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout = read("IBM_REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self {
            api_key: read("IBM_API_KEY"),
            endpoint: read("IBM_GRANITE_ENDPOINT").map(|u| normalize_endpoint(&u)),
            model_id: read("IBM_MODEL_ID"),
            project_id: read("IBM_PROJECT_ID"),
            iam_url: read("IBM_IAM_URL").unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
            api_version: read("IBM_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            decoding: DecodingPolicy::default(),
            request_timeout,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Names of the required variables that are not set
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("IBM_API_KEY");
        }
        if self.endpoint.is_none() {
            missing.push("IBM_GRANITE_ENDPOINT");
        }
        if self.model_id.is_none() {
            missing.push("IBM_MODEL_ID");
        }
        if self.project_id.is_none() {
            missing.push("IBM_PROJECT_ID");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Log which settings are present (without exposing values)
    fn log_status(&self) {
        let missing = self.missing();
        if missing.is_empty() {
            debug!(
                model = self.model_id.as_deref().unwrap_or_default(),
                endpoint = self.endpoint.as_deref().unwrap_or_default(),
                "watsonx configuration loaded"
            );
        } else {
            warn!(missing = ?missing, "watsonx configuration incomplete - generation calls will fail");
        }
    }
}

/// Strip trailing slashes so paths can be appended with a single `/`
fn normalize_endpoint(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Where the HTTP server listens and what it serves from disk
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
