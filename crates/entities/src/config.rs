use std::{env, fmt, str::FromStr, time::Duration};

/// Which store implementation backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            "memory" | "inmemory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::DynamoDb => f.write_str("dynamodb"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Where the DynamoDB client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEndpoint {
    /// A local emulator (e.g. DynamoDB Local next to `sam local`).
    Local { url: String },
    /// The managed regional endpoint.
    Regional { region: String },
}

impl fmt::Display for StoreEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEndpoint::Local { url } => write!(f, "Local DynamoDB ({url})"),
            StoreEndpoint::Regional { region } => write!(f, "AWS DynamoDB (region: {region})"),
        }
    }
}

/// Store client settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store implementation (default: dynamodb)
    pub backend: StoreBackend,
    /// Table holding every entity (default: "Entities")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Whether we run inside `sam local` (default: false)
    pub sam_local: bool,
    /// Emulator endpoint used when `sam_local` is set (default: "http://dynamodb:8000")
    pub local_endpoint: String,
}

impl StoreConfig {
    /// Resolve the endpoint the client should talk to.
    pub fn endpoint(&self) -> StoreEndpoint {
        if self.sam_local {
            StoreEndpoint::Local {
                url: self.local_endpoint.clone(),
            }
        } else {
            StoreEndpoint::Regional {
                region: self.region.clone(),
            }
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreConfig,
    /// Request timeout of the HTTP host layer in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORE_BACKEND` - `dynamodb` or `memory` (default: dynamodb)
    /// - `TABLE_NAME` - DynamoDB table name (default: "Entities")
    /// - `REGION` - AWS region (default: "us-east-1")
    /// - `AWS_SAM_LOCAL` - `true` to use the local emulator (default: false)
    /// - `DYNAMODB_ENDPOINT` - emulator URL (default: "http://dynamodb:8000")
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to the dynamodb store backend");
                StoreBackend::DynamoDb
            }),
            None => StoreBackend::DynamoDb,
        };

        Self {
            store: StoreConfig {
                backend,
                table_name: lookup("TABLE_NAME").unwrap_or_else(|| "Entities".to_string()),
                region: lookup("REGION").unwrap_or_else(|| "us-east-1".to_string()),
                sam_local: lookup("AWS_SAM_LOCAL").as_deref() == Some("true"),
                local_endpoint: lookup("DYNAMODB_ENDPOINT")
                    .unwrap_or_else(|| "http://dynamodb:8000".to_string()),
            },
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
