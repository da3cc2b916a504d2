use crate::error::VecRouteError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Similarity metric used by the vector store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// `1 / (1 + d²)`; exactly 1.0 only for identical points
    Euclidean,
    /// `(1 + cos) / 2`
    Cosine,
}

impl FromStr for MetricKind {
    type Err = VecRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "cosine" => Ok(Self::Cosine),
            other => Err(VecRouteError::config(format!(
                "Unknown similarity metric '{}'",
                other
            ))),
        }
    }
}

/// VecRoute application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON dataset with locations and highways
    pub dataset_path: PathBuf,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Similarity metric for the vector store
    pub metric: MetricKind,

    /// Number of highway candidates fetched per inference
    pub segment_candidates: usize,

    /// Let the waypoint router pass through locations that were not requested
    pub allow_detours: bool,

    /// Deadline for a single route request, in milliseconds
    pub query_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("./data/transport.json"),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            metric: MetricKind::Euclidean,
            segment_candidates: 4,
            allow_detours: false,
            query_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, VecRouteError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let metric = match std::env::var("SIMILARITY_METRIC") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.metric,
        };

        let config = Self {
            dataset_path: Self::get_env_path("DATASET_PATH")
                .unwrap_or(defaults.dataset_path),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT")
                .unwrap_or(defaults.server_port),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level),
            metric,
            segment_candidates: Self::get_env_parsed("SEGMENT_CANDIDATES")
                .unwrap_or(defaults.segment_candidates),
            allow_detours: Self::get_env_parsed("ALLOW_DETOURS")
                .unwrap_or(defaults.allow_detours),
            query_timeout_ms: Self::get_env_parsed("QUERY_TIMEOUT_MS")
                .unwrap_or(defaults.query_timeout_ms),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get a parsed value from environment variable, ignoring unparsable input
    fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.parse().ok())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), VecRouteError> {
        // Validate port range
        if self.server_port == 0 {
            return Err(VecRouteError::config("Server port cannot be 0"));
        }

        if self.segment_candidates == 0 {
            return Err(VecRouteError::config(
                "Segment candidate count must be at least 1",
            ));
        }

        if self.query_timeout_ms == 0 {
            return Err(VecRouteError::config("Query timeout cannot be 0"));
        }

        Ok(())
    }
}
