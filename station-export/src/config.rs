//! Configuration for a station export run.

use std::path::PathBuf;

use crate::stations::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT, DEFAULT_NAMESPACE, StationClientConfig};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "./stations.json";

/// Everything one export run needs to know.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Base URL of the realtime API.
    pub base_url: String,

    /// Endpoint path appended to the base URL.
    pub endpoint: String,

    /// XML namespace the station fields live in.
    pub namespace: String,

    /// Where the JSON array is written.
    pub output_path: PathBuf,
}

impl ExportConfig {
    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the namespace used to look up station fields.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the output file.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// HTTP client settings for this run.
    pub fn client_config(&self) -> StationClientConfig {
        StationClientConfig::new()
            .with_base_url(&self.base_url)
            .with_endpoint(&self.endpoint)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
