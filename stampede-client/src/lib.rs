//! Stampede HTTP Client
//!
//! A simple, type-safe HTTP client for the Stampede launcher API.
//!
//! # Example
//!
//! ```no_run
//! use stampede_client::LauncherClient;
//! use stampede_core::dto::launch::LaunchRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LauncherClient::new("http://localhost:8080");
//!
//!     let response = client.launch(LaunchRequest {
//!         task_count: Some(2),
//!         target_url: Some("https://api.example.com".to_string()),
//!         vus: Some(50),
//!         rate: Some(5),
//!         duration: Some(120),
//!     }).await?;
//!
//!     println!("Launched {} task(s)", response.tasks_launched);
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::Deserialize;

use stampede_core::dto::launch::{LaunchRequest, LaunchResponse};

/// HTTP client for the Stampede launcher API
#[derive(Debug, Clone)]
pub struct LauncherClient {
    /// Base URL of the launcher (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

/// Error body shape returned by the launcher API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl LauncherClient {
    /// Create a new launcher client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the launcher API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new launcher client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// POST /launch
    /// Dispatch load-test worker tasks
    pub async fn launch(&self, request: LaunchRequest) -> Result<LaunchResponse> {
        let url = format!("{}/launch", self.base_url);

        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<LaunchResponse>()
                .await
                .map_err(|e| ClientError::ParseError(e.to_string()))
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(ClientError::api_error(status.as_u16(), message))
        }
    }

    /// GET /health
    /// Check launcher availability
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::api_error(
                response.status().as_u16(),
                "health check failed",
            ))
        }
    }
}
