use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::cli::error::{CliError, CliResult};
use crate::view::ApiEnvelope;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// API client for the kanban REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// `api_url` comes from `--api-url` or `KANBAN_API_URL`; without either
    /// the client talks to http://localhost:3000.
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(format!("{}{}", self.base_url, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(format!("{}{}", self.base_url, path))
    }

    /// Unwrap the `data` of a successful envelope.
    ///
    /// Non-success statuses become `CliError::ApiError` carrying the
    /// envelope's message.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        let envelope: ApiEnvelope<T> = read_envelope(response).await?;
        envelope.data.ok_or_else(|| CliError::InvalidResponse {
            message: "response carried no data".to_string(),
        })
    }

    /// Message of a successful envelope without data (deletes).
    pub async fn handle_message(response: Response) -> CliResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = read_envelope(response).await?;
        Ok(envelope.message)
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> CliResult<ApiEnvelope<T>> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(CliError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
