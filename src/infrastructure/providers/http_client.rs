//! # HTTP Client Utilities
//!
//! Shared HTTP client for live provider adapters.
//!
//! Wraps `reqwest` with a request timeout, JSON decoding and a mapping of
//! transport and status failures onto [`ProviderError`].

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Builds an `Authorization` header map, e.g. `("Token", key)`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Authentication` if the credential is not a
    /// valid header value.
    pub fn authorization(scheme: &str, credential: &str) -> ProviderResult<HeaderMap> {
        let value = HeaderValue::from_str(&format!("{} {}", scheme, credential))
            .map_err(|_| ProviderError::authentication("API key is not a valid header value"))?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Makes a GET request with query parameters and custom headers.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout` or `ProviderError::Connection` if the
    /// request fails, a status-specific error for non-2xx responses, and
    /// `ProviderError::ProtocolError` if the body cannot be decoded.
    pub async fn get_with_params_and_headers<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
        headers: HeaderMap,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ProviderError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a ProviderError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> ProviderError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ProviderError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited("Rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                ProviderError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => ProviderError::protocol_error(format!("HTTP error ({}): {}", status, body)),
        }
    }
}
