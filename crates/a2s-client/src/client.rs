//! Waitlist HTTP client implementation.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use a2s_core::{UserWaitlistEntry, VendorWaitlistEntry};

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, EntriesResponse, EntryResponse, HealthResponse, UserWaitlistInput,
    VendorWaitlistInput,
};

/// Waitlist API client.
///
/// Provides methods for joining and listing both waitlists.
#[derive(Debug, Clone)]
pub struct A2sClient {
    client: Client,
    base_url: String,
}

impl A2sClient {
    /// Create a new waitlist client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the waitlist service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new waitlist client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the HTTP
    /// client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base URL {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Submit a user waitlist form.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if the server rejects the input, or
    /// another error if the request fails.
    pub async fn join_user_waitlist(
        &self,
        input: &UserWaitlistInput,
    ) -> Result<UserWaitlistEntry, ClientError> {
        let url = format!("{}/api/user-waitlist", self.base_url);

        let response = self.client.post(&url).json(input).send().await?;

        let body: EntryResponse<UserWaitlistEntry> = Self::handle_response(response).await?;
        Ok(body.entry)
    }

    /// Submit a vendor waitlist form.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if the server rejects the input, or
    /// another error if the request fails.
    pub async fn join_vendor_waitlist(
        &self,
        input: &VendorWaitlistInput,
    ) -> Result<VendorWaitlistEntry, ClientError> {
        let url = format!("{}/api/vendor-waitlist", self.base_url);

        let response = self.client.post(&url).json(input).send().await?;

        let body: EntryResponse<VendorWaitlistEntry> = Self::handle_response(response).await?;
        Ok(body.entry)
    }

    /// List the user waitlist, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_user_waitlist(&self) -> Result<Vec<UserWaitlistEntry>, ClientError> {
        let url = format!("{}/api/user-waitlist", self.base_url);

        let response = self.client.get(&url).send().await?;

        let body: EntriesResponse<UserWaitlistEntry> = Self::handle_response(response).await?;
        Ok(body.entries)
    }

    /// List the vendor waitlist, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_vendor_waitlist(&self) -> Result<Vec<VendorWaitlistEntry>, ClientError> {
        let url = format!("{}/api/vendor-waitlist", self.base_url);

        let response = self.client.get(&url).send().await?;

        let body: EntriesResponse<VendorWaitlistEntry> = Self::handle_response(response).await?;
        Ok(body.entries)
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) if status == StatusCode::BAD_REQUEST => {
                tracing::debug!(
                    issues = api_error.errors.len(),
                    "Submission rejected by server"
                );
                Err(ClientError::Validation {
                    message: api_error.message,
                    issues: api_error.errors,
                })
            }
            Ok(api_error) => Err(ClientError::Api {
                status: status.as_u16(),
                message: api_error.message,
            }),
            Err(_) => Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("HTTP {status}"),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
