//! Authenticated HTTP client for the Microsoft Graph REST API.
//!
//! `GraphClient` wraps a `reqwest::Client` together with the bearer token
//! acquired at startup, providing JSON GET helpers for relative API paths
//! and for absolute URLs (Graph's `@odata.nextLink` pagination links are
//! absolute and must be followed verbatim).
//!
//! Session state is explicit: the client holds exactly one token for its
//! whole lifetime. There is no token refresh, no 401 retry, and no
//! backoff; any non-success response aborts the run with the response
//! body preserved for diagnosis.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{GraphError, Result};

const BASE_URL: &str = "https://graph.microsoft.com/v1.0/";

/// Authenticated client for Microsoft Graph.
///
/// `base_url` is stored as a `String` rather than a `&'static str` so it
/// can be overridden in tests (e.g. pointing at a wiremock server).
pub struct GraphClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GraphClient {
    /// Creates a client for the production Graph v1.0 endpoint.
    ///
    /// `reqwest::Client` is cheaply cloneable (it is a handle to a shared
    /// connection pool), so token acquisition and Graph calls reuse the
    /// same pool.
    pub fn new(http: &Client, token: &str) -> Self {
        GraphClient {
            http: http.clone(),
            base_url: BASE_URL.to_string(),
            token: token.to_string(),
        }
    }

    /// Constructor that accepts a custom base URL, used by tests to point
    /// at a local mock server instead of the real Graph API.
    pub fn with_base_url(http: &Client, token: &str, base_url: &str) -> Self {
        GraphClient {
            http: http.clone(),
            base_url: base_url.to_string(),
            token: token.to_string(),
        }
    }

    /// Sends an authenticated GET request for a path relative to the base
    /// URL (no leading slash) and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Api`] for any non-2xx status,
    /// [`GraphError::Parse`] when the body is not the expected shape, and
    /// [`GraphError::Network`] for transport failures.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.get_url(&url).await
    }

    /// Sends an authenticated GET request to an absolute URL.
    ///
    /// Pagination follows this path: `@odata.nextLink` values are complete
    /// URLs minted by the server and are requested exactly as returned,
    /// never re-derived from the base URL.
    ///
    /// # Errors
    ///
    /// Same contract as [`GraphClient::get`].
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;

        // Read body before checking status so Graph's error payload
        // (code, message, request-id) is preserved in the error.
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GraphError::Api { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
