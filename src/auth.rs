//! OAuth2 client-credentials authentication for Microsoft identity platform.
//!
//! Acquires a bearer token from Azure AD's `/oauth2/v2.0/token` endpoint
//! using the client_credentials grant. One token is acquired per run and
//! passed to [`GraphClient`](crate::client::GraphClient) for the lifetime
//! of the process; there is no caching, refresh, or expiry tracking. Azure
//! AD tokens live for roughly an hour, far longer than a directory
//! extraction run.

use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::{GraphError, Result};

/// Azure AD v2.0 token endpoint. `{tenant_id}` is replaced at runtime.
const TOKEN_URL: &str = "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token";

/// OAuth2 scope requesting the application's granted Microsoft Graph roles.
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Form body sent to the token endpoint.
/// Fields are serialized as `application/x-www-form-urlencoded` by reqwest's `.form()`.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    scope: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Subset of the Azure AD token response that we need.
/// The endpoint returns additional fields (e.g. `token_type`, `expires_in`,
/// `ext_expires_in`) which are silently ignored by serde because we don't
/// mark the struct `deny_unknown_fields`.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Acquires an access token for Microsoft Graph from Azure AD.
///
/// Interpolates the tenant into the production token endpoint and requests
/// the `https://graph.microsoft.com/.default` scope.
///
/// # Errors
///
/// Returns [`GraphError::Auth`] when Azure AD rejects the credentials or
/// returns a body without an `access_token`, and [`GraphError::Network`]
/// when the request cannot be sent at all.
pub async fn acquire_token(http: &reqwest::Client, credentials: &Credentials) -> Result<String> {
    let url = TOKEN_URL.replace("{tenant_id}", &credentials.tenant_id);
    acquire_token_at(http, &url, credentials).await
}

/// Acquires an access token from an explicit token endpoint URL.
///
/// [`acquire_token`] delegates here after interpolating the tenant; tests
/// point this at a mock server instead.
///
/// # Errors
///
/// Same contract as [`acquire_token`].
pub async fn acquire_token_at(
    http: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let body = TokenRequest {
        client_id: &credentials.client_id,
        scope: GRAPH_SCOPE,
        client_secret: &credentials.client_secret,
        grant_type: "client_credentials",
    };

    let response = http.post(token_url).form(&body).send().await?;

    // Read body before checking status so we can surface Microsoft's
    // detailed error (AADSTS codes) on failure.
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(GraphError::Auth {
            message: format!("token request failed ({status}): {body}"),
            source: None,
        });
    }

    let resp: TokenResponse = serde_json::from_str(&body).map_err(|e| GraphError::Auth {
        message: "token endpoint returned a malformed response".to_string(),
        source: Some(Box::new(e)),
    })?;

    Ok(resp.access_token)
}
