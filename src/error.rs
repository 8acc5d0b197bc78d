//! Typed error hierarchy for the entra-user-export crate.
//!
//! `GraphError` gives every failure boundary of the extraction run its own
//! variant so callers can:
//! - Distinguish the failure category (config, auth, API, parse, network,
//!   output).
//! - Inspect the original cause via `source()` (thiserror derives this
//!   from `#[source]`/`#[from]` fields).
//! - Display a human-readable message that includes the relevant context
//!   (status code, response body, file path).
//!
//! Variants map to real system boundaries: `Config` covers credential
//! loading, `Auth` covers the Azure AD token endpoint, `Api` covers the
//! Microsoft Graph REST API, and `Io`/`Csv` cover the output table. None
//! of them are retried anywhere; the run is a strict linear sequence and
//! the first error of any kind ends it.

use reqwest::StatusCode;

/// Unified error type for all extraction operations.
///
/// Each variant corresponds to a distinct failure boundary. The `#[source]`
/// attribute on inner errors enables `Error::source()` chaining so callers
/// can traverse the full cause chain.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Credential configuration could not be resolved.
    ///
    /// This covers a missing or unreadable config file, a required key
    /// absent from its `parameters` object, and an incomplete set of
    /// credential flags on the command line. Detected at load time,
    /// before any network call is made.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description naming the offending file or flag.
        message: String,
    },

    /// Authentication failure at the Azure AD token endpoint.
    ///
    /// This covers:
    /// - Non-2xx responses from `/oauth2/v2.0/token` (invalid credentials,
    ///   expired secrets, misconfigured permissions). The message contains
    ///   Azure AD's AADSTS error codes and human-readable explanation.
    /// - A 2xx response whose body lacks the `access_token` field.
    #[error("authentication failed: {message}")]
    Auth {
        /// Human-readable description of the authentication failure,
        /// including HTTP status and Azure AD error body when available.
        message: String,
        /// The underlying transport or parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Microsoft Graph returned a non-success HTTP status code.
    ///
    /// The full response body is preserved rather than discarded by
    /// `error_for_status()` — Graph error responses carry diagnostic codes
    /// and explanations that are essential for debugging permission issues
    /// and malformed requests.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the Graph API.
        status: StatusCode,
        /// The raw response body text. May contain JSON error details
        /// from Graph, or an empty string if the body could not be read.
        body: String,
    },

    /// JSON deserialization failed when parsing a successful response body.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A network-level failure occurred (DNS resolution, TCP connection,
    /// TLS handshake, etc.). No HTTP status code is available because the
    /// request did not complete.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The output directory could not be created.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The output file could not be created or a record failed to write.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
