//! Credential configuration loading.
//!
//! Credentials arrive either as command-line flags or as a JSON config
//! file of the platform shape `{"parameters": {...}}`. This module owns
//! the file path default, the parameter names, and the validation errors
//! for both routes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, Result};

/// Default location of the platform-provided configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/data/config.json";

/// OAuth2 client credentials identifying the application in one tenant.
///
/// Deliberately does not derive `Debug` so the client secret cannot leak
/// through debug formatting or logs.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Azure AD tenant (directory) identifier.
    pub tenant_id: String,
    /// Application (client) identifier of the app registration.
    pub client_id: String,
    /// Client secret issued for the app registration.
    pub client_secret: String,
}

/// Platform config file envelope: credentials live under `parameters`.
#[derive(Deserialize)]
struct ConfigFile {
    parameters: Credentials,
}

impl Credentials {
    /// Loads credentials from a JSON config file.
    ///
    /// The file must contain a top-level `parameters` object with
    /// `tenant_id`, `client_id` and `client_secret` keys, all strings.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] naming the path when the file cannot
    /// be read, and naming both the path and the missing key when the JSON
    /// does not match the expected shape.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| GraphError::Config {
            message: format!("cannot read config file {}: {e}", path.display()),
        })?;

        let parsed: ConfigFile = serde_json::from_str(&raw).map_err(|e| GraphError::Config {
            message: format!("invalid config file {}: {e}", path.display()),
        })?;

        Ok(parsed.parameters)
    }
}
