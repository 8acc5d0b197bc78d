//! Async Rust library for exporting Microsoft Entra ID users to CSV.
//!
//! Provides OAuth2 client-credentials authentication, an authenticated
//! Microsoft Graph HTTP client, paginated user listing, per-user license
//! and group enrichment, and the CSV table writer. The `entra-user-export`
//! binary chains these into a one-shot extraction run.
//!
//! # Modules
//!
//! - [`auth`] — OAuth2 client-credentials token acquisition.
//! - [`client`] — Authenticated HTTP wrapper for the Microsoft Graph API.
//! - [`config`] — Credential loading from the platform config file.
//! - [`enrichment`] — Per-user license details and group memberships.
//! - [`error`] — Typed error hierarchy (`GraphError`) for all operations.
//! - [`summary`] — Row mapping and CSV output.
//! - [`users`] — User listing with `@odata.nextLink` pagination.
//!
//! # Quick Start
//!
//! ```ignore
//! use entra_user_export::auth::acquire_token;
//! use entra_user_export::client::GraphClient;
//! use entra_user_export::config::Credentials;
//! use entra_user_export::summary::{build_user_summaries, write_summary_csv};
//! use entra_user_export::users::list_users;
//!
//! let credentials = Credentials::from_file(Path::new("/data/config.json"))?;
//! let http = reqwest::Client::new();
//! let token = acquire_token(&http, &credentials).await?;
//! let client = GraphClient::new(&http, &token);
//! let users = list_users(&client).await?;
//! let rows = build_user_summaries(&client, &users).await?;
//! write_summary_csv(&rows, Path::new("/data/out/tables/users_summary.csv"))?;
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod summary;
pub mod users;
