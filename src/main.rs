//! CLI entry point for entra-user-export.
//!
//! Runs the one-shot extraction pipeline: resolve credentials, acquire a
//! Graph token, list every user in the tenant, enrich each with license
//! and group data, and write the summary table as CSV.
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (config, auth, API, or output failure)
//! - 2: argument validation error (clap handles this automatically)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use entra_user_export::auth::acquire_token;
use entra_user_export::client::GraphClient;
use entra_user_export::config::{Credentials, DEFAULT_CONFIG_PATH};
use entra_user_export::error::{GraphError, Result};
use entra_user_export::summary::{build_user_summaries, write_summary_csv, DEFAULT_OUTPUT_PATH};
use entra_user_export::users::list_users;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Azure AD tenant ID. Set all of --tenant-id, --client-id and
    /// --client-secret to bypass the config file.
    #[arg(long)]
    tenant_id: Option<String>,

    /// Azure AD application (client) ID.
    #[arg(long)]
    client_id: Option<String>,

    /// Azure AD client secret. Prefer setting via the GRAPH_CLIENT_SECRET
    /// environment variable to avoid exposing the secret in process listings
    /// and shell history.
    #[arg(long, env = "GRAPH_CLIENT_SECRET")]
    client_secret: Option<String>,

    /// Path of the JSON config file holding credentials under `parameters`.
    /// Read only when no credential flags are given.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Path of the output CSV table. Parent directories are created,
    /// an existing file is overwritten.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

/// Resolves credentials from flags or the config file.
///
/// Either all three credential flags are set (the config file is ignored)
/// or none are (the config file is read). A partial set of flags is an
/// error rather than a silent fallback, so a forgotten flag cannot mix
/// CLI and file credentials.
fn resolve_credentials(args: &Cli) -> Result<Credentials> {
    match (&args.tenant_id, &args.client_id, &args.client_secret) {
        (Some(tenant_id), Some(client_id), Some(client_secret)) => Ok(Credentials {
            tenant_id: tenant_id.clone(),
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
        }),
        (None, None, None) => Credentials::from_file(&args.config),
        _ => Err(GraphError::Config {
            message: "provide all of --tenant-id, --client-id and --client-secret, \
                      or none to use the config file"
                .to_string(),
        }),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let credentials = match resolve_credentials(&args) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let http = reqwest::Client::new();

    println!("Requesting access token");
    let token = match acquire_token(&http, &credentials).await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = GraphClient::new(&http, &token);

    println!("Downloading user list");
    let users = match list_users(&client).await {
        Ok(users) => users,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Fetched {} users from the directory", users.len());

    println!("Collecting licenses and group memberships");
    let rows = match build_user_summaries(&client, &users).await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_summary_csv(&rows, &args.output) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    println!(
        "Wrote {} user summaries to {}",
        rows.len(),
        args.output.display()
    );

    ExitCode::SUCCESS
}
