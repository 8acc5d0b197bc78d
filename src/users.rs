//! User listing with server-driven pagination.
//!
//! Microsoft Graph returns collections wrapped in an OData envelope: the
//! items live under `value` and, when the collection spans multiple pages,
//! an `@odata.nextLink` URL points at the next page. [`list_users`] walks
//! that chain until the link is absent and returns the concatenated users
//! in server order.

use serde::{Deserialize, Serialize};

use crate::client::GraphClient;
use crate::error::Result;

/// A directory user as returned by `GET /users`.
///
/// Only the fields the export consumes are modeled; Graph returns many
/// more, which serde ignores. `id` is the one field Graph guarantees on
/// every user object, so it is the only non-optional field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Immutable directory object identifier.
    pub id: String,
    /// Display name, absent on some synced or service accounts.
    #[serde(default)]
    pub display_name: Option<String>,
    /// UPN, absent on some guest and resource accounts.
    #[serde(default)]
    pub user_principal_name: Option<String>,
    /// Whether the account can sign in. Graph omits this field when the
    /// granted permissions do not cover it.
    #[serde(default)]
    pub account_enabled: Option<bool>,
}

/// OData collection envelope returned by Graph list endpoints.
///
/// `value` defaults to empty when absent, matching Graph's behavior for
/// empty collections. `next_link` is present only when more pages exist.
#[derive(Debug, Deserialize)]
pub struct DirectoryPage<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Absolute URL of the next page, if any.
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// Retrieves every user in the tenant, following pagination to the end.
///
/// Each `@odata.nextLink` is requested exactly as the server returned it;
/// the link already encodes the skip token and any query options, so it is
/// never reconstructed locally. Users accumulate in the order the server
/// yields them.
///
/// # Errors
///
/// Returns [`GraphError::Api`](crate::error::GraphError::Api) if any page
/// request fails; users gathered from earlier pages are discarded.
pub async fn list_users(client: &GraphClient) -> Result<Vec<User>> {
    let mut users = Vec::new();
    let mut page: DirectoryPage<User> = client.get("users").await?;

    loop {
        users.extend(page.value);
        match page.next_link {
            Some(link) => page = client.get_url(&link).await?,
            None => break,
        }
    }

    Ok(users)
}
