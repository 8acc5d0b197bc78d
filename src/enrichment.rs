//! Per-user enrichment: license details and group memberships.
//!
//! For each user the export issues two additional GETs, one for assigned
//! license SKUs and one for directory memberships. Both endpoints return
//! the standard OData envelope, but unlike
//! [`list_users`](crate::users::list_users) these fetches read a single
//! page and stop. License assignments and direct memberships per user are
//! small collections that fit in Graph's default page size; a user with
//! more memberships than one page holds would be exported with the first
//! page only.

use serde::Deserialize;

use crate::client::GraphClient;
use crate::error::Result;
use crate::users::DirectoryPage;

/// One license assignment as returned by `GET /users/{id}/licenseDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDetail {
    /// Identifier of this license detail object.
    #[serde(default)]
    pub id: Option<String>,
    /// GUID of the subscribed SKU.
    #[serde(default)]
    pub sku_id: Option<String>,
    /// Human-readable SKU name, e.g. `ENTERPRISEPACK` for Office 365 E3.
    /// Graph can omit this for SKUs without a published part number.
    #[serde(default)]
    pub sku_part_number: Option<String>,
}

/// A directory object as returned by `GET /users/{id}/memberOf`.
///
/// The membership collection is heterogeneous: groups, directory roles
/// and administrative units all appear, distinguished by `@odata.type`.
/// The export treats them uniformly by display name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryObject {
    /// OData type annotation, e.g. `#microsoft.graph.group`.
    #[serde(rename = "@odata.type", default)]
    pub odata_type: Option<String>,
    /// Directory object identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name; directory roles and groups both carry one, but it is
    /// not guaranteed on every object type.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Fetches the license details assigned to one user.
///
/// Reads a single page; the result is the page's `value` collection,
/// empty for unlicensed users.
///
/// # Errors
///
/// Returns [`GraphError::Api`](crate::error::GraphError::Api) on any
/// non-success status, including 404 for a user deleted between listing
/// and enrichment.
pub async fn fetch_license_details(
    client: &GraphClient,
    user_id: &str,
) -> Result<Vec<LicenseDetail>> {
    let page: DirectoryPage<LicenseDetail> =
        client.get(&format!("users/{user_id}/licenseDetails")).await?;
    Ok(page.value)
}

/// Fetches the groups and directory roles one user is a direct member of.
///
/// Reads a single page, like [`fetch_license_details`]. Transitive
/// memberships are not expanded.
///
/// # Errors
///
/// Same contract as [`fetch_license_details`].
pub async fn fetch_group_memberships(
    client: &GraphClient,
    user_id: &str,
) -> Result<Vec<DirectoryObject>> {
    let page: DirectoryPage<DirectoryObject> =
        client.get(&format!("users/{user_id}/memberOf")).await?;
    Ok(page.value)
}
