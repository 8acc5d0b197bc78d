//! Flattening users into CSV rows and writing the output table.
//!
//! [`UserSummary`] is the six-column row shape of the output file. Mapping
//! from API objects to rows is pure ([`UserSummary::from_parts`]);
//! [`build_user_summaries`] drives the per-user enrichment fetches
//! sequentially; [`write_summary_csv`] owns the file format.

use std::fs;
use std::path::Path;

use crate::client::GraphClient;
use crate::enrichment::{self, DirectoryObject, LicenseDetail};
use crate::error::Result;
use crate::users::User;

/// Default location of the output table.
pub const DEFAULT_OUTPUT_PATH: &str = "/data/out/tables/users_summary.csv";

/// Column headers of the output table, in output order.
pub const CSV_HEADERS: [&str; 6] = [
    "Display Name",
    "User Principal Name",
    "ID",
    "Account Enabled",
    "Licenses",
    "Groups",
];

/// One row of the output table.
///
/// All fields are strings: absent source values become empty strings, and
/// multi-valued fields are pre-joined with `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// The user's display name, or empty.
    pub display_name: String,
    /// The user's UPN, or empty.
    pub user_principal_name: String,
    /// Directory object identifier.
    pub id: String,
    /// `"true"`, `"false"`, or empty when the field was absent.
    pub account_enabled: String,
    /// SKU part numbers joined with `", "`. A license without a part
    /// number contributes an empty element, so the separator count still
    /// reflects the number of assignments.
    pub licenses: String,
    /// Membership display names joined with `", "`, same element rule as
    /// `licenses`.
    pub groups: String,
}

impl UserSummary {
    /// Flattens one user and its enrichment collections into a row.
    ///
    /// Pure string formatting, no I/O. Ordering within `licenses` and
    /// `groups` is the order the API returned.
    pub fn from_parts(
        user: &User,
        licenses: &[LicenseDetail],
        groups: &[DirectoryObject],
    ) -> UserSummary {
        let licenses = licenses
            .iter()
            .map(|lic| lic.sku_part_number.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ");

        let groups = groups
            .iter()
            .map(|group| group.display_name.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ");

        UserSummary {
            display_name: user.display_name.clone().unwrap_or_default(),
            user_principal_name: user.user_principal_name.clone().unwrap_or_default(),
            id: user.id.clone(),
            account_enabled: user
                .account_enabled
                .map(|enabled| enabled.to_string())
                .unwrap_or_default(),
            licenses,
            groups,
        }
    }
}

/// Enriches every user and maps it to a [`UserSummary`], preserving the
/// input order.
///
/// Fetches run strictly sequentially, two GETs per user. The first failed
/// fetch aborts the whole build; there is no per-user skip.
///
/// # Errors
///
/// Propagates any [`GraphError`](crate::error::GraphError) from the
/// enrichment fetches.
pub async fn build_user_summaries(
    client: &GraphClient,
    users: &[User],
) -> Result<Vec<UserSummary>> {
    let mut rows = Vec::with_capacity(users.len());

    for user in users {
        let licenses = enrichment::fetch_license_details(client, &user.id).await?;
        let groups = enrichment::fetch_group_memberships(client, &user.id).await?;
        rows.push(UserSummary::from_parts(user, &licenses, &groups));
    }

    Ok(rows)
}

/// Writes the header and one record per row to `path` as CSV.
///
/// Parent directories are created if missing. An existing file is
/// truncated and replaced; the write is not atomic, so a failure partway
/// through can leave a partial file behind.
///
/// # Errors
///
/// Returns [`GraphError::Io`](crate::error::GraphError::Io) when the
/// parent directory cannot be created and
/// [`GraphError::Csv`](crate::error::GraphError::Csv) when the file or a
/// record cannot be written.
pub fn write_summary_csv(rows: &[UserSummary], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADERS)?;

    for row in rows {
        writer.write_record([
            &row.display_name,
            &row.user_principal_name,
            &row.id,
            &row.account_enabled,
            &row.licenses,
            &row.groups,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_str(
            r#"{
                "id": "user-a",
                "displayName": "User A",
                "userPrincipalName": "a@contoso.com",
                "accountEnabled": true
            }"#,
        )
        .unwrap()
    }

    fn license(part_number: Option<&str>) -> LicenseDetail {
        let json = match part_number {
            Some(part) => format!(r#"{{"id": "detail", "skuPartNumber": "{part}"}}"#),
            None => r#"{"id": "detail"}"#.to_string(),
        };
        serde_json::from_str(&json).unwrap()
    }

    fn group(name: &str) -> DirectoryObject {
        serde_json::from_str(&format!(r#"{{"id": "g", "displayName": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn empty_collections_become_empty_strings() {
        let row = UserSummary::from_parts(&sample_user(), &[], &[]);
        assert_eq!(row.licenses, "");
        assert_eq!(row.groups, "");
    }

    #[test]
    fn multiple_values_join_with_comma_space() {
        let row = UserSummary::from_parts(
            &sample_user(),
            &[license(Some("E3")), license(Some("E5"))],
            &[group("Sales"), group("Engineering")],
        );
        assert_eq!(row.licenses, "E3, E5");
        assert_eq!(row.groups, "Sales, Engineering");
    }

    #[test]
    fn license_without_part_number_contributes_empty_element() {
        let row = UserSummary::from_parts(
            &sample_user(),
            &[license(Some("E3")), license(None)],
            &[],
        );
        assert_eq!(row.licenses, "E3, ");
    }

    #[test]
    fn account_enabled_formats_as_lowercase_bool() {
        let mut user = sample_user();
        let row = UserSummary::from_parts(&user, &[], &[]);
        assert_eq!(row.account_enabled, "true");

        user.account_enabled = Some(false);
        let row = UserSummary::from_parts(&user, &[], &[]);
        assert_eq!(row.account_enabled, "false");

        user.account_enabled = None;
        let row = UserSummary::from_parts(&user, &[], &[]);
        assert_eq!(row.account_enabled, "");
    }

    #[test]
    fn absent_names_become_empty_strings() {
        let user: User = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        let row = UserSummary::from_parts(&user, &[], &[]);
        assert_eq!(row.display_name, "");
        assert_eq!(row.user_principal_name, "");
        assert_eq!(row.id, "bare");
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users_summary.csv");

        let rows = vec![UserSummary {
            display_name: "User A".to_string(),
            user_principal_name: "a@contoso.com".to_string(),
            id: "user-a".to_string(),
            account_enabled: "true".to_string(),
            licenses: "E3".to_string(),
            groups: "Sales".to_string(),
        }];

        write_summary_csv(&rows, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Display Name,User Principal Name,ID,Account Enabled,Licenses,Groups"
        );
        assert_eq!(lines[1], "User A,a@contoso.com,user-a,true,E3,Sales");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn joined_fields_are_quoted() {
        // "E3, E5" contains a comma, so the csv writer must quote it to
        // keep the row at six columns.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![UserSummary {
            display_name: "User A".to_string(),
            user_principal_name: "a@contoso.com".to_string(),
            id: "user-a".to_string(),
            account_enabled: "true".to_string(),
            licenses: "E3, E5".to_string(),
            groups: "Sales".to_string(),
        }];

        write_summary_csv(&rows, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(
            contents.contains("\"E3, E5\""),
            "comma-bearing field must be quoted, got: {contents}"
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 6);
        assert_eq!(&record[4], "E3, E5");
    }

    #[test]
    fn empty_row_set_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_summary_csv(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Display Name,User Principal Name,ID,Account Enabled,Licenses,Groups\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content from a previous run\nrow,row,row\n").unwrap();

        write_summary_csv(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(
            !contents.contains("stale"),
            "previous contents must be truncated"
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tables").join("users_summary.csv");

        write_summary_csv(&[], &path).unwrap();

        assert!(path.exists());
    }
}
