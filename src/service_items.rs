//! Service item listing.

use crate::client::Client;
use crate::error::Result;
use crate::query::QueryPairs;
use crate::types::{Application, Page, PointOfView, Service, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filters for listing service items.
///
/// Every field except `pov` is optional; `None` fields are omitted from the
/// query string. `pov` selects the path segment and never appears in the
/// query itself.
#[derive(Debug, Clone, Default)]
pub struct ServiceItemFilters {
    /// Point of view the request is scoped to.
    pub pov: PointOfView,
    /// Service item name.
    pub name: Option<String>,
    /// Runtime state of the service item.
    pub runtime_state: Option<String>,
    /// Change state of the service item.
    pub change_state: Option<String>,
    /// Exact declaration match.
    pub declaration: Option<String>,
    /// Owning application id.
    pub application_id: Option<String>,
    /// Consumer team id.
    pub consumer_team_id: Option<String>,
    /// Substring to search for in the declaration.
    pub declaration_contains: Option<String>,
    /// Regex pattern to match against the declaration.
    pub declaration_regex: Option<String>,
    /// Parent service id.
    pub service_id: Option<String>,
    /// Parent service name.
    pub service_name: Option<String>,
    /// Service owner id.
    pub service_owner_id: Option<String>,
    /// Service owner team id.
    pub service_owner_team_id: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Initial index from which to return results.
    pub offset: Option<u32>,
    /// Field to order results by.
    pub ordering: Option<String>,
}

impl ServiceItemFilters {
    /// Encode the set fields as a URL query string, sorted by wire key.
    pub fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push("name", self.name.as_deref());
        pairs.push("runtime_state", self.runtime_state.as_deref());
        pairs.push("change_state", self.change_state.as_deref());
        pairs.push("declaration", self.declaration.as_deref());
        pairs.push("application_id", self.application_id.as_deref());
        pairs.push("consumer_team_id", self.consumer_team_id.as_deref());
        pairs.push("declaration_contains", self.declaration_contains.as_deref());
        pairs.push("declaration_regex", self.declaration_regex.as_deref());
        pairs.push("service_id", self.service_id.as_deref());
        pairs.push("service_name", self.service_name.as_deref());
        pairs.push("service_owner_id", self.service_owner_id.as_deref());
        pairs.push("service_owner_team_id", self.service_owner_team_id.as_deref());
        pairs.push_int("limit", self.limit.map(i64::from));
        pairs.push_int("offset", self.offset.map(i64::from));
        pairs.push("ordering", self.ordering.as_deref());
        pairs.finish()
    }
}

/// A deployed instance of a catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Server-assigned identifier.
    pub id: i64,
    /// Canonical API URL for this service item.
    pub url: String,
    /// Service item name.
    pub name: String,
    /// When the service item was created.
    pub created: DateTime<Utc>,
    /// When the service item was last modified.
    pub modified: DateTime<Utc>,
    /// Runtime state, e.g. `IN_SERVICE`.
    pub runtime_state: String,
    /// Parent catalog service.
    pub service: Service,
    /// Application the service item belongs to.
    pub application: Application,
    /// Related resource URL, if any.
    #[serde(default)]
    pub related: Option<String>,
    /// Team owning the parent service.
    pub service_owner_team: Team,
    /// Team consuming the service item.
    pub consumer_team: Team,
    /// Change state, e.g. `CHANGES_APPROVED`.
    pub change_state: String,
    /// Opaque deployed-configuration document, round-tripped unexamined.
    #[serde(default)]
    pub deployed_item: serde_json::Value,
    /// Opaque declared-configuration document, round-tripped unexamined.
    #[serde(default)]
    pub declaration: serde_json::Value,
    /// Latest healthcheck status, if healthchecks are enabled.
    #[serde(default)]
    pub healthcheck_status: Option<String>,
    /// Whether the declaration validated against the minimum schema.
    #[serde(default)]
    pub is_validated_minimum_schema: bool,
    /// Whether the parent service schema is deprecated.
    #[serde(default)]
    pub is_deprecated_service_schema: bool,
    /// Whether the parent service is private.
    #[serde(default)]
    pub is_service_private: bool,
}

impl Client {
    /// List service items matching the given filters.
    ///
    /// One page per call; drive pagination with the returned cursors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, returns a non-200
    /// status or if the body cannot be decoded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use netorca_client::{Client, ServiceItemFilters};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let filters = ServiceItemFilters {
    ///     runtime_state: Some("IN_SERVICE".to_string()),
    ///     limit: Some(50),
    ///     ..Default::default()
    /// };
    /// let page = client.list_service_items(&filters).await?;
    /// for item in &page.results {
    ///     println!("{}: {}", item.id, item.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_service_items(
        &self,
        filters: &ServiceItemFilters,
    ) -> Result<Page<ServiceItem>> {
        self.list(filters.pov, "service_items", &filters.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_encode_to_empty_query() {
        assert_eq!(ServiceItemFilters::default().to_query(), "");
    }

    #[test]
    fn test_all_fields_set() {
        let filters = ServiceItemFilters {
            pov: PointOfView::ServiceOwner,
            name: Some("test".to_string()),
            runtime_state: Some("running".to_string()),
            change_state: Some("changed".to_string()),
            declaration: Some("declaration".to_string()),
            application_id: Some("app-id".to_string()),
            consumer_team_id: Some("team-id".to_string()),
            declaration_contains: Some("contains".to_string()),
            declaration_regex: Some("regex".to_string()),
            service_id: Some("service-id".to_string()),
            service_name: Some("service-name".to_string()),
            service_owner_id: Some("owner-id".to_string()),
            service_owner_team_id: Some("team-owner-id".to_string()),
            limit: Some(10),
            offset: None,
            ordering: Some("-created_at".to_string()),
        };
        assert_eq!(
            filters.to_query(),
            "application_id=app-id&change_state=changed&consumer_team_id=team-id\
             &declaration=declaration&declaration_contains=contains&declaration_regex=regex\
             &limit=10&name=test&ordering=-created_at&runtime_state=running\
             &service_id=service-id&service_name=service-name&service_owner_id=owner-id\
             &service_owner_team_id=team-owner-id"
        );
    }

    #[test]
    fn test_some_fields_set() {
        let filters = ServiceItemFilters {
            name: Some("test".to_string()),
            runtime_state: Some("running".to_string()),
            limit: Some(5),
            offset: Some(10),
            ordering: Some("name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            "limit=5&name=test&offset=10&ordering=name&runtime_state=running"
        );
    }

    #[test]
    fn test_explicit_zero_values_are_encoded() {
        // Option wrappers make "explicitly zero" representable; only None is
        // omitted.
        let filters = ServiceItemFilters {
            limit: Some(20),
            offset: Some(0),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), "limit=20&offset=0");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let filters = ServiceItemFilters {
            service_name: Some("web".to_string()),
            application_id: Some("7".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), filters.to_query());
    }
}
