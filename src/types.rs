//! Shared type definitions for the NetOrca client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API path segment a request is scoped to.
///
/// Selects whether a call targets the `serviceowner` or `consumer` side of
/// the API. Consumed when building the request path; never part of the query
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointOfView {
    /// Requests scoped to the team owning the service.
    #[default]
    ServiceOwner,
    /// Requests scoped to the team consuming the service.
    Consumer,
}

impl PointOfView {
    /// Path segment used in request URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            PointOfView::ServiceOwner => "serviceowner",
            PointOfView::Consumer => "consumer",
        }
    }
}

impl fmt::Display for PointOfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of a paginated list response.
///
/// `next` and `previous` are opaque absolute cursor URLs, absent on the
/// first/last page. `results` preserves server-returned order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Total number of results across all pages.
    pub count: i64,
    /// Cursor URL for the next page, if any.
    pub next: Option<String>,
    /// Cursor URL for the previous page, if any.
    pub previous: Option<String>,
    /// Results on this page.
    #[serde(default)]
    pub results: Vec<T>,
}

/// A team entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: i64,
    /// Team name.
    pub name: String,
    /// Opaque team metadata document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// An owner entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// Unique owner identifier.
    pub id: i64,
    /// Owner name.
    pub name: String,
}

/// An application entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: i64,
    /// Application name.
    pub name: String,
    /// Opaque application metadata document.
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Identifier of the owning team.
    pub owner: i64,
}

/// A catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Unique service identifier.
    pub id: i64,
    /// Service name.
    pub name: String,
    /// Team owning the service.
    pub owner: Owner,
    /// Service state.
    pub state: String,
    /// Whether healthchecks are enabled for the service.
    pub healthcheck: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pov_path_segments() {
        assert_eq!(PointOfView::ServiceOwner.as_str(), "serviceowner");
        assert_eq!(PointOfView::Consumer.as_str(), "consumer");
        assert_eq!(PointOfView::default(), PointOfView::ServiceOwner);
    }

    #[test]
    fn test_empty_page_decodes_to_empty_results() {
        let page: Page<Team> = serde_json::from_value(json!({
            "count": 0,
            "next": null,
            "previous": null,
            "results": []
        }))
        .unwrap();

        assert_eq!(page.count, 0);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_preserves_result_order_and_cursors() {
        let page: Page<Owner> = serde_json::from_value(json!({
            "count": 3,
            "next": "http://api.example.com/v1/orcabase/serviceowner/service_items?offset=2",
            "previous": null,
            "results": [
                {"id": 3, "name": "c"},
                {"id": 1, "name": "a"},
            ]
        }))
        .unwrap();

        assert_eq!(page.count, 3);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].id, 3);
        assert_eq!(page.results[1].id, 1);
    }
}
