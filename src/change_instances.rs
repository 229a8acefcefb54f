//! Change instance listing and state transitions.

use crate::client::Client;
use crate::error::Result;
use crate::query::QueryPairs;
use crate::service_items::ServiceItem;
use crate::types::{Application, Page, PointOfView, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a change instance.
///
/// Owned exclusively by the remote service; the client only requests
/// transitions and never validates them locally. Whether a transition from
/// the current state is legal is decided server-side, so an illegal request
/// surfaces as [`crate::ClientError::UpdateRejected`], not as a local error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeInstanceState {
    /// Awaiting a decision.
    Pending,
    /// Approved for deployment.
    Approved,
    /// Deployment finished.
    Completed,
    /// Closed without further action.
    Closed,
    /// Rejected by the service owner.
    Rejected,
    /// Deployment failed.
    Error,
}

impl ChangeInstanceState {
    /// Wire literal for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeInstanceState::Pending => "PENDING",
            ChangeInstanceState::Approved => "APPROVED",
            ChangeInstanceState::Completed => "COMPLETED",
            ChangeInstanceState::Closed => "CLOSED",
            ChangeInstanceState::Rejected => "REJECTED",
            ChangeInstanceState::Error => "ERROR",
        }
    }
}

impl fmt::Display for ChangeInstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for listing change instances.
///
/// Every field except `pov` is optional; `None` fields are omitted from the
/// query string.
#[derive(Debug, Clone, Default)]
pub struct ChangeInstanceFilters {
    /// Point of view the request is scoped to.
    pub pov: PointOfView,
    /// Type of change, e.g. `CREATE`, `MODIFY`, `DELETE`.
    pub change_type: Option<String>,
    /// Commit id of the associated submission.
    pub commit_id: Option<String>,
    /// Consumer team id.
    pub consumer_team_id: Option<String>,
    /// Exact declaration match.
    pub declaration: Option<String>,
    /// Substring to search for in the declaration.
    pub declaration_contains: Option<String>,
    /// Regex pattern to match against the declaration.
    pub declaration_regex: Option<String>,
    /// Exclude change instances referenced by others.
    pub exclude_referenced: Option<bool>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Last-modified timestamp to filter on.
    pub modified: Option<DateTime<Utc>>,
    /// Initial index from which to return results.
    pub offset: Option<u32>,
    /// Field to order results by.
    pub ordering: Option<String>,
    /// Parent service id.
    pub service_id: Option<String>,
    /// Associated service item id.
    pub service_item_id: Option<String>,
    /// Parent service name.
    pub service_name: Option<String>,
    /// Service owner team id.
    pub service_owner_team_id: Option<String>,
    /// Change instance state to filter on.
    pub state: Option<String>,
    /// Associated submission id.
    pub submission_id: Option<String>,
}

impl ChangeInstanceFilters {
    /// Encode the set fields as a URL query string, sorted by wire key.
    pub fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push("change_type", self.change_type.as_deref());
        pairs.push("commit_id", self.commit_id.as_deref());
        pairs.push("consumer_team_id", self.consumer_team_id.as_deref());
        pairs.push("declaration", self.declaration.as_deref());
        pairs.push("declaration_contains", self.declaration_contains.as_deref());
        pairs.push("declaration_regex", self.declaration_regex.as_deref());
        pairs.push_bool("exclude_referenced", self.exclude_referenced);
        pairs.push_int("limit", self.limit.map(i64::from));
        pairs.push_datetime("modified", self.modified);
        pairs.push_int("offset", self.offset.map(i64::from));
        pairs.push("ordering", self.ordering.as_deref());
        pairs.push("service_id", self.service_id.as_deref());
        pairs.push("service_item_id", self.service_item_id.as_deref());
        pairs.push("service_name", self.service_name.as_deref());
        pairs.push("service_owner_team_id", self.service_owner_team_id.as_deref());
        pairs.push("state", self.state.as_deref());
        pairs.push("submission_id", self.submission_id.as_deref());
        pairs.finish()
    }
}

/// The submission a change instance belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Server-assigned identifier.
    pub id: i64,
    /// Commit id associated with the submission.
    pub commit_id: String,
}

/// A versioned, opaque declaration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    /// Declaration version, server-incremented.
    pub version: i64,
    /// The declaration document itself, round-tripped unexamined.
    pub declaration: serde_json::Value,
}

/// Service summary embedded in a change instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInstanceService {
    /// Server-assigned identifier.
    pub id: i64,
    /// Service name.
    pub name: String,
    /// Whether manual approval is allowed for this service.
    pub allow_manual_approval: bool,
    /// Whether manual completion is allowed for this service.
    pub allow_manual_completion: bool,
}

/// A unit of requested infrastructure change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInstance {
    /// Server-assigned identifier.
    pub id: i64,
    /// Canonical API URL for this change instance.
    pub url: String,
    /// Current lifecycle state.
    pub state: ChangeInstanceState,
    /// When the change instance was created.
    pub created: DateTime<Utc>,
    /// When the change instance was last modified.
    pub modified: DateTime<Utc>,
    /// Type of change, e.g. `CREATE`, `MODIFY`, `DELETE`.
    pub change_type: String,
    /// Log message attached to the change instance.
    pub log: String,
    /// Team responsible for the service.
    pub owner: Team,
    /// Service item the change applies to.
    pub service_item: ServiceItem,
    /// Submission the change belongs to.
    pub submission: Submission,
    /// Declaration proposed by the change.
    pub new_declaration: Declaration,
    /// Team owning the parent service.
    pub service_owner_team: Team,
    /// Team consuming the service.
    pub consumer_team: Team,
    /// Parent service summary.
    pub service: ChangeInstanceService,
    /// Application the service item belongs to.
    pub application: Application,
    /// Whether this change depends on another change instance.
    pub is_dependant: bool,
    /// Declaration being replaced, absent for newly created items.
    #[serde(default)]
    pub old_declaration: Option<Declaration>,
}

/// PATCH body for a state transition.
#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    state: ChangeInstanceState,
    log: &'a str,
    deployed_item: &'a serde_json::Value,
}

impl Client {
    /// List change instances matching the given filters.
    ///
    /// One page per call; drive pagination with the returned cursors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, returns a non-200
    /// status or if the body cannot be decoded.
    pub async fn list_change_instances(
        &self,
        filters: &ChangeInstanceFilters,
    ) -> Result<Page<ChangeInstance>> {
        self.list(filters.pov, "change_instances", &filters.to_query())
            .await
    }

    /// Request a state transition for a change instance.
    ///
    /// Always performed from the service-owner point of view; there is no
    /// consumer-side update path. The server decides whether the transition
    /// is legal and returns the full updated entity on success.
    ///
    /// # Arguments
    ///
    /// * `id` - Change instance identifier
    /// * `state` - Target state
    /// * `log` - Log message to attach
    /// * `deployed_item` - Opaque deployed-item document, passed through
    ///   unexamined (may be `Value::Null`)
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::UpdateRejected`] with the status line
    /// and response body if the server refuses the transition.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use netorca_client::{Client, ChangeInstanceState};
    /// # use serde_json::json;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let updated = client
    ///     .update_change_instance(53, ChangeInstanceState::Approved, "looks good", json!({}))
    ///     .await?;
    /// println!("now {}", updated.state);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_change_instance(
        &self,
        id: i64,
        state: ChangeInstanceState,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        let path = format!("orcabase/serviceowner/change_instances/{}/", id);
        let body = UpdateBody {
            state,
            log,
            deployed_item: &deployed_item,
        };
        self.patch(&path, &body).await
    }

    /// Transition a change instance to `APPROVED`.
    pub async fn approve(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Approved, log, deployed_item)
            .await
    }

    /// Transition a change instance to `REJECTED`.
    pub async fn reject(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Rejected, log, deployed_item)
            .await
    }

    /// Transition a change instance to `COMPLETED`.
    pub async fn complete(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Completed, log, deployed_item)
            .await
    }

    /// Transition a change instance to `CLOSED`.
    pub async fn close(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Closed, log, deployed_item)
            .await
    }

    /// Transition a change instance to `ERROR`.
    pub async fn set_error(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Error, log, deployed_item)
            .await
    }

    /// Transition a change instance to `PENDING`.
    pub async fn set_pending(
        &self,
        id: i64,
        log: &str,
        deployed_item: serde_json::Value,
    ) -> Result<ChangeInstance> {
        self.update_change_instance(id, ChangeInstanceState::Pending, log, deployed_item)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_state_wire_literals() {
        for (state, literal) in [
            (ChangeInstanceState::Pending, "PENDING"),
            (ChangeInstanceState::Approved, "APPROVED"),
            (ChangeInstanceState::Completed, "COMPLETED"),
            (ChangeInstanceState::Closed, "CLOSED"),
            (ChangeInstanceState::Rejected, "REJECTED"),
            (ChangeInstanceState::Error, "ERROR"),
        ] {
            assert_eq!(state.as_str(), literal);
            assert_eq!(
                serde_json::to_string(&state).unwrap(),
                format!("\"{}\"", literal)
            );
        }
    }

    #[test]
    fn test_default_filters_encode_to_empty_query() {
        assert_eq!(ChangeInstanceFilters::default().to_query(), "");
    }

    #[test]
    fn test_filters_with_timestamp_and_bool() {
        let filters = ChangeInstanceFilters {
            state: Some("PENDING".to_string()),
            exclude_referenced: Some(true),
            modified: Some(Utc.with_ymd_and_hms(2025, 4, 9, 11, 18, 46).unwrap()),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            "exclude_referenced=true&limit=10&modified=2025-04-09T11%3A18%3A46Z&state=PENDING"
        );
    }

    #[test]
    fn test_filters_sorted_by_wire_key() {
        let filters = ChangeInstanceFilters {
            submission_id: Some("9".to_string()),
            change_type: Some("CREATE".to_string()),
            service_item_id: Some("35".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            "change_type=CREATE&service_item_id=35&submission_id=9"
        );
    }

    #[test]
    fn test_update_body_shape() {
        let deployed = json!({"comment": "approved"});
        let body = UpdateBody {
            state: ChangeInstanceState::Approved,
            log: "msg",
            deployed_item: &deployed,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "state": "APPROVED",
                "log": "msg",
                "deployed_item": {"comment": "approved"}
            })
        );
    }
}
