//! Type-safe Rust client for the NetOrca workflow-automation API.
//!
//! This crate authenticates requests with an `Api-Key` header, translates
//! structured filter objects into deterministic query strings, issues HTTP
//! calls bounded by a per-call timeout, and decodes JSON responses into typed
//! domain objects. Change instances additionally expose a state-transition
//! protocol driven through PATCH calls.
//!
//! # Example
//!
//! ```no_run
//! use netorca_client::{ChangeInstanceFilters, Client, PointOfView};
//! use serde_json::json;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     "https://api.example.com",
//!     std::env::var("API_KEY")?,
//!     "v1",
//!     Duration::from_secs(5),
//! )?;
//!
//! // List pending change instances from the service-owner side.
//! let filters = ChangeInstanceFilters {
//!     pov: PointOfView::ServiceOwner,
//!     state: Some("PENDING".to_string()),
//!     ..Default::default()
//! };
//! let page = client.list_change_instances(&filters).await?;
//!
//! // Approve the first one; transition legality is decided server-side.
//! if let Some(instance) = page.results.first() {
//!     let updated = client
//!         .approve(instance.id, "approved by automation", json!({}))
//!         .await?;
//!     println!("{} is now {}", updated.id, updated.state);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Pagination
//!
//! List operations return one [`Page`] per call. The `next` and `previous`
//! cursors are opaque URLs; callers drive pagination themselves, typically by
//! bumping `offset`. There is no auto-traversal, no retry policy and no
//! caching in this crate.
//!
//! # Error handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use netorca_client::{Client, ClientError, ServiceItemFilters};
//! # async fn example(client: Client) -> Result<(), ClientError> {
//! match client.list_service_items(&ServiceItemFilters::default()).await {
//!     Ok(page) => println!("{} items", page.count),
//!     Err(ClientError::Timeout) => println!("deadline elapsed"),
//!     Err(e) => println!("error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod change_instances;
mod client;
mod config;
mod error;
mod query;
mod service_items;
mod types;

pub use change_instances::{
    ChangeInstance, ChangeInstanceFilters, ChangeInstanceService, ChangeInstanceState,
    Declaration, Submission,
};
pub use client::Client;
pub use config::{Config, ConfigError};
pub use error::{ClientError, Result};
pub use service_items::{ServiceItem, ServiceItemFilters};
pub use types::{Application, Owner, Page, PointOfView, Service, Team};
