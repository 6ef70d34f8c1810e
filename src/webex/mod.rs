//! Webex Calling API client module
//!
//! Partner-scoped access to organizations, licenses, numbers, person
//! features and premise trunks.

mod client;
pub mod licenses;
pub mod numbers;
pub mod organizations;
pub mod people;
pub mod trunks;

pub(crate) use client::request_failed;
pub use client::WebexClient;
pub use licenses::License;
pub use numbers::{NumberOwner, PhoneNumber};
pub use organizations::{decode_org_id, displayed_org_count, select_organizations, Organization};
pub use people::{CallingPermission, InterceptSettings, OutgoingPermission};
pub use trunks::{RouteGroup, Trunk};
