//! Organization module

mod api;
mod models;
mod select;

pub use models::{decode_org_id, Organization};
pub use select::{displayed_org_count, select_organizations};
