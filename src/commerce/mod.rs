//! Commerce subscription API module
//!
//! Looks up subscription start/end dates for the subscription ids found on
//! an organization's calling licenses.

mod client;
mod models;

pub use client::CommerceClient;
pub use models::{format_subscription_date, subscription_term, SubscriptionTerm};

#[cfg(test)]
pub(crate) use models::purchase_order_json;
