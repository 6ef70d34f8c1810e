//! Per-person calling feature module (outgoing permissions, call intercept)

mod api;
mod models;

pub use models::{CallingPermission, InterceptOutgoing, InterceptSettings, OutgoingPermission};
