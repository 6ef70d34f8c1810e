//! Premise PSTN trunk module

mod api;
mod models;

pub use models::{RouteGroup, Trunk};
