//! License module

mod api;
mod models;

pub use models::License;
