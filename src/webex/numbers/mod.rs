//! Phone number module

mod api;
mod models;

pub use models::{NumberLocation, NumberOwner, PhoneNumber};
