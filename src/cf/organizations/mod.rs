//! Organization resources

mod api;
mod models;

pub use models::{OrgEntity, OrgResource};
