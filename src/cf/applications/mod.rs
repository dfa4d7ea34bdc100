//! Application resources: v2 list and v3 detail

mod api;
mod models;

pub use models::{AppDetail, AppEntity, AppMetadata, AppResource};
