//! Space resources

mod api;
mod models;

pub use models::{SpaceEntity, SpaceResource};
