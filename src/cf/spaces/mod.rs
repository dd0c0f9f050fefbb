//! Space module

mod api;
mod models;

pub use models::{Space, SpaceEntity};
