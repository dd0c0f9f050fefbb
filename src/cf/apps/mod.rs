//! App module

mod api;
mod models;

pub use models::{App, AppEntity};
