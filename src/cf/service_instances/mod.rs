//! Service instance module

mod api;
mod models;

pub use models::{ServiceInstance, ServiceInstanceEntity};
