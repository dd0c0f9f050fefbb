//! Service and service plan module
//!
//! Services and plans are only used to turn a set of service labels into
//! plan GUIDs for filtering service instances.

mod api;
mod models;

pub use models::{Service, ServiceEntity, ServicePlan, ServicePlanEntity};
