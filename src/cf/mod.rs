//! Cloud Controller API client module
//!
//! Typed access to the v2 collections the usage report walks: organizations,
//! spaces, apps, service instances, services and service plans.

pub mod apps;
mod client;
mod credentials;
pub mod organizations;
pub mod service_instances;
pub mod services;
pub mod spaces;
mod target;

use serde::Deserialize;

use crate::error::{CfError, Result};

pub use apps::{App, AppEntity};
pub use client::CfClient;
pub use credentials::{CfConfigFile, TokenResolver};
pub use organizations::{Organization, OrganizationEntity};
pub use service_instances::{ServiceInstance, ServiceInstanceEntity};
pub use services::{Service, ServiceEntity, ServicePlan, ServicePlanEntity};
pub use spaces::{Space, SpaceEntity};
pub use target::{ApiTarget, TargetResolver};

/// List envelope shared by every v2 collection
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<E> {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<Resource<E>>,
}

/// A single v2 resource: metadata plus a typed entity
#[derive(Deserialize, Debug, Clone)]
pub struct Resource<E> {
    #[serde(default)]
    pub metadata: ResourceMetadata,
    pub entity: E,
}

/// Resource metadata
///
/// Both fields are optional on the wire; record mappers that need one call
/// the matching `require_*` accessor so absence surfaces as a malformed
/// response rather than a silent empty string.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResourceMetadata {
    pub guid: Option<String>,
    pub url: Option<String>,
}

impl ResourceMetadata {
    /// Get the GUID or fail with a malformed-response error
    pub fn require_guid(&self, kind: &str) -> Result<&str> {
        self.guid
            .as_deref()
            .ok_or_else(|| CfError::MalformedResponse(format!("{} is missing metadata.guid", kind)))
    }

    /// Get the URL or fail with a malformed-response error
    pub fn require_url(&self, kind: &str) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| CfError::MalformedResponse(format!("{} is missing metadata.url", kind)))
    }
}
