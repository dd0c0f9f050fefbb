//! Organization data models

use serde::Deserialize;

use crate::cf::Resource;
use crate::config::api;
use crate::error::Result;

/// Organization entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct OrganizationEntity {
    pub name: String,
    pub quota_definition_url: String,
    pub spaces_url: String,
}

/// Organization record used by the report builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub quota_url: String,
    pub spaces_url: String,
}

impl Organization {
    /// Map a raw organization resource into a record
    pub fn from_resource(resource: Resource<OrganizationEntity>) -> Result<Self> {
        let url = resource.metadata.require_url("organization")?.to_string();
        Ok(Self {
            name: resource.entity.name,
            url,
            quota_url: resource.entity.quota_definition_url,
            spaces_url: resource.entity.spaces_url,
        })
    }

    /// URL of the derived memory usage sub-resource
    pub fn memory_usage_url(&self) -> String {
        format!("{}{}", self.url, api::MEMORY_USAGE_SUFFIX)
    }
}

/// Quota definition resource (only the memory limit matters here)
#[derive(Deserialize, Debug)]
pub(super) struct QuotaDefinitionResponse {
    pub entity: QuotaDefinitionEntity,
}

#[derive(Deserialize, Debug)]
pub(super) struct QuotaDefinitionEntity {
    pub memory_limit: u64,
}

/// Response of `<org>/memory_usage`
#[derive(Deserialize, Debug)]
pub(super) struct MemoryUsageResponse {
    pub memory_usage_in_mb: u64,
}
