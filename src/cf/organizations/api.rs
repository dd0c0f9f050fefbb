//! Organization API operations

use log::debug;

use crate::cf::{ApiListResponse, CfClient};
use crate::config::api;
use crate::error::{CfError, Result};

use super::models::{
    MemoryUsageResponse, Organization, OrganizationEntity, QuotaDefinitionResponse,
};

impl CfClient {
    /// Get all organizations visible to the token
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        debug!("Fetching all organizations");
        self.fetch_all_pages(
            api::ORGANIZATIONS,
            "organizations",
            Organization::from_resource,
        )
        .await
    }

    /// Get a single organization by its exact name
    pub async fn get_organization_by_name(&self, name: &str) -> Result<Organization> {
        let query = urlencoding::encode(&format!("name:{}", name)).into_owned();
        let path = format!(
            "{}?q={}&{}",
            api::ORGANIZATIONS,
            query,
            api::INLINE_RELATIONS
        );
        debug!("Fetching organization by name: {}", name);

        let response: ApiListResponse<OrganizationEntity> = self
            .get_json(&path, &format!("organization '{}'", name))
            .await?;

        if response.total_results == Some(0) {
            return Err(org_not_found(name));
        }
        match response.resources.into_iter().next() {
            Some(resource) => Organization::from_resource(resource),
            None => Err(org_not_found(name)),
        }
    }

    /// Memory limit (MB) of a quota definition
    pub async fn get_quota_memory_limit(&self, quota_url: &str) -> Result<u64> {
        let quota: QuotaDefinitionResponse = self
            .get_json(quota_url, &format!("quota definition {}", quota_url))
            .await?;
        Ok(quota.entity.memory_limit)
    }

    /// Memory (MB) currently consumed by an organization
    pub async fn get_org_memory_usage(&self, org: &Organization) -> Result<u64> {
        let usage: MemoryUsageResponse = self
            .get_json(
                &org.memory_usage_url(),
                &format!("memory usage for organization '{}'", org.name),
            )
            .await?;
        Ok(usage.memory_usage_in_mb)
    }
}

fn org_not_found(name: &str) -> CfError {
    CfError::NotFound(format!("organization '{}' not found", name))
}
