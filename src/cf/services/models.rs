//! Service and service plan data models

use serde::Deserialize;

use crate::cf::Resource;
use crate::error::Result;

/// Service entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceEntity {
    pub label: String,
    pub service_plans_url: String,
}

/// Service record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub label: String,
    pub service_plans_url: String,
}

impl Service {
    /// Map a raw service resource into a record
    pub fn from_resource(resource: Resource<ServiceEntity>) -> Result<Self> {
        Ok(Self {
            label: resource.entity.label,
            service_plans_url: resource.entity.service_plans_url,
        })
    }
}

/// Service plan entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct ServicePlanEntity {
    pub name: String,
}

/// Service plan record; the GUID comes from the resource metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub guid: String,
    pub name: String,
}

impl ServicePlan {
    /// Map a raw service plan resource into a record
    pub fn from_resource(resource: Resource<ServicePlanEntity>) -> Result<Self> {
        let guid = resource.metadata.require_guid("service plan")?.to_string();
        Ok(Self {
            guid,
            name: resource.entity.name,
        })
    }
}
