//! Service instance data models

use serde::Deserialize;

use crate::cf::Resource;
use crate::error::Result;

/// Service instance entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceInstanceEntity {
    pub name: String,
}

/// Service instance record used by the report builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub name: String,
}

impl ServiceInstance {
    /// Map a raw service instance resource into a record
    pub fn from_resource(resource: Resource<ServiceInstanceEntity>) -> Result<Self> {
        Ok(Self {
            name: resource.entity.name,
        })
    }
}
