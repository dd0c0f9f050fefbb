//! Space data models

use serde::Deserialize;

use crate::cf::Resource;
use crate::error::Result;

/// Space entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
    pub apps_url: String,
    pub service_instances_url: String,
}

/// Space record used by the report builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub name: String,
    pub apps_url: String,
    pub service_instances_url: String,
}

impl Space {
    /// Map a raw space resource into a record
    pub fn from_resource(resource: Resource<SpaceEntity>) -> Result<Self> {
        Ok(Self {
            name: resource.entity.name,
            apps_url: resource.entity.apps_url,
            service_instances_url: resource.entity.service_instances_url,
        })
    }
}
