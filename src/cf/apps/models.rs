//! App data models

use serde::Deserialize;

use crate::cf::Resource;
use crate::config::api;
use crate::error::Result;

/// App entity from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct AppEntity {
    pub instances: u32,
    /// Memory per instance in MB
    pub memory: u64,
    #[serde(default)]
    pub state: Option<String>,
}

/// App record used by the report builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct App {
    pub instances: u32,
    pub memory_mb: u64,
    pub running: bool,
}

impl App {
    /// Map a raw app resource into a record
    pub fn from_resource(resource: Resource<AppEntity>) -> Result<Self> {
        let entity = resource.entity;
        Ok(Self {
            instances: entity.instances,
            memory_mb: entity.memory,
            running: is_started(entity.state.as_deref()),
        })
    }

    /// Memory committed by all instances (RAM × instances), saturating
    pub fn total_memory_mb(&self) -> u64 {
        self.memory_mb.saturating_mul(u64::from(self.instances))
    }
}

/// Only the exact `STARTED` state counts as running
pub fn is_started(state: Option<&str>) -> bool {
    state == Some(api::STARTED_STATE)
}
