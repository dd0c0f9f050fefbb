//! Service instance API operations

use crate::cf::CfClient;
use crate::error::Result;

use super::models::ServiceInstance;

impl CfClient {
    /// Get all service instances at a location
    ///
    /// `instances_url` carries any plan filter the caller wants applied.
    pub async fn get_service_instances(&self, instances_url: &str) -> Result<Vec<ServiceInstance>> {
        self.fetch_all_pages(
            instances_url,
            &format!("service instances at {}", instances_url),
            ServiceInstance::from_resource,
        )
        .await
    }
}
