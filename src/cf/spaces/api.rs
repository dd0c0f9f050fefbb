//! Space API operations

use crate::cf::CfClient;
use crate::error::Result;

use super::models::Space;

impl CfClient {
    /// Get all spaces of an organization, following `next_url`
    pub async fn get_spaces(&self, spaces_url: &str) -> Result<Vec<Space>> {
        self.fetch_linked_pages(
            spaces_url,
            &format!("spaces at {}", spaces_url),
            Space::from_resource,
        )
        .await
    }
}
