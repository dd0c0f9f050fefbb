//! App API operations

use crate::cf::CfClient;
use crate::error::Result;

use super::models::App;

impl CfClient {
    /// Get all apps of a space, following `next_url`
    pub async fn get_apps(&self, apps_url: &str) -> Result<Vec<App>> {
        self.fetch_linked_pages(apps_url, &format!("apps at {}", apps_url), App::from_resource)
            .await
    }
}
