//! Service and service plan API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Service, ServicePlan};

impl CfClient {
    /// Get all services whose label is one of `labels`
    pub async fn get_services(&self, labels: &[String]) -> Result<Vec<Service>> {
        let encoded: Vec<String> = labels
            .iter()
            .map(|label| urlencoding::encode(label).into_owned())
            .collect();
        let path = format!(
            "{}?{}{}",
            api::SERVICES,
            api::SERVICE_LABEL_QUERY,
            encoded.join(",")
        );
        debug!("Fetching services with labels {:?}", labels);

        self.fetch_all_pages(&path, "services", Service::from_resource)
            .await
    }

    /// Get all plans of a service
    pub async fn get_service_plans(&self, plans_url: &str) -> Result<Vec<ServicePlan>> {
        self.fetch_all_pages(
            plans_url,
            &format!("service plans at {}", plans_url),
            ServicePlan::from_resource,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CfError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_services_by_label() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services"))
            .and(query_param("q", "label IN p-redis,p-mysql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 1,
                "total_pages": 1,
                "resources": [{
                    "metadata": {"guid": "svc-1"},
                    "entity": {"label": "p-mysql", "service_plans_url": "/v2/services/svc-1/service_plans"}
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let labels = vec!["p-redis".to_string(), "p-mysql".to_string()];
        let services = client.get_services(&labels).await.unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].label, "p-mysql");
    }

    #[tokio::test]
    async fn test_get_service_plans() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services/svc-1/service_plans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 2,
                "total_pages": 1,
                "resources": [
                    {"metadata": {"guid": "plan-1"}, "entity": {"name": "100mb"}},
                    {"metadata": {"guid": "plan-2"}, "entity": {"name": "1gb"}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let plans = client
            .get_service_plans("/v2/services/svc-1/service_plans")
            .await
            .unwrap();

        let guids: Vec<&str> = plans.iter().map(|p| p.guid.as_str()).collect();
        assert_eq!(guids, vec!["plan-1", "plan-2"]);
    }

    #[tokio::test]
    async fn test_get_service_plans_server_error() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services/svc-1/service_plans"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = client
            .get_service_plans("/v2/services/svc-1/service_plans")
            .await;

        match result.unwrap_err() {
            CfError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("Expected CfError::Api, got {:?}", other),
        }
    }
}
