//! Cloud Controller HTTP client for API interactions

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;

use crate::cf::{ApiListResponse, Resource};
use crate::config::api;
use crate::error::{CfError, Result};

/// Cloud Controller API client
pub struct CfClient {
    client: Client,
    token: String,
    api_endpoint: String,
}

impl CfClient {
    /// Create a new client for the given API endpoint
    pub fn new(token: String, api_endpoint: String) -> Self {
        Self::with_ssl_validation(token, api_endpoint, true)
    }

    /// Create a client, optionally accepting invalid TLS certificates
    pub fn with_ssl_validation(token: String, api_endpoint: String, validate: bool) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(!validate)
            .build();

        Self {
            client: client_or_default(client),
            token,
            api_endpoint,
        }
    }

    /// Build the base URL for API requests
    ///
    /// Endpoints configured without a scheme are assumed to be HTTPS.
    pub(crate) fn base_url(&self) -> String {
        let endpoint = self.api_endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }

    /// Turn an API path (or an absolute URL) into a request URL
    pub(crate) fn resolve_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            return path_or_url.to_string();
        }
        if path_or_url.starts_with('/') {
            format!("{}{}", self.base_url(), path_or_url)
        } else {
            format!("{}/{}", self.base_url(), path_or_url)
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// A body that is not JSON at all is a transport failure; shape checks
    /// happen later in [`CfClient::get_json`].
    async fn parse_api_response(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<serde_json::Value> {
        if !response.status().is_success() {
            return Err(CfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// GET a path and decode the body into `T`
    pub(crate) async fn get_json<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.resolve_url(path);
        debug!("GET {}", url);

        let response = self.get(&url).send().await?;
        let raw = self.parse_api_response(response, error_context).await?;

        serde_json::from_value(raw)
            .map_err(|e| CfError::MalformedResponse(format!("{}: {}", error_context, e)))
    }

    /// Fetch every page of a collection that declares `total_pages`
    ///
    /// Page 1 is the bare `path`; pages 2..=total_pages re-issue the same
    /// query with an explicit `page=N` parameter. Records come back in
    /// page-then-in-page order.
    pub async fn fetch_all_pages<E, T, F>(
        &self,
        path: &str,
        error_context: &str,
        mut map: F,
    ) -> Result<Vec<T>>
    where
        E: DeserializeOwned,
        F: FnMut(Resource<E>) -> Result<T>,
    {
        let first: ApiListResponse<E> = self.get_json(path, error_context).await?;
        let total_pages = first.total_pages.ok_or_else(|| {
            CfError::MalformedResponse(format!("{}: missing total_pages", error_context))
        })?;

        debug!(
            "Page 1/{} of {}, total items: {}",
            total_pages,
            error_context,
            first.total_results.unwrap_or_default()
        );

        let mut all_items = map_resources(first.resources, &mut map)?;

        let separator = if path.contains('?') { "&" } else { "?" };
        for page_num in 2..=total_pages {
            let page_path = format!("{}{}{}={}", path, separator, api::PAGE_PARAM, page_num);
            let page_context = format!("{} (page {})", error_context, page_num);

            let page: ApiListResponse<E> = self.get_json(&page_path, &page_context).await?;
            debug!("Page {} returned {} items", page_num, page.resources.len());
            all_items.extend(map_resources(page.resources, &mut map)?);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Fetch every page of a collection by following `next_url`
    ///
    /// Stops at the first response without a next page. A `next_url` that
    /// points back at a page already fetched is rejected as malformed.
    pub async fn fetch_linked_pages<E, T, F>(
        &self,
        path: &str,
        error_context: &str,
        mut map: F,
    ) -> Result<Vec<T>>
    where
        E: DeserializeOwned,
        F: FnMut(Resource<E>) -> Result<T>,
    {
        let mut all_items = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(path.to_string());
        let mut page_num: u32 = 0;

        while let Some(current) = next.take() {
            if !visited.insert(current.clone()) {
                return Err(CfError::MalformedResponse(format!(
                    "{}: next_url '{}' points to a page already fetched",
                    error_context, current
                )));
            }
            page_num += 1;

            let page_context = if page_num == 1 {
                error_context.to_string()
            } else {
                format!("{} (page {})", error_context, page_num)
            };
            let page: ApiListResponse<E> = self.get_json(&current, &page_context).await?;
            debug!("Page {} returned {} items", page_num, page.resources.len());

            next = page.next_url.filter(|url| !url.is_empty());
            all_items.extend(map_resources(page.resources, &mut map)?);
        }

        debug!(
            "Fetched {} total items over {} pages for {}",
            all_items.len(),
            page_num,
            error_context
        );
        Ok(all_items)
    }
}

/// Use the configured client, or a default one when configuration failed
fn client_or_default(built: reqwest::Result<Client>) -> Client {
    built.unwrap_or_else(|e| {
        warn!(
            "Could not configure HTTP client ({}), falling back to defaults without timeouts or TLS overrides",
            e
        );
        Client::new()
    })
}

fn map_resources<E, T, F>(resources: Vec<Resource<E>>, map: &mut F) -> Result<Vec<T>>
where
    F: FnMut(Resource<E>) -> Result<T>,
{
    resources.into_iter().map(map).collect()
}

#[cfg(test)]
impl CfClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
