//! Service-plan filter applied to every space's service-instance listing

use log::{debug, warn};

use crate::cf::CfClient;
use crate::config::api;
use crate::error::{CfError, Result};

/// Which service instances a space listing should return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicePlanFilter {
    /// Only instances backed by one of these plan GUIDs
    Plans(Vec<String>),
    /// Every instance in the space (filter setup failed or was not requested)
    Unfiltered,
}

impl ServicePlanFilter {
    /// Build a filter from resolved plan GUIDs
    pub fn from_plans(guids: Vec<String>) -> Self {
        Self::Plans(guids)
    }

    /// The `q=` expression for this filter, if any
    pub fn query(&self) -> Option<String> {
        match self {
            Self::Plans(guids) if !guids.is_empty() => {
                let encoded: Vec<String> = guids
                    .iter()
                    .map(|guid| urlencoding::encode(guid).into_owned())
                    .collect();
                Some(format!("{}{}", api::SERVICE_PLAN_QUERY, encoded.join(",")))
            }
            _ => None,
        }
    }

    /// Location to list a space's instances with this filter applied
    ///
    /// `None` means no instance can match and no request should be made.
    pub fn apply(&self, instances_url: &str) -> Option<String> {
        match self {
            Self::Unfiltered => Some(instances_url.to_string()),
            Self::Plans(guids) if guids.is_empty() => None,
            Self::Plans(_) => {
                let query = self.query()?;
                let separator = if instances_url.contains('?') { '&' } else { '?' };
                Some(format!("{}{}{}", instances_url, separator, query))
            }
        }
    }
}

/// Resolve the plan filter for the given service labels
///
/// Lookup failures degrade to [`ServicePlanFilter::Unfiltered`] with a
/// warning; they never abort the report.
pub async fn resolve_service_plan_filter(
    client: &CfClient,
    labels: &[String],
) -> ServicePlanFilter {
    if labels.is_empty() {
        debug!("No service labels requested, listing all service instances");
        return ServicePlanFilter::Unfiltered;
    }

    match fetch_plan_guids(client, labels).await {
        Ok(guids) => {
            debug!("Service plan filter has {} plan(s)", guids.len());
            ServicePlanFilter::from_plans(guids)
        }
        Err(e) => {
            warn!("{}", CfError::FilterSetup(e.to_string()));
            warn!("Listing all service instances instead");
            ServicePlanFilter::Unfiltered
        }
    }
}

async fn fetch_plan_guids(client: &CfClient, labels: &[String]) -> Result<Vec<String>> {
    let services = client.get_services(labels).await?;
    debug!("Found {} matching service(s)", services.len());

    let mut guids = Vec::new();
    for service in &services {
        let plans = client.get_service_plans(&service.service_plans_url).await?;
        for plan in plans {
            debug!("Service {} plan {} ({})", service.label, plan.name, plan.guid);
            guids.push(plan.guid);
        }
    }
    Ok(guids)
}
