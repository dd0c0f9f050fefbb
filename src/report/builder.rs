//! Walks the org → space → app/instance graph into a [`Report`]

use log::{debug, info};

use crate::cf::{CfClient, Organization, Space};
use crate::config::api;
use crate::error::Result;

use super::filter::{resolve_service_plan_filter, ServicePlanFilter};
use super::{OrgReport, Report, SpaceReport};

/// What a report run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Restrict the report to one organization by exact name
    pub org: Option<String>,
    /// Service labels whose plans select the reported service instances
    pub service_labels: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            org: None,
            service_labels: api::DEFAULT_SERVICE_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}

/// Build the full usage report
///
/// The plan filter is resolved once up front and degrades on failure. Any
/// error after that point aborts the run.
pub async fn build_report(client: &CfClient, options: &ReportOptions) -> Result<Report> {
    let filter = resolve_service_plan_filter(client, &options.service_labels).await;

    let orgs = match options.org.as_deref() {
        Some(name) => vec![client.get_organization_by_name(name).await?],
        None => client.get_organizations().await?,
    };
    info!("Reporting on {} organization(s)", orgs.len());

    let mut reports = Vec::with_capacity(orgs.len());
    for org in &orgs {
        reports.push(build_org_report(client, org, &filter).await?);
    }

    Ok(Report { orgs: reports })
}

async fn build_org_report(
    client: &CfClient,
    org: &Organization,
    filter: &ServicePlanFilter,
) -> Result<OrgReport> {
    debug!("Building report for organization '{}'", org.name);

    let (memory_quota_mb, memory_usage_mb) = futures::try_join!(
        client.get_quota_memory_limit(&org.quota_url),
        client.get_org_memory_usage(org),
    )?;

    let spaces = client.get_spaces(&org.spaces_url).await?;
    let mut space_reports = Vec::with_capacity(spaces.len());
    for space in &spaces {
        space_reports.push(build_space_report(client, space, filter).await?);
    }

    Ok(OrgReport {
        name: org.name.clone(),
        memory_quota_mb,
        memory_usage_mb,
        spaces: space_reports,
    })
}

async fn build_space_report(
    client: &CfClient,
    space: &Space,
    filter: &ServicePlanFilter,
) -> Result<SpaceReport> {
    debug!("Building report for space '{}'", space.name);

    let apps = client.get_apps(&space.apps_url).await?;
    let service_instances = match filter.apply(&space.service_instances_url) {
        Some(url) => client.get_service_instances(&url).await?,
        None => {
            debug!("No service plans to match in space '{}'", space.name);
            Vec::new()
        }
    };

    Ok(SpaceReport {
        name: space.name.clone(),
        apps,
        service_instances,
    })
}
