//! Usage report model and assembly
//!
//! A [`Report`] is the fully populated snapshot handed to the formatters.
//! It is only ever built whole: any failure during the org/space traversal
//! aborts the run instead of producing a partial report.

mod builder;
mod commands;
mod filter;

pub use builder::{build_report, ReportOptions};
pub use commands::run_usage_report;
pub use filter::{resolve_service_plan_filter, ServicePlanFilter};

use crate::cf::{App, ServiceInstance};

/// Root of the usage report: organizations in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub orgs: Vec<OrgReport>,
}

/// Usage of one organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgReport {
    pub name: String,
    pub memory_quota_mb: u64,
    pub memory_usage_mb: u64,
    pub spaces: Vec<SpaceReport>,
}

/// Apps and filtered service instances of one space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceReport {
    pub name: String,
    pub apps: Vec<App>,
    pub service_instances: Vec<ServiceInstance>,
}

impl OrgReport {
    /// Memory committed by running apps across all spaces, saturating
    pub fn running_memory_mb(&self) -> u64 {
        self.spaces
            .iter()
            .map(SpaceReport::running_memory_mb)
            .fold(0, u64::saturating_add)
    }

    /// Usage as hundredths of a percent of quota, truncated
    ///
    /// `None` when the quota is zero.
    pub fn percent_used_hundredths(&self) -> Option<u64> {
        if self.memory_quota_mb == 0 {
            return None;
        }
        let hundredths =
            u128::from(self.memory_usage_mb) * 10_000 / u128::from(self.memory_quota_mb);
        Some(u64::try_from(hundredths).unwrap_or(u64::MAX))
    }

    /// Percentage used as `X.YY%`, or `N/A` for a zero quota
    pub fn percent_used_display(&self) -> String {
        match self.percent_used_hundredths() {
            Some(h) => format!("{}.{:02}%", h / 100, h % 100),
            None => "N/A".to_string(),
        }
    }
}

impl SpaceReport {
    /// Sum of RAM × instances over running apps, saturating
    pub fn running_memory_mb(&self) -> u64 {
        self.apps
            .iter()
            .filter(|app| app.running)
            .map(App::total_memory_mb)
            .fold(0, u64::saturating_add)
    }

    /// Number of apps in the running state
    pub fn running_app_count(&self) -> usize {
        self.apps.iter().filter(|app| app.running).count()
    }
}
