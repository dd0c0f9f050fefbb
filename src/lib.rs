//! usage-report - Memory and service usage across Cloud Foundry orgs and spaces
//!
//! Walks the Cloud Controller v2 API (organizations, spaces, apps and
//! service instances) and renders one report as aligned text or CSV.
//!
//! # Example
//!
//! ```bash
//! # Report on every organization the logged-in user can see
//! usage-report
//!
//! # One organization, as CSV
//! usage-report --org my-org --format csv
//!
//! # Explicit endpoint and token, only Redis instances
//! usage-report --api https://api.sys.example.com --token "$TOKEN" --service-label p-redis
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod ui;

pub use cf::{ApiTarget, CfClient, TargetResolver, TokenResolver};
pub use cli::{Cli, ReportFormat};
pub use error::{CfError, Result};
pub use output::{output_report, render_report, CsvFormatter, Formatter, TextFormatter};
pub use report::{
    build_report, run_usage_report, OrgReport, Report, ReportOptions, ServicePlanFilter,
    SpaceReport,
};
