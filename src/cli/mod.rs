//! CLI argument parsing

use clap::Parser;

use crate::config::{api, cf_config, defaults};

/// Usage report CLI
#[derive(Parser, Debug)]
#[command(name = "usage-report")]
#[command(version)]
#[command(about = "Report AI and memory usage for orgs and spaces", long_about = None)]
pub struct Cli {
    /// Organization name (if not specified, reports on all organizations)
    #[arg(short, long)]
    pub org: Option<String>,

    /// Output format: `csv`, anything else prints text
    #[arg(short, long)]
    pub format: Option<String>,

    /// Cloud Controller API endpoint (defaults to the `cf api` target)
    #[arg(long, env = cf_config::API_ENV_VAR)]
    pub api: Option<String>,

    /// Access token (defaults to the token stored by `cf login`)
    #[arg(long, env = cf_config::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Service label whose instances are reported (repeatable)
    #[arg(long = "service-label", value_name = "LABEL")]
    pub service_labels: Vec<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Output format selected by `--format`
    pub fn report_format(&self) -> ReportFormat {
        ReportFormat::from_flag(self.format.as_deref())
    }

    /// Service labels to report, falling back to the defaults
    pub fn service_labels(&self) -> Vec<String> {
        if self.service_labels.is_empty() {
            api::DEFAULT_SERVICE_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect()
        } else {
            self.service_labels.clone()
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned plain text (default)
    #[default]
    Text,
    /// Comma-separated values
    Csv,
}

impl ReportFormat {
    /// Only the exact value `csv` selects CSV
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("csv") => ReportFormat::Csv,
            _ => ReportFormat::Text,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}
