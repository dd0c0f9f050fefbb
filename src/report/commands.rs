//! Usage report command

use log::{debug, info};
use std::io::IsTerminal;

use crate::cf::{CfClient, TargetResolver, TokenResolver};
use crate::cli::Cli;
use crate::error::Result;
use crate::output::output_report;
use crate::ui::{create_spinner, finish_spinner};

use super::builder::{build_report, ReportOptions};

/// Run the usage report: resolve credentials, fetch, render to stdout
pub async fn run_usage_report(cli: &Cli) -> Result<()> {
    let target = TargetResolver::new().resolve(cli.api.as_deref())?;
    let token = TokenResolver::new().resolve(cli.token.as_deref())?;

    if target.skip_ssl_validation {
        debug!("SSL validation disabled for {}", target.url);
    }
    let client =
        CfClient::with_ssl_validation(token, target.url, !target.skip_ssl_validation);

    let options = ReportOptions {
        org: cli.org.clone(),
        service_labels: cli.service_labels(),
    };
    let format = cli.report_format();
    debug!(
        "Report options: org={:?}, labels={:?}, format={}",
        options.org, options.service_labels, format
    );

    let message = match &options.org {
        Some(org) => format!("Fetching usage for organization '{}'...", org),
        None => "Fetching usage for all organizations...".to_string(),
    };
    let spinner = create_spinner(&message, !std::io::stderr().is_terminal());

    let result = build_report(&client, &options).await;
    finish_spinner(spinner);
    let report = result?;

    info!("Fetched {} organization(s)", report.orgs.len());
    output_report(&report, format);
    Ok(())
}
