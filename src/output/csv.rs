//! CSV output formatter

use std::fmt::Write;

use super::common::escape_csv;
use super::Formatter;
use crate::cf::App;
use crate::report::{OrgReport, Report, SpaceReport};

/// Column header; downstream spreadsheets key on these names
pub const CSV_HEADER: &str = "org_name,org_memory_quota_mb,org_memory_usage_mb,space_name,app_ram_mb,app_instances,app_memory_mb,app_running,service_instances";

/// Formatter for CSV output
///
/// One row per app. Spaces without apps and orgs without spaces still get a
/// row so their quota and instances are not lost.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", CSV_HEADER);

        for org in &report.orgs {
            if org.spaces.is_empty() {
                write_row(&mut out, org, None, None);
                continue;
            }
            for space in &org.spaces {
                if space.apps.is_empty() {
                    write_row(&mut out, org, Some(space), None);
                    continue;
                }
                for app in &space.apps {
                    write_row(&mut out, org, Some(space), Some(app));
                }
            }
        }
        out
    }
}

fn write_row(out: &mut String, org: &OrgReport, space: Option<&SpaceReport>, app: Option<&App>) {
    let (space_name, instances) = match space {
        Some(s) => (escape_csv(&s.name), escape_csv(&instance_names(s))),
        None => (String::new(), String::new()),
    };
    let app_columns = match app {
        Some(a) => format!(
            "{},{},{},{}",
            a.memory_mb,
            a.instances,
            a.total_memory_mb(),
            a.running
        ),
        None => ",,,".to_string(),
    };

    let _ = writeln!(
        out,
        "{},{},{},{},{},{}",
        escape_csv(&org.name),
        org.memory_quota_mb,
        org.memory_usage_mb,
        space_name,
        app_columns,
        instances
    );
}

fn instance_names(space: &SpaceReport) -> String {
    space
        .service_instances
        .iter()
        .map(|si| si.name.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
