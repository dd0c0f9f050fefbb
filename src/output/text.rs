//! Plain text output formatter

use comfy_table::{presets::NOTHING, CellAlignment, Table};
use std::fmt::Write;

use super::Formatter;
use crate::cf::App;
use crate::report::{OrgReport, Report, SpaceReport};

/// Formatter for human-readable text
///
/// Org blocks are separated by a blank line. App lines within a space are
/// laid out as a borderless table.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        for (i, org) in report.orgs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_org(&mut out, org);
        }
        out
    }
}

fn write_org(out: &mut String, org: &OrgReport) {
    let _ = writeln!(
        out,
        "Org {}: using {} MB of {} MB quota ({})",
        org.name,
        org.memory_usage_mb,
        org.memory_quota_mb,
        org.percent_used_display()
    );
    if org.spaces.is_empty() {
        let _ = writeln!(out, "  no spaces");
    }
    for space in &org.spaces {
        write_space(out, space);
    }
    let _ = writeln!(out, "  total running memory: {} MB", org.running_memory_mb());
}

fn write_space(out: &mut String, space: &SpaceReport) {
    let _ = writeln!(
        out,
        "  Space {}: {} of {} apps running",
        space.name,
        space.running_app_count(),
        space.apps.len()
    );

    if space.apps.is_empty() {
        let _ = writeln!(out, "    no apps");
    } else {
        for line in app_table(&space.apps).lines() {
            let _ = writeln!(out, "    {}", line.trim_end());
        }
    }

    if space.service_instances.is_empty() {
        let _ = writeln!(out, "    service instances: none");
    } else {
        let names: Vec<&str> = space
            .service_instances
            .iter()
            .map(|si| si.name.as_str())
            .collect();
        let _ = writeln!(out, "    service instances: {}", names.join(", "));
    }

    let _ = writeln!(out, "    running memory: {} MB", space.running_memory_mb());
}

/// Borderless app table with right-aligned numeric columns
fn app_table(apps: &[App]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    for (i, app) in apps.iter().enumerate() {
        table.add_row(vec![
            "app".to_string(),
            format!("{}:", i + 1),
            app.instances.to_string(),
            "x".to_string(),
            app.memory_mb.to_string(),
            "MB".to_string(),
            "=".to_string(),
            app.total_memory_mb().to_string(),
            "MB".to_string(),
            if app.running { "(running)" } else { "(stopped)" }.to_string(),
        ]);
    }

    for (index, column) in table.column_iter_mut().enumerate() {
        column.set_padding((0, 1));
        if NUMERIC_COLUMNS.contains(&index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Index, instances, RAM and total
const NUMERIC_COLUMNS: [usize; 4] = [1, 2, 4, 7];
