//! Output formatting module
//!
//! Renders a finished [`Report`] as text or CSV. Renderers are pure: they
//! only build a `String`, and printing is left to the caller.

mod common;
mod csv;
mod text;

use crate::cli::ReportFormat;
use crate::report::Report;

pub use self::common::escape_csv;
pub use self::csv::{CsvFormatter, CSV_HEADER};
pub use self::text::TextFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the whole report
    fn render(&self, report: &Report) -> String;
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: ReportFormat) -> String {
    let formatter: &dyn Formatter = match format {
        ReportFormat::Text => &TextFormatter,
        ReportFormat::Csv => &CsvFormatter,
    };
    formatter.render(report)
}

/// Print a report to stdout
pub fn output_report(report: &Report, format: ReportFormat) {
    print!("{}", render_report(report, format));
}
