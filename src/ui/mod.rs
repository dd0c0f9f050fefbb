//! UI utilities for terminal output
//!
//! Progress feedback goes to stderr; stdout carries only the report.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
