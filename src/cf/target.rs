//! API endpoint resolution from multiple sources

use log::debug;
use std::path::{Path, PathBuf};

use crate::cf::CfConfigFile;
use crate::config::cf_config;
use crate::error::{CfError, Result};

/// Resolved API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    pub url: String,
    /// Only set when the endpoint came from a config file with `SSLDisabled`
    pub skip_ssl_validation: bool,
}

/// API endpoint resolution with fallback logic
pub struct TargetResolver {
    config_path: Option<PathBuf>,
}

impl TargetResolver {
    /// Create a resolver reading the default CF CLI config file
    pub fn new() -> Self {
        Self {
            config_path: CfConfigFile::default_path(),
        }
    }

    /// Create a resolver reading a specific config file
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Resolve the API endpoint with fallback:
    /// 1. CLI argument or `CF_API` (if provided)
    /// 2. `Target` in the CF CLI config file
    pub fn resolve(&self, cli_api: Option<&str>) -> Result<ApiTarget> {
        if let Some(api) = cli_api.map(str::trim).filter(|a| !a.is_empty()) {
            debug!("Using API endpoint from CLI argument: {}", api);
            return Ok(ApiTarget {
                url: api.to_string(),
                skip_ssl_validation: false,
            });
        }

        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| CfError::TargetNotFound(target_not_found_message(None)))?;

        debug!("Looking for API endpoint in {}", path.display());

        let config = CfConfigFile::load(path)?;
        match config.as_ref().and_then(|c| c.target().map(|t| (t, c.ssl_disabled))) {
            Some((target, ssl_disabled)) => {
                debug!(
                    "Using API endpoint {} from CF config file {}",
                    target,
                    path.display()
                );
                Ok(ApiTarget {
                    url: target.to_string(),
                    skip_ssl_validation: ssl_disabled,
                })
            }
            None => Err(CfError::TargetNotFound(target_not_found_message(Some(path)))),
        }
    }
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn target_not_found_message(config_path: Option<&Path>) -> String {
    let checked = config_path
        .map(|p| format!(" Checked: {}", p.display()))
        .unwrap_or_default();
    format!(
        "No API endpoint set. Run `cf api <URL>`, or pass --api / set {}.{}",
        cf_config::API_ENV_VAR,
        checked
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_cli_api_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{"Target": "https://api.file.example.com", "SSLDisabled": true}"#,
        );
        let target = TargetResolver::with_config_path(path)
            .resolve(Some("https://api.cli.example.com"))
            .unwrap();
        assert_eq!(target.url, "https://api.cli.example.com");
        assert!(!target.skip_ssl_validation);
    }

    #[test]
    fn test_target_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{"Target": "https://api.file.example.com", "SSLDisabled": true}"#,
        );
        let target = TargetResolver::with_config_path(path).resolve(None).unwrap();
        assert_eq!(
            target,
            ApiTarget {
                url: "https://api.file.example.com".to_string(),
                skip_ssl_validation: true,
            }
        );
    }

    #[test]
    fn test_blank_cli_api_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"Target": "https://api.file.example.com"}"#);
        let target = TargetResolver::with_config_path(path)
            .resolve(Some("  "))
            .unwrap();
        assert_eq!(target.url, "https://api.file.example.com");
    }

    #[test]
    fn test_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"Target": ""}"#);
        match TargetResolver::with_config_path(path).resolve(None).unwrap_err() {
            CfError::TargetNotFound(msg) => assert!(msg.contains("cf api")),
            other => panic!("Expected TargetNotFound, got {:?}", other),
        }
    }
}
