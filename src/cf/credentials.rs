//! Access token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::cf_config;
use crate::error::{CfError, Result};

/// The parts of the CF CLI config file (`~/.cf/config.json`) this tool reads
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CfConfigFile {
    #[serde(rename = "Target", default)]
    pub target: Option<String>,
    #[serde(rename = "AccessToken", default)]
    pub access_token: Option<String>,
    #[serde(rename = "SSLDisabled", default)]
    pub ssl_disabled: bool,
}

impl CfConfigFile {
    /// Location of the config file: `$CF_HOME/.cf/config.json`, else `~/.cf/config.json`
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(cf_config::HOME_ENV_VAR) {
            Some(home) if !home.is_empty() => Some(PathBuf::from(home).join(cf_config::FILE_PATH)),
            _ => dirs::home_dir().map(|p| p.join(cf_config::FILE_PATH)),
        }
    }

    /// Load the config file, returning `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("CF config file {} does not exist", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|e| {
            CfError::Credentials(format!(
                "Could not parse CF config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(config))
    }

    /// Target endpoint, ignoring empty values left behind by `cf logout`
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Access token without its `bearer ` prefix
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(strip_bearer_prefix)
            .filter(|t| !t.is_empty())
    }
}

/// Drop a leading `bearer ` scheme (any case) from a token
pub(crate) fn strip_bearer_prefix(token: &str) -> &str {
    let trimmed = token.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    config_path: Option<PathBuf>,
}

impl TokenResolver {
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

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument or `CF_TOKEN` (if provided)
    /// 2. `AccessToken` in the CF CLI config file
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.map(strip_bearer_prefix).filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| CfError::TokenNotFound(token_not_found_message(None)))?;

        debug!("Looking for access token in {}", path.display());

        CfConfigFile::load(path)?
            .and_then(|config| config.access_token().map(str::to_string))
            .map(|token| {
                debug!("Using token from CF config file {}", path.display());
                token
            })
            .ok_or_else(|| CfError::TokenNotFound(token_not_found_message(Some(path))))
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate helpful error message when token is not found
fn token_not_found_message(config_path: Option<&Path>) -> String {
    let checked = config_path
        .map(|p| format!(" Checked: {}", p.display()))
        .unwrap_or_default();
    format!(
        "No access token found. Run `cf login`, or pass --token / set {}.{}",
        cf_config::TOKEN_ENV_VAR,
        checked
    )
}
