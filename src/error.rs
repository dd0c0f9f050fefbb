use std::fmt;

/// Error type for platform API and report operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed or the body could not be read as JSON
    Http(reqwest::Error),
    /// API returned a non-success status
    Api { status: u16, message: String },
    /// Response decoded as JSON but did not have the expected shape
    MalformedResponse(String),
    /// Explicitly requested resource does not exist
    NotFound(String),
    /// Service plan filter could not be built
    FilterSetup(String),
    /// No API token in any source
    TokenNotFound(String),
    /// No API endpoint in any source
    TargetNotFound(String),
    /// Failed to read or parse the CF CLI config file
    Credentials(String),
}

impl CfError {
    /// True for failures reaching the API (network, auth, status codes)
    pub fn is_transport(&self) -> bool {
        matches!(self, CfError::Http(_) | CfError::Api { .. })
    }
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CfError::MalformedResponse(msg) => write!(f, "Malformed API response: {}", msg),
            CfError::NotFound(msg) => write!(f, "{}", msg),
            CfError::FilterSetup(msg) => {
                write!(f, "Could not retrieve service listing: {}", msg)
            }
            CfError::TokenNotFound(msg) => write!(f, "{}", msg),
            CfError::TargetNotFound(msg) => write!(f, "{}", msg),
            CfError::Credentials(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for CfError {
    fn from(err: std::io::Error) -> Self {
        CfError::Credentials(err.to_string())
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, CfError>;
