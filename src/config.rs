/// Configuration constants for the Cloud Controller v2 API
pub mod api {
    /// Organizations collection
    pub const ORGANIZATIONS: &str = "/v2/organizations";

    /// Services collection
    pub const SERVICES: &str = "/v2/services";

    /// Sub-resource of an organization reporting its memory consumption
    pub const MEMORY_USAGE_SUFFIX: &str = "/memory_usage";

    /// Inline relations parameter for single-org lookups
    pub const INLINE_RELATIONS: &str = "inline-relations-depth=1";

    /// Query prefix selecting services by label
    pub const SERVICE_LABEL_QUERY: &str = "q=label%20IN%20";

    /// Query prefix selecting service instances by plan GUID
    pub const SERVICE_PLAN_QUERY: &str = "q=service_plan_guid%20IN%20";

    /// Page number query parameter
    pub const PAGE_PARAM: &str = "page";

    /// App state that counts as running (case-sensitive)
    pub const STARTED_STATE: &str = "STARTED";

    /// Service labels reported when no override is given
    pub const DEFAULT_SERVICE_LABELS: &[&str] = &["p-redis", "p-mysql", "p-rabbitmq"];
}

/// Configuration constants for the CF CLI config file
pub mod cf_config {
    /// Overrides the directory holding `.cf/config.json`
    pub const HOME_ENV_VAR: &str = "CF_HOME";

    /// Path to the CF CLI config file (relative to HOME or CF_HOME)
    pub const FILE_PATH: &str = ".cf/config.json";

    /// Environment variable for the API endpoint
    pub const API_ENV_VAR: &str = "CF_API";

    /// Environment variable for the access token
    pub const TOKEN_ENV_VAR: &str = "CF_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
