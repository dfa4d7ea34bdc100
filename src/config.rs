/// Configuration constants for the CF API
pub mod api {
    /// Cloud controller info endpoint (carries the authorization endpoint)
    pub const INFO: &str = "/v2/info";

    /// Applications list endpoint (v2)
    pub const APPS: &str = "/v2/apps";

    /// Applications detail endpoint (v3, carries annotations)
    pub const APPS_V3: &str = "/v3/apps";

    /// Spaces endpoint
    pub const SPACES: &str = "/v2/spaces";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "/v2/organizations";

    /// Page size for the applications list
    pub const PAGE_SIZE: u32 = 50;

    /// Token endpoint path, relative to the authorization endpoint
    pub const TOKEN_PATH: &str = "/oauth/token";
}

/// Default values for CLI
pub mod defaults {
    /// Default configuration file path
    pub const CONFIG_PATH: &str = "config.yml";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Report file naming
pub mod report {
    /// Output file name prefix
    pub const FILE_PREFIX: &str = "cf-app-dump-";

    /// Output file name extension
    pub const FILE_EXT: &str = ".csv";

    /// Timestamp format embedded in the file name (lexically sortable)
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

    /// Fixed header row
    pub const HEADER: [&str; 7] = [
        "Foundation",
        "App Name",
        "Organization",
        "Space",
        "Instances",
        "State",
        "Metadata",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_format() {
        assert!(api::INFO.starts_with('/'));
        assert!(api::APPS.starts_with('/'));
        assert!(api::SPACES.starts_with('/'));
        assert!(api::ORGANIZATIONS.starts_with('/'));
        assert!(api::APPS_V3.starts_with("/v3"));
    }

    #[test]
    fn test_page_size() {
        assert_eq!(api::PAGE_SIZE, 50);
    }

    #[test]
    fn test_report_header_width() {
        assert_eq!(report::HEADER.len(), 7);
        assert_eq!(report::HEADER[0], "Foundation");
        assert_eq!(report::HEADER[6], "Metadata");
    }

    #[test]
    fn test_timestamp_format_has_no_separators() {
        assert!(!report::TIMESTAMP_FORMAT.contains('-'));
        assert!(!report::TIMESTAMP_FORMAT.contains(':'));
    }
}
