//! Application constants and configuration

pub const APP_NAME: &str = "MoRUS Zine Library";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of zines shown per grid page
pub const PAGE_SIZE: usize = 24;

/// Subject sentinel meaning "no subject filter"
pub const ALL_SUBJECTS: &str = "All";

/// Placeholder shown for missing metadata
pub const UNKNOWN: &str = "Unknown";

/// Subjects hidden from the filter vocabulary unless settings say otherwise
pub const DEFAULT_EXCLUDED_SUBJECTS: &[&str] = &["Environmentalism and Nature", "Political - Police"];

/// Environment overrides for the record feed
pub const ENV_ENDPOINT: &str = "ZINE_LIBRARY_ENDPOINT";
pub const ENV_TOKEN: &str = "ZINE_LIBRARY_TOKEN";

/// Concurrent cover image downloads
pub const COVER_FETCH_CONCURRENCY: usize = 8;
