// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "EventSift";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "eventsift";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".eventsift";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "eventsift.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "EVENTSIFT_CONFIG";

// =============================================================================
// Environment Variables - Debug
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "EVENTSIFT_DEBUG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "EVENTSIFT_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "EVENTSIFT_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "EVENTSIFT_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5377;

// =============================================================================
// Request Body Limits
// =============================================================================

/// Default body limit for general API requests (1 MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Body limit for the filter endpoint (32 MB - whole datasets arrive inline)
pub const FILTER_BODY_LIMIT: usize = 32 * 1024 * 1024;

// =============================================================================
// Timestamps
// =============================================================================

/// Timestamps are truncated to this many characters before parsing,
/// the length of `YYYY-MM-DDTHH:MM:SS.ffffff`. Fractional seconds beyond
/// microsecond precision are dropped rather than rejected.
pub const TIMESTAMP_PARSE_LEN: usize = 26;
