// =============================================================================
// Provider constants
// =============================================================================

/// Base URL for the endoflife.date API
pub const EOL_API_BASE_URL: &str = "https://endoflife.date/api";

/// Timeout for provider requests in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Classification windows
// =============================================================================

/// A lifecycle boundary this many days away (or closer) is a WARNING
pub const WARNING_WINDOW_DAYS: i64 = 30;

/// A lifecycle boundary this many days away (or closer) is an INFO
pub const INFO_WINDOW_DAYS: i64 = 90;
