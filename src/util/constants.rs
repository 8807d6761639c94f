// MedConnect - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MedConnect";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "MedConnect";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline shown under the main heading.
pub const APP_TAGLINE: &str = "Search our network of top-rated healthcare professionals";

// =============================================================================
// Record source latency
// =============================================================================

/// Simulated latency of "fetch all providers" in milliseconds.
pub const DEFAULT_FETCH_LATENCY_MS: u64 = 500;

/// Simulated latency of "search providers by name" in milliseconds.
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 300;

/// Upper bound on either configured latency. Anything above this would make
/// the UI appear hung.
pub const MAX_SOURCE_LATENCY_MS: u64 = 10_000;

/// How often the GUI re-polls the source worker while a request is in flight.
pub const SOURCE_POLL_INTERVAL_MS: u64 = 50;

// =============================================================================
// Favorites / durable storage
// =============================================================================

/// Storage key under which the favorite id list is persisted.
pub const FAVORITES_KEY: &str = "favorites";

/// File name of the key/value store inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Body font size bounds (points).
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 32.0;

// =============================================================================
// Filter panel labels
// =============================================================================

/// Placeholder option meaning "no specialty constraint".
pub const ALL_SPECIALTIES_LABEL: &str = "All Specialties";

/// Placeholder option meaning "no location constraint".
pub const ALL_LOCATIONS_LABEL: &str = "All Locations";

/// Placeholder option meaning "no availability constraint".
pub const ANY_DAY_LABEL: &str = "Any Day";

/// Search box placeholder text.
pub const SEARCH_PLACEHOLDER: &str = "Search for doctors by name...";

/// Maximum number of suggestion rows shown under the search box at once.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;
