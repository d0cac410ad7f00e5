//! Application constants for the METAR wind processor
//!
//! Sector geometry, default station and input locations, and the
//! compass labels used when reporting the distribution.

// =============================================================================
// Sector Geometry
// =============================================================================

/// Number of compass sectors in the wind-direction histogram
pub const SECTOR_COUNT: usize = 8;

/// Angular width of one sector in degrees
pub const SECTOR_WIDTH_DEGREES: f64 = 360.0 / SECTOR_COUNT as f64;

/// Sector names in index order, starting at North and turning clockwise
pub const SECTOR_NAMES: [&str; SECTOR_COUNT] = [
    "North",
    "Northeast",
    "East",
    "Southeast",
    "South",
    "Southwest",
    "West",
    "Northwest",
];

/// Short compass abbreviations in index order
pub const SECTOR_ABBREVIATIONS: [&str; SECTOR_COUNT] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

// =============================================================================
// Defaults
// =============================================================================

/// ICAO identifier of the station whose reports are counted (London Heathrow)
pub const DEFAULT_STATION: &str = "EGLL";

/// Directory scanned for bulletin files when none is given
pub const DEFAULT_INPUT_DIR: &str = "./metarfiles";

/// Log target used by the default `EnvFilter` directive
pub const LOG_TARGET: &str = "metar_winds";
