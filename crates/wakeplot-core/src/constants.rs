//! Playback constants and unit conversions.

// --- Units ---

/// Seconds per hour.
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Degrees of latitude per nautical mile (1 nm ≈ 1 arc-minute).
pub const DEGREES_PER_NAUTICAL_MILE: f64 = 1.0 / 60.0;

/// One knot expressed as degrees of arc per second.
pub const KNOTS_TO_DEGREES_PER_SEC: f64 = DEGREES_PER_NAUTICAL_MILE / SECS_PER_HOUR;

/// Full circle in compass degrees.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

// --- Trails ---

/// Number of points in a vessel trail polyline.
pub const DEFAULT_TRAIL_SAMPLES: usize = 10;

// --- Playback clock ---

/// Default playback rate (1.0 = real time).
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

/// Speed multipliers offered by the playback controls.
pub const SPEED_PRESETS: [f64; 6] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0];

/// Default scenario length in minutes.
pub const DEFAULT_DURATION_MINUTES: f64 = 120.0;

/// Default scenario length in seconds.
pub const DEFAULT_DURATION_SECS: f64 = DEFAULT_DURATION_MINUTES * 60.0;

// --- Host frame loop ---

/// Frames per second delivered by the headless host loop.
pub const FRAME_RATE: u32 = 60;

// --- Scenario defaults ---

/// Default chart centre latitude (Hawaiian operating area).
pub const DEFAULT_CENTER_LAT: f64 = 19.5;

/// Default chart centre longitude (Hawaiian operating area).
pub const DEFAULT_CENTER_LNG: f64 = -155.5;
