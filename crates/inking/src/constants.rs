/// Movement (pixels) required to confirm a drag rather than a tap.
pub const MOVE_THRESHOLD: f32 = 5.0;

/// Bounding-box extent (pixels) below which a gesture renders as a dot.
pub const DOT_EXTENT_THRESHOLD: f32 = 8.0;

/// Pressure standard deviation below which a region counts as stable.
pub const STABLE_DEVIATION: f32 = 0.15;

/// Window size for the stability scan and the moving average.
pub const SMOOTHING_WINDOW: usize = 5;

/// Furthest index probed from either end when trimming unstable boundaries.
pub const STABILITY_SCAN_LIMIT: usize = 15;

/// Smoothing only applies to sequences longer than this.
pub const SMOOTHING_MIN_SAMPLES: usize = 5;

/// Non-genuine readings required before speed estimation kicks in.
pub const PRESSURE_MISS_THRESHOLD: u32 = 3;

/// Sentinel returned for sources that carry no usable pressure signal.
pub const NEUTRAL_PRESSURE: f32 = 0.5;

/// Deterministic fallback for unrecognized sources.
pub const FALLBACK_PRESSURE: f32 = 0.65;

/// Sample count at or below which a smoothed gesture renders as a dot.
pub const DOT_MAX_SAMPLES: usize = 3;

/// Segment count of the dot polygon.
pub const DOT_SEGMENTS: usize = 16;

/// Buffered samples required before a live preview is produced.
pub const PREVIEW_MIN_SAMPLES: usize = 8;
