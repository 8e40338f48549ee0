//! Engine-wide constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels; the Web Mercator world is one tile at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Default upper zoom bound used when the host does not configure one.
pub const DEFAULT_MAX_ZOOM: f64 = 22.0;

/// Steepest camera pitch the engine will produce, in degrees.
pub const MAX_TILT: f64 = 60.0;

/// Programmatic +/- zoom step for `zoom_in`/`zoom_out` updates.
pub const DEFAULT_ZOOM_DELTA: f64 = 1.0;

/// Per-field threshold below which a resolved target counts as already reached.
pub const CONVERGENCE_EPSILON: f64 = 1e-7;
