//! # mapcam
//!
//! A camera transition engine for slippy-map renderers.
//!
//! The crate turns high-level camera intents (move to a location, zoom,
//! tilt, rotate, fit a geographic region, pan by a screen offset) into
//! smooth, time-bounded transitions of a [`CameraPosition`] that a renderer
//! samples each frame. It owns no surface, timer, or thread: the host
//! drives [`Transition::sample_at`] with elapsed time, which makes the
//! engine deterministic and trivially testable with a synthetic clock.

pub mod animation;
pub mod camera;
pub mod core;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    camera::{CameraPosition, CameraPositionBuilder},
    geo::{LatLng, LatLngBounds, LatLngBoundsBuilder, ScreenPoint},
    viewport::{Projection, ScreenSize, WebMercator},
};

pub use crate::camera::{fit::fit_bounds, update::CameraUpdate};

pub use crate::animation::{
    interpolation::{EasingFunction, Interpolation},
    transition::{Transition, TransitionEngine, TransitionState},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, CameraError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("no point was ever included in the bounds builder")]
    EmptyBounds,

    #[error("viewport {width}x{height} has no drawable area")]
    InvalidViewport { width: f64, height: f64 },

    #[error("padding {padding}px leaves no room inside a {width}x{height} viewport")]
    PaddingExceedsViewport {
        padding: f64,
        width: f64,
        height: f64,
    },
}

/// Error type alias for convenience
pub type Error = CameraError;
