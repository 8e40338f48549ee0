use crate::core::constants::MAX_TILT;
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// The renderable viewpoint: target point, zoom, bearing, and tilt
///
/// Values are normalized at construction: zoom is kept non-negative, bearing
/// is wrapped into `[0, 360)` and tilt clamped into `[0, MAX_TILT]`. The
/// range cap on zoom is applied later, during update resolution, because the
/// maximum zoom is owned by the engine configuration rather than the value
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    target: LatLng,
    zoom: f64,
    bearing: f64,
    tilt: f64,
}

impl CameraPosition {
    pub fn new(target: LatLng, zoom: f64, bearing: f64, tilt: f64) -> Self {
        Self {
            target,
            zoom: zoom.max(0.0),
            bearing: Self::wrap_bearing(bearing),
            tilt: tilt.clamp(0.0, MAX_TILT),
        }
    }

    /// Starts a builder with every field unset
    pub fn builder() -> CameraPositionBuilder {
        CameraPositionBuilder::default()
    }

    pub fn target(&self) -> LatLng {
        self.target
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Wraps a bearing into `[0, 360)` degrees
    pub fn wrap_bearing(bearing: f64) -> f64 {
        bearing.rem_euclid(360.0)
    }
}

impl Default for CameraPosition {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0, 0.0, 0.0)
    }
}

/// Builder for [`CameraPosition`] with every field optional
///
/// Standalone `build()` substitutes fixed defaults for unset fields. The same
/// struct doubles as the payload of a position update, where an unset field
/// means "inherit the current camera's value" and is filled in at resolution
/// time (`resolve_against`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPositionBuilder {
    pub(crate) target: Option<LatLng>,
    pub(crate) zoom: Option<f64>,
    pub(crate) bearing: Option<f64>,
    pub(crate) tilt: Option<f64>,
}

impl CameraPositionBuilder {
    pub fn target(mut self, target: LatLng) -> Self {
        self.target = Some(target);
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    pub fn tilt(mut self, tilt: f64) -> Self {
        self.tilt = Some(tilt);
        self
    }

    /// Builds a standalone position; unset fields fall back to the defaults
    /// (target (0, 0), zoom 0, bearing 0, tilt 0)
    pub fn build(self) -> CameraPosition {
        CameraPosition::new(
            self.target.unwrap_or_default(),
            self.zoom.unwrap_or(0.0),
            self.bearing.unwrap_or(0.0),
            self.tilt.unwrap_or(0.0),
        )
    }

    /// Builds a position where unset fields inherit from `current`
    pub fn resolve_against(self, current: &CameraPosition) -> CameraPosition {
        CameraPosition::new(
            self.target.unwrap_or(current.target()),
            self.zoom.unwrap_or(current.zoom()),
            self.bearing.unwrap_or(current.bearing()),
            self.tilt.unwrap_or(current.tilt()),
        )
    }
}
