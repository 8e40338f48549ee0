//! Camera update requests and their resolution against a current camera.
//!
//! A [`CameraUpdate`] is a pure description of a requested change; it never
//! captures live camera state. Resolution happens at consumption time inside
//! the transition engine, so an update queued early cannot go stale.

use crate::camera::fit::fit_bounds;
use crate::core::camera::{CameraPosition, CameraPositionBuilder};
use crate::core::constants::DEFAULT_ZOOM_DELTA;
use crate::core::geo::{LatLng, LatLngBounds, ScreenPoint};
use crate::core::viewport::{Projection, ScreenSize};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A requested camera change, one variant per intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraUpdate {
    /// Move to a (possibly partial) camera position; unset fields keep the
    /// current camera's values
    Position(CameraPositionBuilder),
    /// Pan by a screen pixel offset; positive `dx` scrolls the viewport
    /// east, positive `dy` scrolls it south
    ScrollBy { dx: f64, dy: f64 },
    /// Change zoom by a delta
    ZoomBy(f64),
    /// Jump zoom to an absolute level
    ZoomTo(f64),
    /// Zoom in by one step
    ZoomIn,
    /// Zoom out by one step
    ZoomOut,
    /// Frame a geographic region with pixel padding on every edge
    FitBounds { bounds: LatLngBounds, padding: f64 },
}

impl CameraUpdate {
    /// Update to a full or partial camera position
    pub fn new_camera_position(position: CameraPositionBuilder) -> Self {
        Self::Position(position)
    }

    /// Update that moves the target, keeping zoom, bearing and tilt
    pub fn new_lat_lng(target: LatLng) -> Self {
        Self::Position(CameraPosition::builder().target(target))
    }

    /// Update that moves the target and zoom, keeping bearing and tilt
    pub fn new_lat_lng_zoom(target: LatLng, zoom: f64) -> Self {
        Self::Position(CameraPosition::builder().target(target).zoom(zoom))
    }

    /// Update that frames `bounds` with `padding` pixels on every edge
    pub fn new_lat_lng_bounds(bounds: LatLngBounds, padding: f64) -> Self {
        Self::FitBounds { bounds, padding }
    }

    /// Update that pans the viewport by a screen pixel offset
    pub fn scroll_by(dx: f64, dy: f64) -> Self {
        Self::ScrollBy { dx, dy }
    }

    pub fn zoom_by(delta: f64) -> Self {
        Self::ZoomBy(delta)
    }

    pub fn zoom_to(zoom: f64) -> Self {
        Self::ZoomTo(zoom)
    }

    pub fn zoom_in() -> Self {
        Self::ZoomIn
    }

    pub fn zoom_out() -> Self {
        Self::ZoomOut
    }

    /// Resolves this update against `current` into a fully-populated target
    /// position, consulting the projection for screen-space panning and the
    /// bounds fitter for framing
    pub fn resolve<P: Projection>(
        &self,
        current: &CameraPosition,
        projection: &P,
        viewport: ScreenSize,
        max_zoom: f64,
    ) -> Result<CameraPosition> {
        let resolved = match self {
            Self::Position(partial) => partial.resolve_against(current),

            Self::ScrollBy { dx, dy } => {
                // The geo point currently rendered dx/dy pixels from the
                // viewport center becomes the new target.
                let center = viewport.center();
                let shifted = ScreenPoint::new(center.x + dx, center.y + dy);
                let target = projection.screen_to_geo(&shifted, current, viewport);
                CameraPosition::new(target, current.zoom(), current.bearing(), current.tilt())
            }

            Self::ZoomBy(delta) => self.with_zoom(current, current.zoom() + delta, max_zoom),
            Self::ZoomTo(zoom) => self.with_zoom(current, *zoom, max_zoom),
            Self::ZoomIn => self.with_zoom(current, current.zoom() + DEFAULT_ZOOM_DELTA, max_zoom),
            Self::ZoomOut => self.with_zoom(current, current.zoom() - DEFAULT_ZOOM_DELTA, max_zoom),

            Self::FitBounds { bounds, padding } => {
                fit_bounds(bounds, viewport, *padding, max_zoom)?
            }
        };

        Ok(resolved)
    }

    fn with_zoom(&self, current: &CameraPosition, zoom: f64, max_zoom: f64) -> CameraPosition {
        CameraPosition::new(
            current.target(),
            zoom.clamp(0.0, max_zoom),
            current.bearing(),
            current.tilt(),
        )
    }
}
