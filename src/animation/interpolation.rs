use crate::core::camera::CameraPosition;
use crate::core::geo::LatLng;
use std::f64::consts::PI;

/// Easing functions for camera transitions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseOutCubic,
    /// Gentle start and stop, the usual choice for camera moves
    #[default]
    EaseInOutCubic,
    EaseInOutSine,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseInOutSine => -(((PI * t).cos() - 1.0) / 2.0),
        }
    }
}

/// Interpolation helpers for camera fields
///
/// All helpers take an already-eased fraction; easing is applied once in the
/// transition so every field reaches its target synchronously at `t = 1`.
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Planar interpolation between coordinates, with the longitude taken
    /// along the shorter east-west arc so paths near the antimeridian do not
    /// swing around the globe
    pub fn lat_lng(start: &LatLng, end: &LatLng, t: f64) -> LatLng {
        let lat = Self::linear(start.lat(), end.lat(), t);
        let lng = start.lng() + LatLng::lng_delta(start.lng(), end.lng()) * t;
        LatLng::new_unchecked(lat, lng)
    }

    /// Interpolation between bearings along the shorter rotational
    /// direction, never turning more than 180 degrees
    pub fn bearing(start: f64, end: f64, t: f64) -> f64 {
        let delta = (end - start + 180.0).rem_euclid(360.0) - 180.0;
        CameraPosition::wrap_bearing(start + delta * t)
    }

    /// Interpolates every camera field at the same fraction
    pub fn camera(start: &CameraPosition, end: &CameraPosition, t: f64) -> CameraPosition {
        CameraPosition::new(
            Self::lat_lng(&start.target(), &end.target(), t),
            Self::linear(start.zoom(), end.zoom(), t),
            Self::bearing(start.bearing(), end.bearing(), t),
            Self::linear(start.tilt(), end.tilt(), t),
        )
    }
}
