use crate::{CameraError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine distance, in meters.
const EARTH_RADIUS: f64 = 6378137.0;

/// Represents a geographical coordinate with latitude and longitude
///
/// Latitude is validated into `[-90, 90]` at construction; longitude is
/// never rejected, it is normalized into `(-180, 180]` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate, wrapping the longitude
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CameraError::LatitudeOutOfRange(lat));
        }
        Ok(Self {
            lat,
            lng: Self::wrap_lng(lng),
        })
    }

    /// Constructor for values already known to be in range, e.g. the output
    /// of interpolation between two valid points. Longitude is still wrapped.
    pub(crate) fn new_unchecked(lat: f64, lng: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&lat));
        Self {
            lat,
            lng: Self::wrap_lng(lng),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Wraps longitude into the `(-180, 180]` range
    pub fn wrap_lng(lng: f64) -> f64 {
        180.0 - (180.0 - lng).rem_euclid(360.0)
    }

    /// Signed shortest east-west difference `to - from`, in `(-180, 180]` degrees
    pub fn lng_delta(from: f64, to: f64) -> f64 {
        Self::wrap_lng(to - from)
    }

    /// Calculates the distance to another LatLng using the haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = Self::lng_delta(self.lng, other.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }
}

/// Represents a point in screen pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for ScreenPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
///
/// Invariant: `south_west` is the least corner on both axes. Longitudes are
/// normalized before accumulation, so a bounds never straddles the
/// antimeridian; its west edge is always ≤ its east edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl LatLngBounds {
    /// Starts an empty builder; `include` at least one point before `build`
    pub fn builder() -> LatLngBoundsBuilder {
        LatLngBoundsBuilder::new()
    }

    pub fn south_west(&self) -> LatLng {
        self.south_west
    }

    pub fn north_east(&self) -> LatLng {
        self.north_east
    }

    /// Gets the center point of the bounds, with the longitude midpoint
    /// taken along the arc spanned by the bounds and wrapped back into range
    pub fn center(&self) -> LatLng {
        let lat = (self.south_west.lat + self.north_east.lat) / 2.0;
        let lng = LatLng::wrap_lng(self.south_west.lng + self.lng_span() / 2.0);
        LatLng { lat, lng }
    }

    /// North-south extent in degrees
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// East-west extent in degrees
    pub fn lng_span(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// Accumulates points and sub-bounds into the minimal enclosing [`LatLngBounds`]
#[derive(Debug, Clone, Default)]
pub struct LatLngBoundsBuilder {
    accumulated: Option<LatLngBounds>,
}

impl LatLngBoundsBuilder {
    pub fn new() -> Self {
        Self { accumulated: None }
    }

    /// Widens the running bounds to include a point
    pub fn include(mut self, point: LatLng) -> Self {
        self.accumulated = Some(match self.accumulated {
            None => LatLngBounds {
                south_west: point,
                north_east: point,
            },
            Some(bounds) => LatLngBounds {
                south_west: LatLng {
                    lat: bounds.south_west.lat.min(point.lat),
                    lng: bounds.south_west.lng.min(point.lng),
                },
                north_east: LatLng {
                    lat: bounds.north_east.lat.max(point.lat),
                    lng: bounds.north_east.lng.max(point.lng),
                },
            },
        });
        self
    }

    /// Widens the running bounds to include another bounds
    pub fn include_bounds(self, bounds: &LatLngBounds) -> Self {
        self.include(bounds.south_west).include(bounds.north_east)
    }

    /// Produces the minimal enclosing bounds of everything included so far
    pub fn build(self) -> Result<LatLngBounds> {
        self.accumulated.ok_or(CameraError::EmptyBounds)
    }
}
