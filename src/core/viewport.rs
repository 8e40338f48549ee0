use crate::core::camera::CameraPosition;
use crate::core::constants::TILE_SIZE;
use crate::core::geo::{LatLng, ScreenPoint};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Highest latitude representable in Web Mercator (EPSG:3857)
const MAX_LATITUDE: f64 = 85.0511287798;

/// Pixel dimensions of the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The screen point the camera target is rendered at
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Screen/geographic conversion contract supplied by the host renderer
///
/// Both directions are taken relative to a camera and a viewport size and
/// must be consistent inverses to within rendering precision.
pub trait Projection {
    fn geo_to_screen(
        &self,
        point: &LatLng,
        camera: &CameraPosition,
        viewport: ScreenSize,
    ) -> ScreenPoint;

    fn screen_to_geo(
        &self,
        point: &ScreenPoint,
        camera: &CameraPosition,
        viewport: ScreenSize,
    ) -> LatLng;
}

/// Reference [`Projection`] using the Web Mercator tile pyramid: the world
/// is one `TILE_SIZE` square at zoom 0 and doubles per zoom level.
///
/// The implementation assumes a north-up, untilted view; hosts that render a
/// rotated or pitched camera supply their own `Projection`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// World pixel width/height of the whole map at the given zoom
    pub fn world_size(zoom: f64) -> f64 {
        TILE_SIZE * 2_f64.powf(zoom)
    }

    /// Projects a LatLng to absolute world pixel coordinates at the given zoom
    pub fn project(point: &LatLng, zoom: f64) -> ScreenPoint {
        let scale = Self::world_size(zoom);
        let lat = point.lat().clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = (point.lng() + 180.0) / 360.0 * scale;
        let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0 * scale;

        ScreenPoint::new(x, y)
    }

    /// Unprojects absolute world pixel coordinates back to a LatLng
    pub fn unproject(pixel: &ScreenPoint, zoom: f64) -> LatLng {
        let scale = Self::world_size(zoom);

        let lng = pixel.x / scale * 360.0 - 180.0;
        let y = 1.0 - 2.0 * pixel.y / scale;
        let lat = (2.0 * (y * PI).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new_unchecked(lat, lng)
    }
}

impl Projection for WebMercator {
    fn geo_to_screen(
        &self,
        point: &LatLng,
        camera: &CameraPosition,
        viewport: ScreenSize,
    ) -> ScreenPoint {
        let world = Self::project(point, camera.zoom());
        let origin = Self::project(&camera.target(), camera.zoom());
        world.subtract(&origin).add(&viewport.center())
    }

    fn screen_to_geo(
        &self,
        point: &ScreenPoint,
        camera: &CameraPosition,
        viewport: ScreenSize,
    ) -> LatLng {
        let origin = Self::project(&camera.target(), camera.zoom());
        let world = origin.add(&point.subtract(&viewport.center()));
        Self::unproject(&world, camera.zoom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(lat: f64, lng: f64, zoom: f64) -> CameraPosition {
        CameraPosition::new(LatLng::new(lat, lng).unwrap(), zoom, 0.0, 0.0)
    }

    #[test]
    fn test_camera_target_projects_to_viewport_center() {
        let camera = camera_at(40.7128, -74.0060, 10.0);
        let viewport = ScreenSize::new(800.0, 600.0);

        let screen = WebMercator.geo_to_screen(&camera.target(), &camera, viewport);
        assert!((screen.x - 400.0).abs() < 1e-9);
        assert!((screen.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_round_trip() {
        let camera = camera_at(10.0, 20.0, 8.0);
        let viewport = ScreenSize::new(1024.0, 768.0);
        let point = LatLng::new(10.5, 20.5).unwrap();

        let screen = WebMercator.geo_to_screen(&point, &camera, viewport);
        let back = WebMercator.screen_to_geo(&screen, &camera, viewport);

        assert!((back.lat() - point.lat()).abs() < 1e-9);
        assert!((back.lng() - point.lng()).abs() < 1e-9);
    }

    #[test]
    fn test_world_span_at_zoom_zero() {
        let west = WebMercator::project(&LatLng::new(0.0, -180.0).unwrap(), 0.0);
        let east = WebMercator::project(&LatLng::new(0.0, 180.0).unwrap(), 0.0);

        // -180 wraps to +180, so both corners land on the east edge
        assert!((east.x - TILE_SIZE).abs() < 1e-9);
        assert_eq!(west.x, east.x);

        let equator = WebMercator::project(&LatLng::default(), 0.0);
        assert!((equator.x - TILE_SIZE / 2.0).abs() < 1e-9);
        assert!((equator.y - TILE_SIZE / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_screen_x_is_east() {
        let camera = camera_at(0.0, 0.0, 5.0);
        let viewport = ScreenSize::new(512.0, 512.0);

        let east = WebMercator.screen_to_geo(&ScreenPoint::new(300.0, 256.0), &camera, viewport);
        assert!(east.lng() > 0.0);

        let north = WebMercator.screen_to_geo(&ScreenPoint::new(256.0, 200.0), &camera, viewport);
        assert!(north.lat() > 0.0);
    }
}
