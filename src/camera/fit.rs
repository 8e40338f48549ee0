//! Bounds fitting: the camera that frames a geographic region inside a
//! viewport with pixel padding.

use crate::core::camera::CameraPosition;
use crate::core::constants::TILE_SIZE;
use crate::core::geo::LatLngBounds;
use crate::core::viewport::{ScreenSize, WebMercator};
use crate::{CameraError, Result};

/// Computes the north-up, untilted camera that frames `bounds` within
/// `viewport`, keeping at least `padding` pixels clear on every edge.
///
/// The zoom is closed-form: the pixel span of the bounds at zoom `z` is its
/// Web Mercator world fraction times `TILE_SIZE * 2^z`, so the largest zoom
/// that still fits an axis is `log2(available_px / span_px_at_zoom_0)`. The
/// two axes are solved independently and the smaller zoom wins, which
/// guarantees neither axis overshoots. A bounds collapsed to a single point
/// spans zero pixels at every zoom and yields `max_zoom`.
pub fn fit_bounds(
    bounds: &LatLngBounds,
    viewport: ScreenSize,
    padding: f64,
    max_zoom: f64,
) -> Result<CameraPosition> {
    if viewport.is_empty() {
        return Err(CameraError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if padding < 0.0 || 2.0 * padding >= viewport.width.min(viewport.height) {
        return Err(CameraError::PaddingExceedsViewport {
            padding,
            width: viewport.width,
            height: viewport.height,
        });
    }

    let target = bounds.center();

    // Pixel span of the bounds at zoom 0; doubles per zoom level.
    let ne = WebMercator::project(&bounds.north_east(), 0.0);
    let sw = WebMercator::project(&bounds.south_west(), 0.0);
    let span_x = bounds.lng_span() / 360.0 * TILE_SIZE;
    let span_y = (sw.y - ne.y).abs();

    let zoom_x = axis_zoom(viewport.width - 2.0 * padding, span_x);
    let zoom_y = axis_zoom(viewport.height - 2.0 * padding, span_y);

    let zoom = zoom_x.min(zoom_y).clamp(0.0, max_zoom);

    Ok(CameraPosition::new(target, zoom, 0.0, 0.0))
}

/// Largest zoom at which `span_at_zoom_0` pixels fit into `available` pixels.
/// A degenerate axis fits at any zoom.
fn axis_zoom(available: f64, span_at_zoom_0: f64) -> f64 {
    if span_at_zoom_0 <= 0.0 {
        f64::INFINITY
    } else {
        (available / span_at_zoom_0).log2()
    }
}
