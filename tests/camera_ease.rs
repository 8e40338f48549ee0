//! End-to-end easing scenarios: each test builds an update, runs the
//! transition to completion with a synthetic clock, and checks where the
//! camera comes to rest.

use mapcam::{
    CameraPosition, CameraUpdate, LatLng, LatLngBounds, ScreenSize, TransitionEngine,
    TransitionState, WebMercator,
};

const LAT_LNG_DELTA: f64 = 1e-6;
const ZOOM_DELTA: f64 = 1e-9;
const ANIMATION_TIME: f64 = 0.3;

fn test_engine() -> TransitionEngine<WebMercator> {
    TransitionEngine::new(WebMercator, ScreenSize::new(512.0, 512.0))
}

/// Drives a transition tick by tick, like a frame loop would, and returns
/// the camera's resting position.
fn ease(
    engine: &mut TransitionEngine<WebMercator>,
    current: &CameraPosition,
    update: CameraUpdate,
) -> CameraPosition {
    let transition = engine.start(current, &update, ANIMATION_TIME).unwrap();
    let mut camera = *current;
    let mut elapsed = 0.0;
    while elapsed < ANIMATION_TIME {
        camera = transition.sample_at(elapsed);
        elapsed += 1.0 / 60.0;
    }
    camera = transition.sample_at(ANIMATION_TIME);
    assert_eq!(transition.state(), TransitionState::Completed);
    camera
}

#[test]
fn ease_to_target() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();
    assert_eq!(initial.target(), LatLng::default());

    let move_target = LatLng::new(1.0, 1.0).unwrap();
    let camera = ease(&mut engine, &initial, CameraUpdate::new_lat_lng(move_target));

    assert!((camera.target().lat() - 1.0).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - 1.0).abs() < LAT_LNG_DELTA);
    assert_eq!(camera.zoom(), 1.0);
}

#[test]
fn ease_to_target_and_zoom() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();
    let move_target = LatLng::new(1.0000000001, 1.0000000003).unwrap();
    let move_zoom = 15.5;

    let camera = ease(
        &mut engine,
        &initial,
        CameraUpdate::new_lat_lng_zoom(move_target, move_zoom),
    );

    assert!((camera.target().lat() - move_target.lat()).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - move_target.lng()).abs() < LAT_LNG_DELTA);
    assert!((camera.zoom() - move_zoom).abs() < ZOOM_DELTA);
}

#[test]
fn ease_to_full_camera_position() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let camera = ease(
        &mut engine,
        &initial,
        CameraUpdate::new_camera_position(
            CameraPosition::builder()
                .target(LatLng::new(1.0000000001, 1.0000000003).unwrap())
                .zoom(15.5)
                .tilt(45.5)
                .bearing(12.5),
        ),
    );

    assert!((camera.target().lat() - 1.0).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - 1.0).abs() < LAT_LNG_DELTA);
    assert!((camera.zoom() - 15.5).abs() < ZOOM_DELTA);
    assert!((camera.tilt() - 45.5).abs() < 1e-9);
    assert!((camera.bearing() - 12.5).abs() < 1e-9);
}

#[test]
fn ease_to_bounds() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let bounds = LatLngBounds::builder()
        .include(LatLng::default())
        .include(LatLng::new(2.0, 2.0).unwrap())
        .build()
        .unwrap();

    let camera = ease(
        &mut engine,
        &initial,
        CameraUpdate::new_lat_lng_bounds(bounds, 0.0),
    );

    // Camera settles on the bounds center, north-up and flat
    assert!((camera.target().lat() - 1.0).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - 1.0).abs() < LAT_LNG_DELTA);
    assert_eq!(camera.bearing(), 0.0);
    assert_eq!(camera.tilt(), 0.0);
}

#[test]
fn ease_to_move_by() {
    use mapcam::Projection;

    let mut engine = test_engine();
    let viewport = engine.viewport();
    let initial = CameraPosition::builder().zoom(5.0).build();
    let move_target = LatLng::new(2.0, 2.0).unwrap();

    // Scroll by the screen offset between the desired point and the center
    let center_point = WebMercator.geo_to_screen(&initial.target(), &initial, viewport);
    let target_point = WebMercator.geo_to_screen(&move_target, &initial, viewport);
    let camera = ease(
        &mut engine,
        &initial,
        CameraUpdate::scroll_by(
            target_point.x - center_point.x,
            target_point.y - center_point.y,
        ),
    );

    assert!((camera.target().lat() - move_target.lat()).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - move_target.lng()).abs() < LAT_LNG_DELTA);
}

#[test]
fn ease_to_zoom_in() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let camera = ease(&mut engine, &initial, CameraUpdate::zoom_in());
    assert!((camera.zoom() - 2.0).abs() < ZOOM_DELTA);
}

#[test]
fn ease_to_zoom_out() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let at_ten = ease(
        &mut engine,
        &initial,
        CameraUpdate::new_lat_lng_zoom(LatLng::default(), 10.0),
    );
    let camera = ease(&mut engine, &at_ten, CameraUpdate::zoom_out());
    assert!((camera.zoom() - 9.0).abs() < ZOOM_DELTA);
}

#[test]
fn ease_to_zoom_by() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let camera = ease(&mut engine, &initial, CameraUpdate::zoom_by(2.45));
    assert!((camera.zoom() - 3.45).abs() < ZOOM_DELTA);
}

#[test]
fn ease_to_zoom_to() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let camera = ease(&mut engine, &initial, CameraUpdate::zoom_to(2.45));
    assert!((camera.zoom() - 2.45).abs() < ZOOM_DELTA);
}

#[test]
fn superseding_ease_never_reaches_old_target() {
    let mut engine = test_engine();
    let initial = CameraPosition::builder().zoom(1.0).build();

    let first = engine
        .start(
            &initial,
            &CameraUpdate::new_lat_lng(LatLng::new(10.0, 0.0).unwrap()),
            ANIMATION_TIME,
        )
        .unwrap();
    let midway = first.sample_at(ANIMATION_TIME / 2.0);

    let camera = ease(
        &mut engine,
        &midway,
        CameraUpdate::new_lat_lng(LatLng::new(0.0, 10.0).unwrap()),
    );

    assert!((camera.target().lat() - 0.0).abs() < LAT_LNG_DELTA);
    assert!((camera.target().lng() - 10.0).abs() < LAT_LNG_DELTA);
}
