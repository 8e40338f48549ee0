//! Drives a camera ease in real time and prints the sampled positions,
//! standing in for the renderer a real host would feed.
//!
//! Run with `RUST_LOG=debug cargo run --example ease_demo` to see the
//! engine's transition logging.

use instant::Instant;
use mapcam::{
    CameraPosition, CameraUpdate, LatLng, ScreenSize, TransitionEngine, TransitionState,
    WebMercator,
};

fn main() -> mapcam::Result<()> {
    env_logger::init();

    let mut engine =
        TransitionEngine::new(WebMercator, ScreenSize::new(800.0, 600.0)).with_max_zoom(18.0);

    let berlin = LatLng::new(52.5200, 13.4050)?;
    let tokyo = LatLng::new(35.6762, 139.6503)?;
    let current = CameraPosition::builder().target(berlin).zoom(10.0).build();

    println!(
        "flying {:.0} km from {:?} to {:?}",
        berlin.distance_to(&tokyo) / 1000.0,
        berlin,
        tokyo
    );

    let update = CameraUpdate::new_lat_lng_zoom(tokyo, 12.0);
    let transition = engine.start(&current, &update, 2.0)?;

    let started = Instant::now();
    loop {
        let camera = transition.sample_at(started.elapsed().as_secs_f64());
        println!(
            "t={:.2}s target=({:.4}, {:.4}) zoom={:.2}",
            started.elapsed().as_secs_f64(),
            camera.target().lat(),
            camera.target().lng(),
            camera.zoom()
        );
        if transition.state() == TransitionState::Completed {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }

    println!("done");
    Ok(())
}
