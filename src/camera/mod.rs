pub mod fit;
pub mod update;

pub use fit::fit_bounds;
pub use update::CameraUpdate;
