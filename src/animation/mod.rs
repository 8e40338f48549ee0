pub mod interpolation;
pub mod transition;

// Re-export commonly used types for convenience
pub use interpolation::{EasingFunction, Interpolation};
pub use transition::{Transition, TransitionEngine, TransitionState};
