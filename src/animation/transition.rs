//! The transition engine: resolves camera updates into time-bounded,
//! host-sampled animations.

use crate::animation::interpolation::{EasingFunction, Interpolation};
use crate::camera::update::CameraUpdate;
use crate::core::camera::CameraPosition;
use crate::core::constants::{CONVERGENCE_EPSILON, DEFAULT_MAX_ZOOM};
use crate::core::geo::LatLng;
use crate::core::viewport::{Projection, ScreenSize};
use crate::Result;

/// State of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// One animation between two camera positions
///
/// The transition never owns a clock; the host feeds monotonically
/// increasing elapsed seconds into [`sample_at`](Self::sample_at) until the
/// transition completes or is cancelled. After cancellation the last sampled
/// position is the camera's resting state.
#[derive(Debug, Clone)]
pub struct Transition {
    start: CameraPosition,
    end: CameraPosition,
    duration: f64,
    easing: EasingFunction,
    state: TransitionState,
    last_sampled: CameraPosition,
}

impl Transition {
    fn new(start: CameraPosition, end: CameraPosition, duration: f64, easing: EasingFunction) -> Self {
        // An already-converged target or a zero duration completes
        // synchronously; idempotent re-requests are not errors.
        if duration <= 0.0 || converged(&start, &end) {
            return Self {
                start,
                end,
                duration: 0.0,
                easing,
                state: TransitionState::Completed,
                last_sampled: end,
            };
        }

        Self {
            start,
            end,
            duration,
            easing,
            state: TransitionState::Running,
            last_sampled: start,
        }
    }

    pub fn start_position(&self) -> CameraPosition {
        self.start
    }

    pub fn end_position(&self) -> CameraPosition {
        self.end
    }

    /// Duration in seconds; zero for synchronously completed transitions
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Completed | TransitionState::Cancelled
        )
    }

    /// Replaces the easing curve; a no-op once sampling has begun
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        if self.state == TransitionState::Running && self.last_sampled == self.start {
            self.easing = easing;
        }
        self
    }

    /// Samples the camera at `elapsed` seconds into the transition
    ///
    /// At `elapsed = 0` this returns the exact start state; once `elapsed`
    /// reaches the duration it returns the exact end state and the
    /// transition completes. A completed transition keeps returning its end
    /// state, a cancelled one its last sampled state.
    pub fn sample_at(&mut self, elapsed: f64) -> CameraPosition {
        match self.state {
            TransitionState::Idle | TransitionState::Running => {}
            TransitionState::Completed => return self.end,
            TransitionState::Cancelled => return self.last_sampled,
        }

        if elapsed >= self.duration {
            log::trace!(
                "transition completed after {:.3}s at {:?}",
                self.duration,
                self.end.target()
            );
            self.state = TransitionState::Completed;
            self.last_sampled = self.end;
            return self.end;
        }

        let sampled = if elapsed <= 0.0 {
            self.start
        } else {
            let t = self.easing.apply(elapsed / self.duration);
            Interpolation::camera(&self.start, &self.end, t)
        };

        self.state = TransitionState::Running;
        self.last_sampled = sampled;
        sampled
    }

    /// Cancels a running transition, leaving the camera at rest wherever it
    /// was last sampled; completed or cancelled transitions are unaffected
    pub fn cancel(&mut self) {
        if self.state == TransitionState::Running || self.state == TransitionState::Idle {
            log::debug!("transition cancelled at {:?}", self.last_sampled.target());
            self.state = TransitionState::Cancelled;
        }
    }
}

/// Resolves camera updates against a current camera and runs at most one
/// transition at a time
///
/// The engine holds the collaborator handles (projection, viewport size,
/// zoom ceiling, default easing) but no clock or thread: `start` and
/// sampling are synchronous and are expected to run on the host's tick
/// context. Starting a new transition supersedes a running one.
pub struct TransitionEngine<P: Projection> {
    projection: P,
    viewport: ScreenSize,
    max_zoom: f64,
    easing: EasingFunction,
    active: Option<Transition>,
}

impl<P: Projection> TransitionEngine<P> {
    pub fn new(projection: P, viewport: ScreenSize) -> Self {
        Self {
            projection,
            viewport,
            max_zoom: DEFAULT_MAX_ZOOM,
            easing: EasingFunction::default(),
            active: None,
        }
    }

    /// Sets the zoom ceiling used by zoom clamping and bounds fitting
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom.max(0.0);
        self
    }

    /// Sets the default easing for transitions started by this engine
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// The host calls this when the rendering surface is resized
    pub fn set_viewport(&mut self, viewport: ScreenSize) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> ScreenSize {
        self.viewport
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Resolves `update` against `current` and starts a transition of
    /// `duration` seconds towards the resolved target
    ///
    /// A running transition is superseded: it moves to `Cancelled` and its
    /// target is never reached. An update that resolves to the current
    /// position, or a non-positive duration, completes within this call.
    pub fn start(
        &mut self,
        current: &CameraPosition,
        update: &CameraUpdate,
        duration: f64,
    ) -> Result<&mut Transition> {
        let end = update.resolve(current, &self.projection, self.viewport, self.max_zoom)?;

        if let Some(previous) = self.active.as_mut() {
            if !previous.is_finished() {
                log::debug!("superseding running transition towards {:?}", previous.end_position().target());
                previous.cancel();
            }
        }

        log::debug!(
            "starting transition {:?} -> {:?} over {:.3}s",
            current.target(),
            end.target(),
            duration.max(0.0)
        );

        Ok(self
            .active
            .insert(Transition::new(*current, end, duration, self.easing)))
    }

    /// The engine's view of the state machine; `Idle` when nothing has been
    /// started yet
    pub fn state(&self) -> TransitionState {
        self.active
            .as_ref()
            .map(Transition::state)
            .unwrap_or(TransitionState::Idle)
    }

    pub fn active(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Transition> {
        self.active.as_mut()
    }

    /// Cancels the running transition, if any
    pub fn cancel(&mut self) {
        if let Some(transition) = self.active.as_mut() {
            transition.cancel();
        }
    }
}

/// Per-field epsilon comparison; bearing distance is taken along the
/// shorter rotation
fn converged(a: &CameraPosition, b: &CameraPosition) -> bool {
    let bearing_delta = (b.bearing() - a.bearing() + 180.0).rem_euclid(360.0) - 180.0;
    (a.target().lat() - b.target().lat()).abs() < CONVERGENCE_EPSILON
        && LatLng::lng_delta(a.target().lng(), b.target().lng()).abs() < CONVERGENCE_EPSILON
        && (a.zoom() - b.zoom()).abs() < CONVERGENCE_EPSILON
        && bearing_delta.abs() < CONVERGENCE_EPSILON
        && (a.tilt() - b.tilt()).abs() < CONVERGENCE_EPSILON
}
