//! Eased rotation transitions.
//!
//! [`RotationTransition`] owns one rendering surface and animates the shape's
//! rotation towards a requested target, regenerating and publishing the path
//! once per frame. Frames are scheduled through [`FrameToken`]s: at most one
//! token is pending, and a token that was superseded or cancelled is ignored
//! when it is finally delivered.
//!
//! ```
//! use squircley::animation::{RotationTransition, SimulatedClock};
//! use squircley::surface::RecordingSurface;
//! use squircley::Curvature;
//!
//! let mut transition = RotationTransition::new(RecordingSurface::new(), Curvature::default());
//! transition.request_rotation(90.0);
//! transition.drive(&mut SimulatedClock::default());
//!
//! let state = transition.state();
//! assert_eq!(state.current_rotation, 90.0);
//! assert!(!state.is_transitioning);
//! ```

use crate::defaults;
use crate::superellipse::{ShapeConstants, build_path_with};
use crate::surface::RenderSurface;
use crate::svg::ShapeStyle;
use crate::types::Curvature;

/// Cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    if progress < 0.5 {
        4.0 * progress * progress * progress
    } else {
        1.0 - (-2.0 * progress + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Length of one transition in milliseconds
    pub duration_ms: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: defaults::TRANSITION_DURATION_MS,
        }
    }
}

/// Snapshot of the controller's animation bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub is_transitioning: bool,
    /// Rotation the running transition started from (or rests at when idle)
    pub current_rotation: f64,
    pub target_rotation: f64,
    /// Timestamp of the transition's first frame, `None` until it runs
    pub start_timestamp: Option<f64>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            is_transitioning: false,
            current_rotation: 0.0,
            target_rotation: 0.0,
            start_timestamp: None,
        }
    }
}

/// Handle for one scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Outcome of delivering a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The token is no longer pending; nothing happened.
    Stale,
    /// A frame was published and another one is scheduled.
    Continue(FrameToken),
    /// The transition reached its target.
    Finished,
}

/// Source of frame timestamps, in milliseconds.
pub trait FrameClock {
    /// Wait for the next display refresh and return its timestamp.
    fn next_frame(&mut self) -> f64;
}

/// Clock that advances by a fixed interval per frame without sleeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedClock {
    now: f64,
    interval: f64,
}

impl SimulatedClock {
    /// Clock starting at `start` and advancing `interval` ms per frame.
    ///
    /// An interval that is not a positive finite number would never let a
    /// transition progress; it falls back to the 60Hz frame interval. A
    /// non-finite start falls back to zero.
    pub fn new(start: f64, interval: f64) -> Self {
        let interval = if interval.is_finite() && interval > 0.0 {
            interval
        } else {
            defaults::FRAME_INTERVAL_MS
        };
        let now = if start.is_finite() { start } else { 0.0 };
        Self { now, interval }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn now(&self) -> f64 {
        self.now
    }
}

impl Default for SimulatedClock {
    /// A 60Hz display starting at zero.
    fn default() -> Self {
        Self::new(0.0, defaults::FRAME_INTERVAL_MS)
    }
}

impl FrameClock for SimulatedClock {
    fn next_frame(&mut self) -> f64 {
        self.now += self.interval;
        self.now
    }
}

/// Single-flight rotation animator bound to one rendering surface.
#[derive(Debug)]
pub struct RotationTransition<S> {
    surface: S,
    config: TransitionConfig,
    constants: ShapeConstants,
    a: f64,
    b: f64,
    curvature: Curvature,
    state: AnimationState,
    displayed_rotation: f64,
    pending: Option<FrameToken>,
    next_token: u64,
}

impl<S: RenderSurface> RotationTransition<S> {
    /// Idle at rotation 0 with the default semi-axes and a 300ms transition.
    pub fn new(surface: S, curvature: Curvature) -> Self {
        Self {
            surface,
            config: TransitionConfig::default(),
            constants: ShapeConstants::DEFAULT,
            a: defaults::SEMI_MAJOR_AXIS,
            b: defaults::SEMI_MINOR_AXIS,
            curvature,
            state: AnimationState::default(),
            displayed_rotation: 0.0,
            pending: None,
            next_token: 0,
        }
    }

    pub fn with_config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_constants(mut self, constants: ShapeConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Override the semi-axes; callers are expected to pass positive values.
    pub fn with_axes(mut self, a: f64, b: f64) -> Self {
        self.a = a;
        self.b = b;
        self
    }

    /// Start a transition towards `target` degrees.
    ///
    /// An in-flight transition is superseded: its pending frame becomes stale
    /// and the new one starts from the rotation currently on screen.
    pub fn request_rotation(&mut self, target: f64) -> FrameToken {
        if self.state.is_transitioning {
            crate::log::debug!(
                from = self.displayed_rotation,
                old_target = self.state.target_rotation,
                new_target = target,
                "rotation transition interrupted"
            );
        }
        self.state = AnimationState {
            is_transitioning: true,
            current_rotation: self.displayed_rotation,
            target_rotation: target,
            start_timestamp: None,
        };
        self.schedule()
    }

    /// Run one frame at timestamp `now` (milliseconds).
    pub fn on_frame(&mut self, token: FrameToken, now: f64) -> FrameStatus {
        if self.pending != Some(token) {
            return FrameStatus::Stale;
        }
        self.pending = None;

        let start = *self.state.start_timestamp.get_or_insert(now);
        let progress = if self.config.duration_ms > 0.0 {
            ((now - start) / self.config.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            let target = self.state.target_rotation;
            self.state = AnimationState {
                is_transitioning: false,
                current_rotation: target,
                target_rotation: target,
                start_timestamp: None,
            };
            self.displayed_rotation = target;
            self.publish_path();
            crate::log::debug!(rotation = target, "rotation transition finished");
            return FrameStatus::Finished;
        }

        let eased = ease_in_out_cubic(progress);
        let AnimationState {
            current_rotation: from,
            target_rotation: to,
            ..
        } = self.state;
        self.displayed_rotation = from + (to - from) * eased;
        self.publish_path();
        FrameStatus::Continue(self.schedule())
    }

    /// Drop the pending frame and settle at the rotation on screen.
    ///
    /// The surface is not touched.
    pub fn cancel(&mut self) {
        self.pending = None;
        if self.state.is_transitioning {
            crate::log::debug!(rotation = self.displayed_rotation, "rotation transition cancelled");
        }
        self.state = AnimationState {
            is_transitioning: false,
            current_rotation: self.displayed_rotation,
            target_rotation: self.displayed_rotation,
            start_timestamp: None,
        };
    }

    /// Deliver frames from `clock` until no frame is pending. Returns the
    /// number of frames run.
    ///
    /// Stops early, leaving the frame pending, if the clock yields a
    /// timestamp that is not finite or does not move past the previous one.
    pub fn drive(&mut self, clock: &mut impl FrameClock) -> usize {
        let mut frames = 0;
        let mut last: Option<f64> = None;
        while let Some(token) = self.pending {
            let now = clock.next_frame();
            if !now.is_finite() || last.is_some_and(|prev| now <= prev) {
                crate::log::warn!(now, previous = ?last, "frame clock stalled, transition left pending");
                break;
            }
            last = Some(now);
            frames += 1;
            if self.on_frame(token, now) == FrameStatus::Finished {
                break;
            }
        }
        frames
    }

    /// Change the curvature and republish at the rotation on screen.
    pub fn set_curvature(&mut self, curvature: Curvature) {
        self.curvature = curvature;
        self.publish_path();
    }

    /// Publish fill, stroke and stroke width.
    pub fn set_style(&mut self, style: &ShapeStyle) {
        self.surface.set_fill(&style.fill);
        self.surface.set_stroke(&style.stroke);
        self.surface.set_stroke_width(&style.stroke_width.to_string());
    }

    /// Publish the path for the rotation currently on screen.
    pub fn refresh(&mut self) {
        self.publish_path();
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn displayed_rotation(&self) -> f64 {
        self.displayed_rotation
    }

    pub fn curvature(&self) -> Curvature {
        self.curvature
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Path data for the rotation currently on screen.
    pub fn current_path(&self) -> String {
        build_path_with(
            &self.constants,
            self.a,
            self.b,
            self.curvature.exponent().raw(),
            self.displayed_rotation,
        )
    }

    fn publish_path(&mut self) {
        let d = self.current_path();
        self.surface.set_path_data(&d);
    }

    fn schedule(&mut self) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        token
    }
}
