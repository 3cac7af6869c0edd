//! Per-attribute transitions driven by a host frame clock.
//!
//! Every animated attribute of a widget owns one [`Transition`]. The widget
//! hands it the latest target each frame; the transition moves from whatever
//! value it currently shows toward that target, so a target arriving
//! mid-flight bends the motion instead of restarting it.
//!
//! ```
//! use std::time::Duration;
//! use flex_ui_core::animation::{AnimationSpec, Transition};
//!
//! let mut height = Transition::new(28.0_f32, AnimationSpec::default());
//! height.set_target(32.0);
//! height.tick(Duration::from_millis(16));
//! assert!(*height.value() > 28.0 && *height.value() < 32.0);
//! height.tick(Duration::from_secs(1));
//! assert!(height.is_idle());
//! ```

use core::time::Duration;

use flex_ui_color::Color;

/// Values a [`Transition`] can interpolate.
pub trait Animatable: Clone + PartialEq {
    /// Returns the value `fraction` of the way from `self` to `target`.
    fn interpolate(&self, target: &Self, fraction: f32) -> Self;
}

impl Animatable for f32 {
    fn interpolate(&self, target: &Self, fraction: f32) -> Self {
        (target - self).mul_add(fraction, *self)
    }
}

impl Animatable for Color {
    fn interpolate(&self, target: &Self, fraction: f32) -> Self {
        self.lerp(*target, fraction)
    }
}

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Standard motion curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`.
    #[default]
    FastOutSlowIn,
    /// Cubic deceleration.
    EaseOut,
    /// Sharp exponential snap toward the target.
    ExponentialOut,
    /// Jump straight to the target.
    Instant,
}

impl Easing {
    /// Applies the easing function to a progress value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

// Evaluates the y of a CSS-style cubic bezier at x = `t`.
#[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    fn sample(a: f32, b: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    }
    fn slope(a: f32, b: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    }

    let mut s = t;
    for _ in 0..8 {
        let error = sample(x1, x2, s) - t;
        if error.abs() < 1e-5 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= error / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

/// Duration and curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Time from start to target.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Default transition duration.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

    /// Creates a spec.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A spec that jumps to every new target.
    #[must_use]
    pub const fn snap() -> Self {
        Self::new(Duration::ZERO, Easing::Instant)
    }

    const fn is_instant(&self) -> bool {
        self.duration.is_zero() || matches!(self.easing, Easing::Instant)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, Easing::FastOutSlowIn)
    }
}

/// State of one animated attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionState<T> {
    /// Resting at a value.
    Idle(T),
    /// Moving toward `target`.
    Animating {
        /// Value the current leg started from.
        from: T,
        /// Value shown this frame.
        current: T,
        /// Value the leg ends at.
        target: T,
        /// Time spent in the current leg.
        elapsed: Duration,
    },
}

/// An animated attribute: `Idle(value) -> Animating(current, target) -> Idle(target)`.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    state: TransitionState<T>,
    spec: AnimationSpec,
}

impl<T: Animatable> Transition<T> {
    /// Creates a transition resting at `value`.
    #[must_use]
    pub const fn new(value: T, spec: AnimationSpec) -> Self {
        Self {
            state: TransitionState::Idle(value),
            spec,
        }
    }

    /// The value shown this frame.
    #[must_use]
    pub const fn value(&self) -> &T {
        match &self.state {
            TransitionState::Idle(value) | TransitionState::Animating { current: value, .. } => {
                value
            }
        }
    }

    /// The value the attribute is heading to.
    #[must_use]
    pub const fn target(&self) -> &T {
        match &self.state {
            TransitionState::Idle(value) | TransitionState::Animating { target: value, .. } => {
                value
            }
        }
    }

    /// The raw state.
    #[must_use]
    pub const fn state(&self) -> &TransitionState<T> {
        &self.state
    }

    /// The spec used for new legs.
    #[must_use]
    pub const fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Whether the attribute is at rest.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, TransitionState::Idle(_))
    }

    /// Heads toward `target`, starting from the value shown right now.
    ///
    /// Returns `false` if `target` already is the current target.
    pub fn set_target(&mut self, target: T) -> bool {
        if *self.target() == target {
            return false;
        }
        if self.spec.is_instant() {
            self.state = TransitionState::Idle(target);
            return true;
        }
        let from = self.value().clone();
        self.state = TransitionState::Animating {
            current: from.clone(),
            from,
            target,
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Jumps to `value` without animating.
    pub fn snap_to(&mut self, value: T) {
        self.state = TransitionState::Idle(value);
    }

    /// Advances the current leg by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let finished = match &mut self.state {
            TransitionState::Idle(_) => return,
            TransitionState::Animating {
                from,
                current,
                target,
                elapsed,
            } => {
                *elapsed = elapsed.saturating_add(dt);
                let progress = if self.spec.duration.is_zero() {
                    1.0
                } else {
                    elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()
                };
                if progress >= 1.0 {
                    Some(target.clone())
                } else {
                    *current = from.interpolate(target, self.spec.easing.apply(progress));
                    None
                }
            }
        };
        if let Some(target) = finished {
            self.state = TransitionState::Idle(target);
        }
    }

    /// Sets the target, advances by `dt` and returns the value to draw.
    pub fn animate_to(&mut self, target: T, dt: Duration) -> T {
        if self.set_target(target) {
            tracing::trace!(target: "flex_ui::animation", "transition retargeted");
        }
        self.tick(dt);
        self.value().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::FastOutSlowIn,
            Easing::EaseOut,
            Easing::ExponentialOut,
        ] {
            assert!(approx_eq(easing.apply(0.0), 0.0, 1e-3), "{easing:?}");
            assert!(approx_eq(easing.apply(1.0), 1.0, 1e-3), "{easing:?}");
        }
        assert!(approx_eq(Easing::Instant.apply(0.0), 1.0, 0.0));
    }

    #[test]
    fn fast_out_slow_in_is_monotonic_and_front_loaded() {
        let mut previous = 0.0;
        for step in 1..=20u8 {
            let value = Easing::FastOutSlowIn.apply(f32::from(step) / 20.0);
            assert!(value >= previous);
            previous = value;
        }
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.5);
    }

    #[test]
    fn reaches_target_and_goes_idle() {
        let mut transition = Transition::new(0.0_f32, AnimationSpec::default());
        assert!(transition.set_target(100.0));
        assert!(!transition.is_idle());

        for _ in 0..20 {
            transition.tick(FRAME);
        }

        assert!(transition.is_idle());
        assert!(approx_eq(*transition.value(), 100.0, 1e-4));
    }

    #[test]
    fn same_target_is_a_no_op() {
        let mut transition = Transition::new(1.0_f32, AnimationSpec::default());
        assert!(!transition.set_target(1.0));
        assert!(transition.is_idle());
    }

    #[test]
    fn retarget_starts_from_in_flight_value() {
        let spec = AnimationSpec::new(Duration::from_millis(100), Easing::Linear);
        let mut transition = Transition::new(0.0_f32, spec);
        transition.set_target(100.0);
        transition.tick(Duration::from_millis(50));
        let in_flight = *transition.value();
        assert!(approx_eq(in_flight, 50.0, 1e-3));

        transition.set_target(0.0);
        match transition.state() {
            TransitionState::Animating { from, target, .. } => {
                assert!(approx_eq(*from, in_flight, 1e-6));
                assert!(approx_eq(*target, 0.0, 1e-6));
            }
            TransitionState::Idle(_) => panic!("expected an animating state"),
        }

        transition.tick(Duration::from_millis(50));
        assert!(approx_eq(*transition.value(), 25.0, 1e-3));
    }

    #[test]
    fn instant_spec_never_animates() {
        let mut transition = Transition::new(0.0_f32, AnimationSpec::snap());
        transition.set_target(5.0);
        assert!(transition.is_idle());
        assert!(approx_eq(*transition.value(), 5.0, 0.0));
    }

    #[test]
    fn colors_interpolate_per_channel() {
        let spec = AnimationSpec::new(Duration::from_millis(100), Easing::Linear);
        let mut transition = Transition::new(Color::BLACK, spec);
        let value = transition.animate_to(Color::WHITE, Duration::from_millis(50));
        assert!(approx_eq(value.red, 0.5, 1e-3));
        assert!(approx_eq(value.alpha, 1.0, 1e-6));

        transition.snap_to(Color::TRANSPARENT);
        assert!(transition.is_idle());
        assert_eq!(*transition.value(), Color::TRANSPARENT);
    }
}
