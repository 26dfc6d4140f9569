//! Value transitions driven by an injected frame clock.
//!
//! A [`Transition`] is a pure descriptor: `start`, `target`, an
//! [`AnimationSpec`] and the frame time it began. [`Transition::sample`]
//! computes the value at any later frame time without mutable state, which
//! keeps animations reproducible under a [`ManualClock`].
//!
//! Two kinds are supported:
//!
//! - [`AnimationType::Timing`]: eased interpolation over a fixed duration
//!   (150 ms `in_out(ease)` by default).
//! - [`AnimationType::Spring`]: damped harmonic oscillator configured with
//!   tension/friction (100/7 by default).
//!
//! [`ManualClock`]: touchslide_ui::ManualClock

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Easing curves for timing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    /// `cubic-bezier(0.42, 0.0, 1.0, 1.0)`.
    EaseIn,
    /// `cubic-bezier(0.0, 0.0, 0.58, 1.0)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0.0, 0.58, 1.0)`.
    EaseInOut,
    /// [`Easing::EaseIn`] made symmetric: the first half runs the curve
    /// forwards, the second half mirrored.
    #[default]
    InOutEase,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f64) -> f64 {
        match self {
            Easing::Linear => fraction,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::InOutEase => {
                if fraction < 0.5 {
                    Easing::EaseIn.transform(fraction * 2.0) / 2.0
                } else {
                    1.0 - Easing::EaseIn.transform((1.0 - fraction) * 2.0) / 2.0
                }
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching `fraction` on x.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..24 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Which interpolation a slider uses for animated value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// Physics-based spring.
    Spring,
    /// Fixed-duration eased interpolation.
    #[default]
    Timing,
}

impl AnimationType {
    /// Resolves this kind against per-field overrides.
    pub fn resolve(self, overrides: &AnimationConfig) -> AnimationSpec {
        match self {
            AnimationType::Timing => {
                let defaults = TimingSpec::default();
                AnimationSpec::Timing(TimingSpec {
                    duration_millis: overrides.duration_millis.unwrap_or(defaults.duration_millis),
                    easing: overrides.easing.unwrap_or(defaults.easing),
                    delay_millis: overrides.delay_millis.unwrap_or(defaults.delay_millis),
                })
            }
            AnimationType::Spring => {
                let defaults = SpringSpec::default();
                AnimationSpec::Spring(SpringSpec {
                    tension: overrides.tension.unwrap_or(defaults.tension),
                    friction: overrides.friction.unwrap_or(defaults.friction),
                    delay_millis: overrides.delay_millis.unwrap_or(defaults.delay_millis),
                    rest_displacement_threshold: overrides
                        .rest_displacement_threshold
                        .unwrap_or(defaults.rest_displacement_threshold),
                    rest_speed_threshold: overrides
                        .rest_speed_threshold
                        .unwrap_or(defaults.rest_speed_threshold),
                    overshoot_clamping: overrides
                        .overshoot_clamping
                        .unwrap_or(defaults.overshoot_clamping),
                })
            }
        }
    }
}

/// Per-field overrides for the defaults of an [`AnimationType`].
///
/// Fields that do not apply to the chosen kind are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationConfig {
    /// Timing: total duration.
    pub duration_millis: Option<u64>,
    /// Timing: easing curve.
    pub easing: Option<Easing>,
    /// Both kinds: wait before the value starts moving.
    pub delay_millis: Option<u64>,
    /// Spring: tension.
    pub tension: Option<f64>,
    /// Spring: friction.
    pub friction: Option<f64>,
    /// Spring: distance to target under which the spring may rest.
    pub rest_displacement_threshold: Option<f64>,
    /// Spring: speed under which the spring may rest.
    pub rest_speed_threshold: Option<f64>,
    /// Spring: stop as soon as the target is crossed.
    pub overshoot_clamping: Option<bool>,
}

/// Fully resolved timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing applied to linear progress.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self {
            duration_millis: 150,
            easing: Easing::InOutEase,
            delay_millis: 0,
        }
    }
}

/// Fully resolved spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Tension, mapped to stiffness by [`SpringSpec::stiffness`].
    pub tension: f64,
    /// Friction, mapped to damping by [`SpringSpec::damping`].
    pub friction: f64,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
    /// Rest threshold on `|target - value|`.
    pub rest_displacement_threshold: f64,
    /// Rest threshold on `|velocity|` (units per second).
    pub rest_speed_threshold: f64,
    /// Finish as soon as the value reaches or crosses the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            tension: 100.0,
            friction: 7.0,
            delay_millis: 0,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
            overshoot_clamping: false,
        }
    }
}

impl SpringSpec {
    /// Stiffness of the equivalent oscillator.
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient of the equivalent oscillator.
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }

    /// Position and velocity `t` seconds after release, for unit mass.
    fn evaluate(&self, from: f64, to: f64, initial_velocity: f64, t: f64) -> (f64, f64) {
        let k = self.stiffness().max(f64::EPSILON);
        let c = self.damping().max(0.0);
        let zeta = c / (2.0 * k.sqrt());
        let omega0 = k.sqrt();
        let x0 = to - from;
        let v0 = -initial_velocity;

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let a = (v0 + zeta * omega0 * x0) / omega1;
            let (sin, cos) = (omega1 * t).sin_cos();
            let position = to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (sin * a + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (position, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let position = to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }
}

/// A resolved transition kind with all parameters filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    /// Eased interpolation over a fixed duration.
    Timing(TimingSpec),
    /// Damped spring.
    Spring(SpringSpec),
}

impl AnimationSpec {
    fn delay_nanos(&self) -> u64 {
        let millis = match self {
            AnimationSpec::Timing(spec) => spec.delay_millis,
            AnimationSpec::Spring(spec) => spec.delay_millis,
        };
        millis.saturating_mul(NANOS_PER_MILLI)
    }
}

/// Value of a transition at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Interpolated value.
    pub value: f64,
    /// Rate of change in units per second.
    pub velocity: f64,
    /// `true` once the transition has settled on its target.
    pub finished: bool,
}

/// A transition from `start` to `target` beginning at `start_nanos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    start: f64,
    target: f64,
    initial_velocity: f64,
    spec: AnimationSpec,
    start_nanos: u64,
}

impl Transition {
    /// Creates a transition that starts at rest.
    pub fn new(start: f64, target: f64, spec: AnimationSpec, start_nanos: u64) -> Self {
        Self {
            start,
            target,
            initial_velocity: 0.0,
            spec,
            start_nanos,
        }
    }

    /// Carries velocity into a spring so retargeting mid-flight stays smooth.
    /// Timing transitions ignore it.
    pub fn with_initial_velocity(mut self, velocity: f64) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Computes the value at `now_nanos`. Frames before the start (or within
    /// the delay) report the start value.
    pub fn sample(&self, now_nanos: u64) -> Sample {
        let elapsed = now_nanos.saturating_sub(self.start_nanos);
        let delay = self.spec.delay_nanos();
        if elapsed < delay {
            return Sample {
                value: self.start,
                velocity: 0.0,
                finished: false,
            };
        }
        let running = elapsed - delay;

        match self.spec {
            AnimationSpec::Timing(spec) => {
                let duration = spec.duration_millis.saturating_mul(NANOS_PER_MILLI);
                if duration == 0 || running >= duration {
                    return self.settled();
                }
                let linear = running as f64 / duration as f64;
                let eased = spec.easing.transform(linear);
                let value = self.start + (self.target - self.start) * eased;
                let velocity = (self.target - self.start) * NANOS_PER_SECOND / duration as f64;
                Sample {
                    value,
                    velocity,
                    finished: false,
                }
            }
            AnimationSpec::Spring(spec) => {
                let t = running as f64 / NANOS_PER_SECOND;
                let (position, velocity) =
                    spec.evaluate(self.start, self.target, self.initial_velocity, t);

                let overshot = spec.overshoot_clamping
                    && spec.stiffness() != 0.0
                    && if self.start < self.target {
                        position > self.target
                    } else {
                        position < self.target
                    };
                let at_rest = velocity.abs() <= spec.rest_speed_threshold
                    && (self.target - position).abs() <= spec.rest_displacement_threshold;

                if overshot || at_rest || spec.stiffness() == 0.0 {
                    return self.settled();
                }
                Sample {
                    value: position,
                    velocity,
                    finished: false,
                }
            }
        }
    }

    fn settled(&self) -> Sample {
        Sample {
            value: self.target,
            velocity: 0.0,
            finished: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: u64 = 16_666_667;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::InOutEase,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn in_out_ease_is_symmetric_around_midpoint() {
        let e = Easing::InOutEase;
        assert!((e.transform(0.5) - 0.5).abs() < 1e-6);
        let a = e.transform(0.2);
        let b = e.transform(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!(a < 0.2);
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let config = AnimationConfig {
            duration_millis: Some(300),
            ..Default::default()
        };
        let AnimationSpec::Timing(spec) = AnimationType::Timing.resolve(&config) else {
            panic!("expected timing spec");
        };
        assert_eq!(spec.duration_millis, 300);
        assert_eq!(spec.easing, Easing::InOutEase);
        assert_eq!(spec.delay_millis, 0);

        let config = AnimationConfig {
            friction: Some(12.0),
            ..Default::default()
        };
        let AnimationSpec::Spring(spec) = AnimationType::Spring.resolve(&config) else {
            panic!("expected spring spec");
        };
        assert_eq!(spec.friction, 12.0);
        assert_eq!(spec.tension, 100.0);
    }

    #[test]
    fn timing_transition_reaches_target_after_duration() {
        let spec = AnimationType::Timing.resolve(&AnimationConfig::default());
        let transition = Transition::new(0.0, 10.0, spec, 1_000);

        let first = transition.sample(1_000);
        assert_eq!(first.value, 0.0);
        assert!(!first.finished);

        let mid = transition.sample(1_000 + 75 * NANOS_PER_MILLI);
        assert!((mid.value - 5.0).abs() < 1e-6);
        assert!(!mid.finished);

        let end = transition.sample(1_000 + 150 * NANOS_PER_MILLI);
        assert_eq!(end.value, 10.0);
        assert!(end.finished);
    }

    #[test]
    fn timing_delay_holds_start_value() {
        let config = AnimationConfig {
            delay_millis: Some(50),
            ..Default::default()
        };
        let transition = Transition::new(1.0, 2.0, AnimationType::Timing.resolve(&config), 0);
        assert_eq!(transition.sample(40 * NANOS_PER_MILLI).value, 1.0);
        assert!(transition.sample(100 * NANOS_PER_MILLI).value > 1.0);
    }

    #[test]
    fn default_spring_overshoots_then_settles() {
        let spec = AnimationType::Spring.resolve(&AnimationConfig::default());
        let transition = Transition::new(0.0, 1.0, spec, 0);

        let mut now = 0;
        let mut max_seen = 0.0f64;
        let mut finished_at = None;
        for frame in 0..600 {
            now += FRAME;
            let sample = transition.sample(now);
            max_seen = max_seen.max(sample.value);
            if sample.finished {
                finished_at = Some(frame);
                assert_eq!(sample.value, 1.0);
                break;
            }
        }
        assert!(max_seen > 1.0, "under-damped spring should overshoot");
        assert!(finished_at.is_some(), "spring never came to rest");
    }

    #[test]
    fn overshoot_clamping_finishes_on_first_crossing() {
        let config = AnimationConfig {
            overshoot_clamping: Some(true),
            ..Default::default()
        };
        let transition = Transition::new(0.0, 1.0, AnimationType::Spring.resolve(&config), 0);
        let mut now = 0;
        loop {
            now += FRAME;
            let sample = transition.sample(now);
            assert!(sample.value <= 1.0);
            if sample.finished {
                break;
            }
        }
    }

    #[test]
    fn spring_sampling_is_deterministic() {
        let spec = AnimationType::Spring.resolve(&AnimationConfig::default());
        let a = Transition::new(0.0, 5.0, spec, 0).with_initial_velocity(3.0);
        let b = Transition::new(0.0, 5.0, spec, 0).with_initial_velocity(3.0);
        for i in 1..20 {
            assert_eq!(a.sample(i * FRAME), b.sample(i * FRAME));
        }
    }
}
