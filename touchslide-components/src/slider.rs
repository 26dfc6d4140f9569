//! A headless touch slider.
//!
//! ## Usage
//!
//! The host reports measured sizes through [`Slider::on_layout`], forwards
//! touch events to the gesture methods and draws whatever
//! [`Slider::visuals`] (or [`draw_list`]) returns. Values are published
//! through the callbacks on [`SliderArgs`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use touchslide_components::slider::{Region, Slider, SliderArgs};
//! use touchslide_ui::{Dp, DpPosition, DpSize, ManualClock};
//!
//! let args = SliderArgs::default()
//!     .maximum_value(100.0)
//!     .step(10.0)
//!     .on_value_change(|value| println!("value: {value}"));
//! let mut slider = Slider::new(args, Arc::new(ManualClock::new())).unwrap();
//!
//! slider.on_layout(Region::Container, DpSize::from_dp(200.0, 40.0));
//! slider.on_layout(Region::Track, DpSize::from_dp(200.0, 4.0));
//! slider.on_layout(Region::Thumb, DpSize::from_dp(20.0, 20.0));
//!
//! assert!(slider.should_capture(DpPosition::new(Dp(20.0), Dp(20.0))));
//! slider.grant();
//! slider.drag(Dp(55.0));
//! assert_eq!(slider.value(), 30.0);
//! ```
use std::sync::Arc;

use derive_setters::Setters;
use touchslide_ui::{
    Callback, CallbackWith, Color, Dp, DpPosition, DpSize, FrameClock, SystemClock,
};
use tracing::{trace, warn};

use crate::animation::{AnimationConfig, AnimationType};

use interaction::{GestureContext, GestureEvent, GestureMachine};
use value::ValueStore;

pub use bounds::{Bounds, SliderError};
pub use geometry::{
    graduation_offset, point_in_rect, ratio_of, thumb_offset, thumb_touch_rect, touch_overflow,
    value_for_drag, value_from_ratio,
};
pub use interaction::{GestureSession, GestureState};
pub use layout::{DebugTouchArea, SliderColors, SliderVisuals, TouchAreaMargins, TrackSegment};
pub use measure::{MeasureOutcome, MeasuredLayout, MeasurementCoordinator, Region};
pub use render::{DrawRect, SliderPart, draw_list};

mod bounds;
mod geometry;
mod interaction;
mod layout;
mod measure;
mod render;
mod value;

const GRADUATION_MARGIN: Dp = Dp(6.0);
const DEFAULT_TOUCH_SIZE: DpSize = DpSize::from_dp(40.0, 40.0);
const DEFAULT_GRADUATION_SIZE: DpSize = DpSize::from_dp(3.0, 10.0);

/// Arguments for a [`Slider`].
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct SliderArgs {
    /// Requested value. Changing it through [`Slider::update_args`] moves
    /// the slider, animated when `animate_transitions` is set.
    pub value: f64,
    /// Lower bound.
    pub minimum_value: f64,
    /// Upper bound.
    pub maximum_value: f64,
    /// Step size; `0` means continuous.
    pub step: f64,
    /// Ignore all gestures.
    pub disabled: bool,
    /// Hit-target size around the thumb.
    pub thumb_touch_size: DpSize,
    /// Color of the filled part of the track.
    pub minimum_track_tint_color: Color,
    /// Color of the unfilled part of the track and of graduations.
    pub maximum_track_tint_color: Color,
    /// Color of the thumb.
    pub thumb_tint_color: Color,
    /// Number of graduation ticks; `0` draws none.
    pub graduations: usize,
    /// Size of a graduation tick until one is measured.
    pub graduation_size: DpSize,
    /// Horizontal inset of the track from the container edge.
    pub track_offset: Dp,
    /// Animate external value changes instead of jumping.
    pub animate_transitions: bool,
    /// Spring or timing transitions.
    pub animation_type: AnimationType,
    /// Per-field overrides of the animation defaults.
    pub animation_config: AnimationConfig,
    /// Paint the touch area and thumb hit rectangle.
    pub debug_touch_area: bool,
    /// Mirror the value axis.
    pub right_to_left: bool,
    /// Label drawn on the thumb.
    #[setters(strip_option, into)]
    pub thumb_text: Option<String>,
    /// Called with every value produced by a drag.
    #[setters(skip)]
    pub on_value_change: CallbackWith<f64>,
    /// Called with the value when a gesture is captured.
    #[setters(skip)]
    pub on_sliding_start: CallbackWith<f64>,
    /// Called with the final value when a gesture ends.
    #[setters(skip)]
    pub on_sliding_complete: CallbackWith<f64>,
    /// Called once when an animated transition settles.
    #[setters(skip)]
    pub on_animation_complete: Callback,
}

impl SliderArgs {
    /// Sets the value-change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(on_value_change);
        self
    }

    /// Sets the sliding-start handler.
    pub fn on_sliding_start<F>(mut self, on_sliding_start: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_sliding_start = CallbackWith::new(on_sliding_start);
        self
    }

    /// Sets the sliding-complete handler.
    pub fn on_sliding_complete<F>(mut self, on_sliding_complete: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_sliding_complete = CallbackWith::new(on_sliding_complete);
        self
    }

    /// Sets the animation-complete handler.
    pub fn on_animation_complete<F>(mut self, on_animation_complete: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_animation_complete = Callback::new(on_animation_complete);
        self
    }

    fn bounds(&self) -> Result<Bounds, SliderError> {
        Bounds::new(self.minimum_value, self.maximum_value, self.step)
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            disabled: false,
            thumb_touch_size: DEFAULT_TOUCH_SIZE,
            minimum_track_tint_color: Color::from_hex(0x3f3f3f),
            maximum_track_tint_color: Color::from_hex(0xb3b3b3),
            thumb_tint_color: Color::from_hex(0x343434),
            graduations: 0,
            graduation_size: DEFAULT_GRADUATION_SIZE,
            track_offset: Dp::ZERO,
            animate_transitions: false,
            animation_type: AnimationType::default(),
            animation_config: AnimationConfig::default(),
            debug_touch_area: false,
            right_to_left: false,
            thumb_text: None,
            on_value_change: CallbackWith::noop(),
            on_sliding_start: CallbackWith::noop(),
            on_sliding_complete: CallbackWith::noop(),
            on_animation_complete: Callback::noop(),
        }
    }
}

/// One slider instance: measurements, gesture session and value.
pub struct Slider {
    args: SliderArgs,
    bounds: Bounds,
    measurements: MeasurementCoordinator,
    gesture: GestureMachine,
    value: ValueStore,
    clock: Arc<dyn FrameClock>,
    disposed: bool,
}

impl Slider {
    /// Creates a slider reading time from `clock`.
    ///
    /// The initial value is `args.value` clamped into the range.
    pub fn new(args: SliderArgs, clock: Arc<dyn FrameClock>) -> Result<Self, SliderError> {
        let bounds = args.bounds()?;
        let value = ValueStore::new(bounds.clamp(args.value));
        Ok(Self {
            measurements: MeasurementCoordinator::new(args.graduation_size),
            args,
            bounds,
            gesture: GestureMachine::new(),
            value,
            clock,
            disposed: false,
        })
    }

    /// Creates a slider driven by the wall clock.
    pub fn with_system_clock(args: SliderArgs) -> Result<Self, SliderError> {
        Self::new(args, Arc::new(SystemClock::new()))
    }

    /// Current arguments.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// Current validated range.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Gesture machine state.
    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    /// `true` while a gesture session is captured.
    pub fn is_sliding(&self) -> bool {
        self.gesture.is_capturing()
    }

    /// Reports the measured size of `region`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_layout(&mut self, region: Region, size: DpSize) -> MeasureOutcome {
        self.measurements.report(region, size)
    }

    /// Whether a touch-down at `point`, in touch-area coordinates, lands on
    /// the thumb. A disposed slider captures nothing.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn should_capture(&mut self, point: DpPosition) -> bool {
        if self.disposed {
            return false;
        }
        self.with_gesture(|machine, ctx, value| machine.should_capture(ctx, value, point))
    }

    /// Always `false`; moves never start a capture.
    pub fn move_should_capture(&self) -> bool {
        self.gesture.move_should_capture()
    }

    /// Always `false`; an owned gesture is never handed over.
    pub fn allow_takeover(&self) -> bool {
        self.gesture.allow_takeover()
    }

    /// Starts a gesture session and fires `on_sliding_start`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn grant(&mut self) {
        if self.disposed {
            return;
        }
        let event = self.with_gesture(|machine, ctx, value| machine.grant(ctx, value));
        self.dispatch(event);
    }

    /// Applies the cumulative horizontal drag `dx` and fires
    /// `on_value_change`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn drag(&mut self, dx: Dp) {
        if let Some(event) = self.with_gesture(|machine, ctx, value| machine.drag(ctx, value, dx)) {
            self.dispatch(event);
        }
    }

    /// Ends the gesture with a final drag of `dx` and fires
    /// `on_sliding_complete`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn release(&mut self, dx: Dp) {
        if let Some(event) =
            self.with_gesture(|machine, ctx, value| machine.release(ctx, value, dx))
        {
            self.dispatch(event);
        }
    }

    /// A forced end of the gesture; same as [`Slider::release`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn terminate(&mut self, dx: Dp) {
        if let Some(event) =
            self.with_gesture(|machine, ctx, value| machine.terminate(ctx, value, dx))
        {
            self.dispatch(event);
        }
    }

    /// Pushes an externally requested value change from `previous` to `next`.
    ///
    /// `next` is clamped. Nothing happens when both are equal or after
    /// [`Slider::dispose`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn reconcile_value(&mut self, previous: f64, next: f64) {
        if previous == next || self.disposed {
            return;
        }
        let target = self.bounds.clamp(next);
        if self.args.animate_transitions {
            self.animate_to(target);
        } else {
            self.value.set_immediate(target);
        }
    }

    /// Replaces the arguments, applying whatever changed.
    ///
    /// Invalid ranges are rejected and the previous arguments stay in
    /// effect. After [`Slider::dispose`] the arguments are ignored.
    pub fn update_args(&mut self, args: SliderArgs) -> Result<(), SliderError> {
        if self.disposed {
            trace!("arguments ignored on disposed slider");
            return Ok(());
        }
        let bounds = args.bounds().inspect_err(|error| {
            warn!(%error, "slider arguments rejected");
        })?;

        let bounds_changed = bounds != self.bounds;
        self.bounds = bounds;
        if args.graduation_size != self.args.graduation_size {
            self.measurements.set_configured_graduation(args.graduation_size);
        }

        let previous = self.args.value;
        let next = args.value;
        self.args = args;
        if bounds_changed {
            self.fit_value_to_bounds();
        }
        self.reconcile_value(previous, next);
        Ok(())
    }

    /// Advances animation to the clock's current frame.
    ///
    /// Fires `on_animation_complete` when a transition settles and returns
    /// whether another frame is needed.
    pub fn on_frame(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let now = self.clock.frame_time_nanos();
        if let Some(on_complete) = self.value.advance(now) {
            on_complete.call();
        }
        self.value.is_animating()
    }

    /// Value at the clock's current frame, mid-transition values included.
    pub fn value(&self) -> f64 {
        self.value.read_at(self.clock.frame_time_nanos())
    }

    /// `true` once container, track and thumb were measured.
    pub fn is_ready(&self) -> bool {
        self.measurements.is_ready()
    }

    /// What to draw for the current frame.
    pub fn visuals(&self) -> SliderVisuals {
        layout::compose(
            &self.args,
            &self.bounds,
            &self.measurements.layout_or_empty(),
            self.measurements.is_ready(),
            self.value(),
        )
    }

    /// Tears the slider down: drops any transition without firing its
    /// completion and ends any gesture session silently.
    ///
    /// Afterwards the slider is inert. Gestures, value changes and frames
    /// are ignored, so no callback fires again.
    pub fn dispose(&mut self) {
        self.value.cancel(self.clock.frame_time_nanos());
        self.gesture.reset();
        self.disposed = true;
    }

    fn animate_to(&mut self, target: f64) {
        let spec = self.args.animation_type.resolve(&self.args.animation_config);
        let now = self.clock.frame_time_nanos();
        self.value.set_animated(
            target,
            spec,
            Some(self.args.on_animation_complete.clone()),
            now,
        );
    }

    /// Pulls both the current value and any transition target into the
    /// range. A transition whose target moved restarts from the clamped
    /// current value.
    fn fit_value_to_bounds(&mut self) {
        let now = self.clock.frame_time_nanos();
        let current = self.value.read_at(now);
        let target = self.value.target();
        let clamped_current = self.bounds.clamp(current);
        let clamped_target = self.bounds.clamp(target);
        if clamped_current == current && clamped_target == target {
            return;
        }
        trace!(
            current,
            target,
            clamped_current,
            clamped_target,
            "value clamped into new range"
        );
        let animating = self.value.is_animating();
        self.value.set_immediate(clamped_current);
        if animating && clamped_target != clamped_current {
            self.animate_to(clamped_target);
        }
    }

    fn with_gesture<R>(
        &mut self,
        f: impl FnOnce(&mut GestureMachine, &GestureContext<'_>, &mut ValueStore) -> R,
    ) -> R {
        let layout = self.measurements.layout_or_empty();
        let ctx = GestureContext {
            bounds: &self.bounds,
            layout: &layout,
            ready: self.measurements.is_ready(),
            disabled: self.args.disabled,
            right_to_left: self.args.right_to_left,
            touch_size: self.args.thumb_touch_size,
            now_nanos: self.clock.frame_time_nanos(),
        };
        f(&mut self.gesture, &ctx, &mut self.value)
    }

    fn dispatch(&self, event: GestureEvent) {
        match event {
            GestureEvent::SlidingStart(value) => self.args.on_sliding_start.call(value),
            GestureEvent::ValueChange(value) => self.args.on_value_change.call(value),
            GestureEvent::SlidingComplete(value) => self.args.on_sliding_complete.call(value),
        }
    }
}
