use touchslide_ui::{Dp, DpPosition, DpSize};
use tracing::{debug, trace};

use super::{
    bounds::Bounds,
    geometry::{point_in_rect, thumb_offset, thumb_touch_rect, touch_overflow, value_for_drag},
    measure::MeasuredLayout,
    value::ValueStore,
};

/// Inputs a gesture needs besides its own session.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    /// Current range.
    pub bounds: &'a Bounds,
    /// Published measurements (zero sizes before readiness).
    pub layout: &'a MeasuredLayout,
    /// Whether the measurements are complete.
    pub ready: bool,
    /// Disabled sliders ignore gestures.
    pub disabled: bool,
    /// Mirrors the value axis.
    pub right_to_left: bool,
    /// Configured hit-target size around the thumb.
    pub touch_size: DpSize,
    /// Frame time used to read an animating value.
    pub now_nanos: u64,
}

impl GestureContext<'_> {
    fn thumb_offset_for(&self, value: f64) -> Dp {
        thumb_offset(
            value,
            self.bounds,
            self.layout.container.width,
            self.layout.thumb.width,
            self.right_to_left,
        )
    }
}

/// State kept between capture grant and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Thumb offset when the gesture was granted; drags are measured from it.
    pub previous_thumb_offset: Dp,
}

/// Where the gesture machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture owned.
    #[default]
    Idle,
    /// A gesture is captured.
    Capturing(GestureSession),
}

/// What a gesture step produced, for the caller to dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Capture granted with the value at that moment.
    SlidingStart(f64),
    /// Value updated by a drag.
    ValueChange(f64),
    /// Gesture finished with this value.
    SlidingComplete(f64),
}

/// Capture / drag / release state machine.
///
/// Drags carry the cumulative horizontal delta since the grant, not a
/// per-event delta.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// `true` while a gesture is captured.
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, GestureState::Capturing(_))
    }

    /// Whether a fresh touch-down at `point` (touch-area coordinates) should
    /// be captured.
    pub fn should_capture(
        &self,
        ctx: &GestureContext<'_>,
        value: &ValueStore,
        point: DpPosition,
    ) -> bool {
        if ctx.disabled || !ctx.ready {
            return false;
        }
        let layout = ctx.layout;
        let offset = ctx.thumb_offset_for(value.read_at(ctx.now_nanos));
        let overflow = touch_overflow(ctx.touch_size, layout.thumb, layout.container);
        let rect = thumb_touch_rect(
            offset,
            layout.thumb,
            layout.container,
            ctx.touch_size,
            overflow,
        );
        let hit = point_in_rect(&rect, point.x, point.y);
        trace!(?point, ?rect, hit, "capture admission");
        hit
    }

    /// A touch moving over the thumb never starts a capture.
    pub fn move_should_capture(&self) -> bool {
        false
    }

    /// Another gesture owner asking to take over is always refused.
    pub fn allow_takeover(&self) -> bool {
        false
    }

    /// Starts a session anchored at the current thumb offset.
    pub fn grant(&mut self, ctx: &GestureContext<'_>, value: &ValueStore) -> GestureEvent {
        let current = value.read_at(ctx.now_nanos);
        let previous_thumb_offset = ctx.thumb_offset_for(current);
        debug!(current, %previous_thumb_offset, "slider capture granted");
        self.state = GestureState::Capturing(GestureSession {
            previous_thumb_offset,
        });
        GestureEvent::SlidingStart(current)
    }

    /// Applies a drag of `dx` since the grant.
    pub fn drag(
        &mut self,
        ctx: &GestureContext<'_>,
        value: &mut ValueStore,
        dx: Dp,
    ) -> Option<GestureEvent> {
        let GestureState::Capturing(session) = self.state else {
            return None;
        };
        if ctx.disabled {
            return None;
        }
        let next = self.value_for(ctx, value, session, dx);
        value.set_immediate(next);
        trace!(%dx, next, "slider drag");
        Some(GestureEvent::ValueChange(next))
    }

    /// Ends the session with a final drag of `dx`.
    pub fn release(
        &mut self,
        ctx: &GestureContext<'_>,
        value: &mut ValueStore,
        dx: Dp,
    ) -> Option<GestureEvent> {
        let GestureState::Capturing(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        if ctx.disabled {
            return None;
        }
        let next = self.value_for(ctx, value, session, dx);
        value.set_immediate(next);
        debug!(%dx, next, "slider gesture released");
        Some(GestureEvent::SlidingComplete(next))
    }

    /// Forced termination; behaves like [`GestureMachine::release`].
    pub fn terminate(
        &mut self,
        ctx: &GestureContext<'_>,
        value: &mut ValueStore,
        dx: Dp,
    ) -> Option<GestureEvent> {
        self.release(ctx, value, dx)
    }

    /// Drops any session without touching the value.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    fn value_for(
        &self,
        ctx: &GestureContext<'_>,
        value: &ValueStore,
        session: GestureSession,
        dx: Dp,
    ) -> f64 {
        value_for_drag(
            session.previous_thumb_offset,
            dx,
            ctx.bounds,
            ctx.layout.container.width,
            ctx.layout.thumb.width,
            ctx.right_to_left,
        )
        .unwrap_or_else(|| value.read_at(ctx.now_nanos))
    }
}
