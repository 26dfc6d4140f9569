use touchslide_ui::Callback;
use tracing::debug;

use crate::animation::{AnimationSpec, Transition};

enum ValueState {
    Resolved(f64),
    Animating {
        transition: Transition,
        on_complete: Option<Callback>,
    },
}

/// Holds a slider's current value, either settled or mid-transition.
///
/// Only one transition is live at a time; starting another, or setting the
/// value directly, drops the previous one together with its completion
/// callback.
pub struct ValueStore {
    state: ValueState,
}

impl ValueStore {
    /// Creates a store settled at `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            state: ValueState::Resolved(initial),
        }
    }

    /// Sets the value synchronously. Fires no callback.
    pub fn set_immediate(&mut self, value: f64) {
        self.state = ValueState::Resolved(value);
    }

    /// Starts a transition from the value at `now_nanos` towards `target`.
    pub fn set_animated(
        &mut self,
        target: f64,
        spec: AnimationSpec,
        on_complete: Option<Callback>,
        now_nanos: u64,
    ) {
        let (start, velocity) = match &self.state {
            ValueState::Resolved(value) => (*value, 0.0),
            ValueState::Animating { transition, .. } => {
                let sample = transition.sample(now_nanos);
                (sample.value, sample.velocity)
            }
        };
        debug!(start, target, ?spec, "value transition started");
        let transition =
            Transition::new(start, target, spec, now_nanos).with_initial_velocity(velocity);
        self.state = ValueState::Animating {
            transition,
            on_complete,
        };
    }

    /// Instantaneous value at `now_nanos`, including mid-flight values.
    pub fn read_at(&self, now_nanos: u64) -> f64 {
        match &self.state {
            ValueState::Resolved(value) => *value,
            ValueState::Animating { transition, .. } => transition.sample(now_nanos).value,
        }
    }

    /// The value the store is heading to.
    pub fn target(&self) -> f64 {
        match &self.state {
            ValueState::Resolved(value) => *value,
            ValueState::Animating { transition, .. } => transition.target(),
        }
    }

    /// `true` while a transition is live.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, ValueState::Animating { .. })
    }

    /// Settles a finished transition and hands back its completion callback.
    ///
    /// Returns `None` while still running, when already settled, or when the
    /// finished transition had no callback. Each callback is returned once.
    pub fn advance(&mut self, now_nanos: u64) -> Option<Callback> {
        let ValueState::Animating { transition, .. } = &self.state else {
            return None;
        };
        if !transition.sample(now_nanos).finished {
            return None;
        }
        let target = transition.target();
        let previous = std::mem::replace(&mut self.state, ValueState::Resolved(target));
        debug!(target, "value transition finished");
        match previous {
            ValueState::Animating { on_complete, .. } => on_complete,
            ValueState::Resolved(_) => None,
        }
    }

    /// Drops any live transition without firing its callback, freezing the
    /// value where it was at `now_nanos`.
    pub fn cancel(&mut self, now_nanos: u64) {
        if self.is_animating() {
            self.state = ValueState::Resolved(self.read_at(now_nanos));
        }
    }
}
