//! Frame clocks.
//!
//! Widgets never read the wall clock directly. They take the current frame
//! time (nanoseconds since an arbitrary origin) from a [`FrameClock`], so
//! animations can be replayed deterministically with a [`ManualClock`].

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

#[cfg(not(target_family = "wasm"))]
use std::time::Instant;
#[cfg(target_family = "wasm")]
use web_time::Instant;

/// Source of frame timestamps.
pub trait FrameClock: Send + Sync {
    /// Current frame time in nanoseconds. Must be monotonic.
    fn frame_time_nanos(&self) -> u64;
}

/// Clock backed by a monotonic [`Instant`], measured from its creation.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Clock advanced by hand. Clones share the same time.
///
/// ```
/// use touchslide_ui::time::{FrameClock, ManualClock};
///
/// let clock = ManualClock::new();
/// let shared = clock.clone();
/// clock.advance_millis(16);
/// assert_eq!(shared.frame_time_nanos(), 16_000_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance_nanos(&self, nanos: u64) {
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    /// Moves time forward by whole milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance_nanos(millis.saturating_mul(1_000_000));
    }

    /// Jumps to an absolute time. Going backwards is ignored.
    pub fn set_nanos(&self, nanos: u64) {
        self.nanos.fetch_max(nanos, Ordering::SeqCst);
    }
}

impl FrameClock for ManualClock {
    fn frame_time_nanos(&self) -> u64 {
        self.nanos.load(Ordering::SeqCst)
    }
}
