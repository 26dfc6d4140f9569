//! Foundation types shared by touchslide widgets.
//!
//! The crate has no widgets of its own. It provides the logical unit system
//! ([`Dp`] and friends), [`Color`], identity-compared callback props, frame
//! clocks for deterministic animation, and the tracing setup used by hosts.
//!
//! # Logging
//!
//! Widgets log through `tracing`. Call [`init_tracing`] once at startup to
//! print those events; `RUST_LOG` overrides the default filter.
//!
//! ```no_run
//! touchslide_ui::init_tracing();
//! ```

pub mod color;
pub mod dp;
pub mod prop;
pub mod time;

pub use color::Color;
pub use dp::{Dp, DpPosition, DpRect, DpSize};
pub use prop::{Callback, CallbackWith};
pub use time::{FrameClock, ManualClock, SystemClock};

/// Installs a `tracing-subscriber` fmt subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `error,touchslide_components=info`.
/// Calling it twice is harmless.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,touchslide_components=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
