//! Headless widgets for touchslide.
//!
//! Widgets here own no rendering tree. A host feeds them measured sizes,
//! touch events and frame ticks, and draws the geometry they derive.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use touchslide_components::slider::{Region, Slider, SliderArgs};
//! use touchslide_ui::{DpSize, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new());
//! let args = SliderArgs::default().value(0.25).animate_transitions(true);
//! let mut slider = Slider::new(args.clone(), clock.clone()).unwrap();
//! slider.on_layout(Region::Container, DpSize::from_dp(200.0, 40.0));
//! slider.on_layout(Region::Track, DpSize::from_dp(200.0, 4.0));
//! slider.on_layout(Region::Thumb, DpSize::from_dp(20.0, 20.0));
//!
//! slider.update_args(args.value(0.75)).unwrap();
//! clock.advance_millis(150);
//! slider.on_frame();
//! assert_eq!(slider.value(), 0.75);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod slider;
