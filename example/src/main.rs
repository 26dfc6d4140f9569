//! Drives a slider through a scripted session without a UI: measurement,
//! a stepped drag, then an animated external value change.
//!
//! Run with `RUST_LOG=debug` to see the widget's own events.

use std::sync::Arc;

use touchslide_components::{
    animation::AnimationType,
    slider::{Region, Slider, SliderArgs, SliderError, draw_list},
};
use touchslide_ui::{Dp, DpPosition, DpSize, ManualClock};
use tracing::info;

const FRAME_MILLIS: u64 = 16;

fn main() -> Result<(), SliderError> {
    touchslide_ui::init_tracing();

    let clock = Arc::new(ManualClock::new());
    let args = SliderArgs::default()
        .maximum_value(100.0)
        .step(10.0)
        .graduations(11)
        .animate_transitions(true)
        .animation_type(AnimationType::Spring)
        .thumb_text("vol")
        .on_sliding_start(|value| info!(value, "sliding started"))
        .on_value_change(|value| info!(value, "value changed"))
        .on_sliding_complete(|value| info!(value, "sliding complete"))
        .on_animation_complete(|| info!("animation complete"));
    let mut slider = Slider::new(args.clone(), clock.clone())?;

    slider.on_layout(Region::Container, DpSize::from_dp(200.0, 40.0));
    slider.on_layout(Region::Track, DpSize::from_dp(200.0, 4.0));
    slider.on_layout(Region::Thumb, DpSize::from_dp(20.0, 20.0));
    info!(ready = slider.is_ready(), "measured");

    let touch = DpPosition::new(Dp(20.0), Dp(20.0));
    if slider.should_capture(touch) {
        slider.grant();
        for dx in [15.0, 35.0, 55.0] {
            slider.drag(Dp(dx));
        }
        slider.release(Dp(55.0));
    }

    slider.update_args(args.value(80.0))?;
    let mut frames = 0;
    while slider.on_frame() {
        clock.advance_millis(FRAME_MILLIS);
        frames += 1;
    }
    info!(frames, value = slider.value(), "settled");

    for rect in draw_list(&slider.visuals()) {
        info!(part = ?rect.part, x = rect.x, width = rect.width, "draw");
    }

    slider.dispose();
    Ok(())
}
