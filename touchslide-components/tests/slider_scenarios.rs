//! End-to-end slider behaviour through the public `Slider` facade.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;
use touchslide_components::{
    animation::{AnimationConfig, AnimationType},
    slider::{MeasureOutcome, Region, Slider, SliderArgs},
};
use touchslide_ui::{Dp, DpPosition, DpSize, ManualClock};

fn layout(slider: &mut Slider) {
    slider.on_layout(Region::Container, DpSize::from_dp(200.0, 40.0));
    slider.on_layout(Region::Track, DpSize::from_dp(200.0, 4.0));
    slider.on_layout(Region::Thumb, DpSize::from_dp(20.0, 20.0));
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    (count, move || {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn readiness_flips_on_last_required_measurement() {
    let mut slider = Slider::new(SliderArgs::default(), Arc::new(ManualClock::new()))
        .expect("valid args");
    assert_eq!(slider.visuals().value_opacity, 0.0);

    assert_eq!(
        slider.on_layout(Region::Container, DpSize::from_dp(200.0, 40.0)),
        MeasureOutcome::Pending
    );
    assert_eq!(
        slider.on_layout(Region::Thumb, DpSize::from_dp(20.0, 20.0)),
        MeasureOutcome::Pending
    );
    assert!(!slider.is_ready());
    assert_eq!(slider.visuals().value_opacity, 0.0);
    assert_eq!(slider.visuals().touch_overflow, None);

    assert_eq!(
        slider.on_layout(Region::Track, DpSize::from_dp(200.0, 4.0)),
        MeasureOutcome::Published
    );
    assert!(slider.is_ready());
    let visuals = slider.visuals();
    assert_eq!(visuals.value_opacity, 1.0);
    assert_eq!(visuals.touch_overflow, Some(DpSize::from_dp(20.0, 0.0)));
}

#[test]
fn repeated_measurement_is_a_single_change() {
    let mut slider = Slider::new(SliderArgs::default(), Arc::new(ManualClock::new()))
        .expect("valid args");
    let size = DpSize::from_dp(200.0, 40.0);
    assert_ne!(slider.on_layout(Region::Container, size), MeasureOutcome::Unchanged);
    assert_eq!(slider.on_layout(Region::Container, size), MeasureOutcome::Unchanged);
}

#[test]
fn stepped_drag_reports_quantized_value() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let args = SliderArgs::default()
        .maximum_value(100.0)
        .step(10.0)
        .on_value_change(move |value| sink.lock().push(value));
    let mut slider = Slider::new(args, Arc::new(ManualClock::new())).expect("valid args");
    layout(&mut slider);

    assert!(slider.should_capture(DpPosition::new(Dp(20.0), Dp(20.0))));
    slider.grant();
    slider.drag(Dp(55.0));
    assert_eq!(*changes.lock(), vec![30.0]);
    assert_eq!(slider.value(), 30.0);
    assert_eq!(slider.visuals().thumb_offset, Dp(54.0));
}

#[test]
fn touch_admission_uses_the_expanded_thumb() {
    let args = SliderArgs::default().maximum_value(180.0).value(50.0);
    let mut slider = Slider::new(args, Arc::new(ManualClock::new())).expect("valid args");
    layout(&mut slider);

    assert!(slider.should_capture(DpPosition::new(Dp(60.0), Dp(20.0))));
    assert!(!slider.should_capture(DpPosition::new(Dp(150.0), Dp(20.0))));
    assert!(!slider.move_should_capture());
    assert!(!slider.allow_takeover());
}

#[test]
fn capture_is_refused_before_measurement() {
    let mut slider = Slider::new(SliderArgs::default(), Arc::new(ManualClock::new()))
        .expect("valid args");
    assert!(!slider.should_capture(DpPosition::new(Dp(20.0), Dp(20.0))));
}

#[test]
fn disabled_slider_ignores_moves() {
    let (count, on_change) = counter();
    let args = SliderArgs::default()
        .value(0.2)
        .disabled(true)
        .on_value_change(move |_| on_change());
    let mut slider = Slider::new(args, Arc::new(ManualClock::new())).expect("valid args");
    layout(&mut slider);

    assert!(!slider.should_capture(DpPosition::new(Dp(46.0), Dp(20.0))));
    slider.drag(Dp(60.0));
    slider.release(Dp(60.0));
    assert_eq!(slider.value(), 0.2);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn disabling_mid_gesture_stops_updates() {
    let (count, on_change) = counter();
    let args = SliderArgs::default().on_value_change(move |_| on_change());
    let mut slider = Slider::new(args.clone(), Arc::new(ManualClock::new())).expect("valid args");
    layout(&mut slider);

    slider.grant();
    slider.drag(Dp(18.0));
    slider
        .update_args(args.disabled(true))
        .expect("valid args");
    slider.drag(Dp(90.0));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(slider.value(), 0.1);
}

#[test]
fn animated_reconcile_completes_once() {
    let clock = Arc::new(ManualClock::new());
    let (count, on_done) = counter();
    let args = SliderArgs::default()
        .animate_transitions(true)
        .on_animation_complete(on_done);
    let mut slider = Slider::new(args.clone(), clock.clone()).expect("valid args");
    layout(&mut slider);

    slider.update_args(args.value(1.0)).expect("valid args");
    clock.advance_millis(75);
    assert!(slider.on_frame());
    let midway = slider.value();
    assert!(midway > 0.0 && midway < 1.0);

    clock.advance_millis(75);
    assert!(!slider.on_frame());
    assert_eq!(slider.value(), 1.0);
    clock.advance_millis(16);
    slider.on_frame();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn spring_reconcile_settles_on_target() {
    let clock = Arc::new(ManualClock::new());
    let (count, on_done) = counter();
    let args = SliderArgs::default()
        .animate_transitions(true)
        .animation_type(AnimationType::Spring)
        .on_animation_complete(on_done);
    let mut slider = Slider::new(args, clock.clone()).expect("valid args");

    slider.reconcile_value(0.0, 1.0);
    let mut frames = 0;
    while slider.on_frame() {
        clock.advance_millis(16);
        frames += 1;
        assert!(frames < 1_000, "spring never settled");
    }
    assert_eq!(slider.value(), 1.0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn immediate_reconcile_clamps_without_callback() {
    let (count, on_done) = counter();
    let args = SliderArgs::default().on_animation_complete(on_done);
    let mut slider = Slider::new(args, Arc::new(ManualClock::new())).expect("valid args");

    slider.reconcile_value(0.0, 7.0);
    assert_eq!(slider.value(), 1.0);
    assert!(!slider.on_frame());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn dispose_drops_pending_completion() {
    let clock = Arc::new(ManualClock::new());
    let (count, on_done) = counter();
    let args = SliderArgs::default()
        .animate_transitions(true)
        .animation_config(AnimationConfig {
            duration_millis: Some(300),
            ..AnimationConfig::default()
        })
        .on_animation_complete(on_done);
    let mut slider = Slider::new(args, clock.clone()).expect("valid args");

    slider.reconcile_value(0.0, 1.0);
    clock.advance_millis(100);
    slider.dispose();
    clock.advance_millis(1_000);
    assert!(!slider.on_frame());
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(slider.value() < 1.0);
}

#[test]
fn range_change_mid_spring_settles_inside_new_range() {
    let clock = Arc::new(ManualClock::new());
    let (count, on_done) = counter();
    let args = SliderArgs::default()
        .maximum_value(100.0)
        .animate_transitions(true)
        .animation_type(AnimationType::Spring)
        .on_animation_complete(on_done);
    let mut slider = Slider::new(args.clone(), clock.clone()).expect("valid args");
    layout(&mut slider);

    slider
        .update_args(args.clone().value(100.0))
        .expect("valid args");
    clock.advance_millis(48);
    slider.on_frame();

    slider
        .update_args(args.minimum_value(10.0).maximum_value(60.0).value(100.0))
        .expect("valid args");
    let mut frames = 0;
    while slider.on_frame() {
        clock.advance_millis(16);
        frames += 1;
        assert!(frames < 1_000, "spring never settled");
    }
    assert_eq!(slider.value(), 60.0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn range_change_mid_gesture_keeps_drags_in_range() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let args = SliderArgs::default()
        .maximum_value(10.0)
        .on_value_change(move |value| sink.lock().push(value));
    let mut slider = Slider::new(args.clone(), Arc::new(ManualClock::new())).expect("valid args");
    layout(&mut slider);

    slider.grant();
    slider.drag(Dp(90.0));
    assert_eq!(slider.value(), 5.0);

    slider
        .update_args(args.maximum_value(4.0))
        .expect("valid args");
    assert_eq!(slider.value(), 4.0);
    assert!(slider.is_sliding());

    slider.drag(Dp(180.0));
    slider.drag(Dp(45.0));
    slider.release(Dp(45.0));
    assert_eq!(*changes.lock(), vec![5.0, 4.0, 1.0]);
    assert!(!slider.is_sliding());
}
