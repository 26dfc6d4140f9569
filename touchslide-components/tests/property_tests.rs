//! Property tests for slider geometry and measurement invariants.
//!
//! 1. Thumb offset is monotonic in the value (reversed under right-to-left).
//! 2. Drag results stay in range and on the step grid.
//! 3. Repeating a measurement changes nothing.

use proptest::prelude::*;
use touchslide_components::slider::{
    Bounds, MeasureOutcome, MeasurementCoordinator, Region, ratio_of, thumb_offset,
    value_for_drag,
};
use touchslide_ui::{Dp, DpSize};

// ── Strategies ────────

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    let step_frac = prop_oneof![Just(0.0), 0.01..1.0_f64];
    (-1_000.0..1_000.0_f64, 1.0..1_000.0_f64, step_frac).prop_map(|(min, span, step_frac)| {
        let max = min + span;
        Bounds::new(min, max, (max - min) * step_frac).expect("generated bounds are valid")
    })
}

fn arb_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::Container),
        Just(Region::Track),
        Just(Region::Thumb),
        Just(Region::Graduation),
    ]
}

// ── 1. Monotonic thumb offset ────────

proptest! {
    #[test]
    fn thumb_offset_is_monotonic(
        bounds in arb_bounds(),
        a in 0.0..1.0_f64,
        b in 0.0..1.0_f64,
        container in 40.0..800.0_f64,
        thumb in 0.0..40.0_f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = bounds.minimum() + lo * bounds.range();
        let hi = bounds.minimum() + hi * bounds.range();

        let ltr_lo = thumb_offset(lo, &bounds, Dp(container), Dp(thumb), false);
        let ltr_hi = thumb_offset(hi, &bounds, Dp(container), Dp(thumb), false);
        prop_assert!(ltr_lo <= ltr_hi);

        let rtl_lo = thumb_offset(lo, &bounds, Dp(container), Dp(thumb), true);
        let rtl_hi = thumb_offset(hi, &bounds, Dp(container), Dp(thumb), true);
        prop_assert!(rtl_lo >= rtl_hi);
    }

    #[test]
    fn ratio_spans_zero_to_one(bounds in arb_bounds()) {
        prop_assert_eq!(ratio_of(bounds.minimum(), &bounds), 0.0);
        prop_assert!((ratio_of(bounds.maximum(), &bounds) - 1.0).abs() < 1e-12);
    }
}

// ── 2. Quantize then clamp ────────

proptest! {
    #[test]
    fn drag_value_is_in_range_and_on_grid(
        bounds in arb_bounds(),
        anchor in 0.0..180.0_f64,
        dx in -1_000.0..1_000.0_f64,
        rtl in any::<bool>(),
    ) {
        let value = value_for_drag(Dp(anchor), Dp(dx), &bounds, Dp(200.0), Dp(20.0), rtl)
            .expect("travel is positive");
        prop_assert!(value >= bounds.minimum() && value <= bounds.maximum());

        let at_boundary = value == bounds.minimum() || value == bounds.maximum();
        if bounds.step() > 0.0 && !at_boundary {
            let steps = (value - bounds.minimum()) / bounds.step();
            prop_assert!((steps - steps.round()).abs() < 1e-6, "off grid: {steps}");
        }
    }
}

// ── 3. Measurement idempotence ────────

proptest! {
    #[test]
    fn repeated_report_is_unchanged(
        region in arb_region(),
        width in 0.0..500.0_f64,
        height in 0.0..500.0_f64,
    ) {
        let mut coordinator = MeasurementCoordinator::new(DpSize::from_dp(3.0, 10.0));
        let size = DpSize::new(Dp(width), Dp(height));
        prop_assert_ne!(coordinator.report(region, size), MeasureOutcome::Unchanged);
        prop_assert_eq!(coordinator.report(region, size), MeasureOutcome::Unchanged);
    }
}
