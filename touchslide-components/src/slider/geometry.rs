use touchslide_ui::{Dp, DpPosition, DpRect, DpSize};

use super::bounds::Bounds;

/// Rounds half up, so `-2.5` becomes `-2` and `2.5` becomes `3`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Position of `value` inside `bounds` as a fraction. A degenerate range
/// yields `0`.
pub fn ratio_of(value: f64, bounds: &Bounds) -> f64 {
    if bounds.is_degenerate() {
        return 0.0;
    }
    (value - bounds.minimum()) / bounds.range()
}

/// Horizontal thumb offset for `value` within `[0, container_width - thumb_width]`.
///
/// Under right-to-left layout the ratio is mirrored.
pub fn thumb_offset(
    value: f64,
    bounds: &Bounds,
    container_width: Dp,
    thumb_width: Dp,
    right_to_left: bool,
) -> Dp {
    let ratio = ratio_of(value, bounds);
    let ratio = if right_to_left { 1.0 - ratio } else { ratio };
    (container_width - thumb_width) * ratio
}

/// Inclusive point-in-rectangle test.
pub fn point_in_rect(rect: &DpRect, x: Dp, y: Dp) -> bool {
    rect.contains(DpPosition::new(x, y))
}

/// Left offset of graduation `index` out of `count` along the track.
///
/// The first and last graduation are pinned to the margins, the others are
/// evenly spaced at a rounded interval. A single graduation sits at the end.
pub fn graduation_offset(
    index: usize,
    count: usize,
    track_width: Dp,
    graduation_width: Dp,
    margin: Dp,
    track_offset: Dp,
) -> Dp {
    let end = track_offset + track_width - margin - graduation_width;
    if count <= 1 || index + 1 >= count {
        return end;
    }
    if index == 0 {
        return track_offset + margin;
    }
    let drawable = track_width - margin * 2.0 - graduation_width;
    let separation = (drawable / (count - 1) as f64).round();
    track_offset + margin + separation * index as f64
}

/// Maps a travel ratio back into `bounds`: quantized to `step` from the
/// minimum when stepping, then clamped.
pub fn value_from_ratio(ratio: f64, bounds: &Bounds) -> f64 {
    let raw = if bounds.step() > 0.0 {
        bounds.minimum() + round_half_up(ratio * bounds.range() / bounds.step()) * bounds.step()
    } else {
        ratio * bounds.range() + bounds.minimum()
    };
    bounds.clamp(raw)
}

/// Value reached when the thumb is moved `dx` from `anchor`.
///
/// Returns `None` when there is no travel (`container_width <= thumb_width`).
pub fn value_for_drag(
    anchor: Dp,
    dx: Dp,
    bounds: &Bounds,
    container_width: Dp,
    thumb_width: Dp,
    right_to_left: bool,
) -> Option<f64> {
    let length = container_width - thumb_width;
    if length.0 <= 0.0 {
        return None;
    }
    let ratio = (anchor + dx).0 / length.0;
    let ratio = if right_to_left { 1.0 - ratio } else { ratio };
    Some(value_from_ratio(ratio, bounds))
}

/// Padding by which the hit region exceeds the visible thumb.
///
/// The horizontal axis compares against the thumb, the vertical axis against
/// the container since the touch area spans the container's full height.
pub fn touch_overflow(touch_size: DpSize, thumb: DpSize, container: DpSize) -> DpSize {
    DpSize::new(
        (touch_size.width - thumb.width).max(Dp::ZERO),
        (touch_size.height - container.height).max(Dp::ZERO),
    )
}

/// Hit-test rectangle of the thumb in touch-area coordinates.
///
/// The touch area is shifted by `-overflow / 2`, so the rectangle is moved
/// back by `overflow / 2` and centred on the thumb at `touch_size`.
pub fn thumb_touch_rect(
    thumb_offset: Dp,
    thumb: DpSize,
    container: DpSize,
    touch_size: DpSize,
    overflow: DpSize,
) -> DpRect {
    DpRect::new(
        overflow.width / 2.0 + thumb_offset + (thumb.width - touch_size.width) / 2.0,
        overflow.height / 2.0 + (container.height - touch_size.height) / 2.0,
        touch_size.width,
        touch_size.height,
    )
}
