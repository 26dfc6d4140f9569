use smallvec::SmallVec;
use touchslide_ui::{Color, Dp, DpPosition, DpRect, DpSize};

use super::{
    GRADUATION_MARGIN, SliderArgs,
    bounds::Bounds,
    geometry::{
        graduation_offset, ratio_of, round_half_up, thumb_offset, thumb_touch_rect,
        touch_overflow,
    },
    measure::MeasuredLayout,
};

/// A horizontal span of track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackSegment {
    /// Left edge relative to the container.
    pub x: Dp,
    /// Width of the segment.
    pub width: Dp,
}

/// Negative margins that grow the touch area beyond the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchAreaMargins {
    /// Left margin.
    pub left: Dp,
    /// Right margin.
    pub right: Dp,
    /// Top margin.
    pub top: Dp,
    /// Bottom margin.
    pub bottom: Dp,
}

impl TouchAreaMargins {
    fn from_overflow(overflow: DpSize) -> Self {
        let horizontal = -(overflow.width / 2.0);
        let vertical = -(overflow.height / 2.0);
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// The touch area's rectangle in container coordinates.
    pub fn area(&self, container: DpSize) -> DpRect {
        DpRect::new(
            self.left,
            self.top,
            container.width - self.left - self.right,
            container.height - self.top - self.bottom,
        )
    }
}

/// Resolved colors of the slider parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderColors {
    /// Filled (minimum) part of the track.
    pub minimum_track: Color,
    /// Unfilled (maximum) part of the track and graduations.
    pub maximum_track: Color,
    /// Thumb.
    pub thumb: Color,
}

/// Diagnostic overlay showing where touches are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugTouchArea {
    /// Fill for the whole touch area.
    pub area_color: Color,
    /// The thumb hit rectangle, in container coordinates.
    pub thumb_rect: DpRect,
    /// Fill for the thumb hit rectangle.
    pub thumb_rect_color: Color,
}

/// Everything a host needs to draw the slider for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderVisuals {
    /// Whether all required measurements have arrived.
    pub ready: bool,
    /// Opacity of the value-dependent parts (thumb, filled track,
    /// graduations). `0` until ready.
    pub value_opacity: f32,
    /// Measured container.
    pub container: DpSize,
    /// Thumb left offset.
    pub thumb_offset: Dp,
    /// Measured thumb.
    pub thumb_size: DpSize,
    /// Track height.
    pub track_height: Dp,
    /// Filled part of the track.
    pub minimum_track: TrackSegment,
    /// Whole background track, inset by the track offset.
    pub maximum_track: TrackSegment,
    /// Left offsets of each graduation.
    pub graduations: SmallVec<[Dp; 8]>,
    /// Size of a graduation.
    pub graduation_size: DpSize,
    /// Vertical shift lifting graduations above the track centre.
    pub graduation_margin_top: Dp,
    /// Hit padding beyond the visible thumb; `None` until ready.
    pub touch_overflow: Option<DpSize>,
    /// Margins of the touch area; zero until ready.
    pub touch_area: TouchAreaMargins,
    /// Part colors.
    pub colors: SliderColors,
    /// Label drawn on the thumb.
    pub thumb_text: Option<String>,
    /// Present when `debug_touch_area` is enabled.
    pub debug: Option<DebugTouchArea>,
}

/// Derives the visual layout for `value` from the current measurements.
pub(crate) fn compose(
    args: &SliderArgs,
    bounds: &Bounds,
    layout: &MeasuredLayout,
    ready: bool,
    value: f64,
) -> SliderVisuals {
    let container = layout.container;
    let thumb = layout.thumb;
    let half_thumb = thumb.width / 2.0;

    let thumb_offset = thumb_offset(
        value,
        bounds,
        container.width,
        thumb.width,
        args.right_to_left,
    );

    let graduations: SmallVec<[Dp; 8]> = (0..args.graduations)
        .map(|i| {
            graduation_offset(
                i,
                args.graduations,
                layout.track.width,
                layout.graduation.width,
                GRADUATION_MARGIN,
                args.track_offset,
            )
        })
        .collect();

    let minimum_width = minimum_track_width(args, bounds, layout, value, half_thumb);
    let minimum_track = if args.right_to_left {
        TrackSegment {
            x: container.width - args.track_offset - minimum_width,
            width: minimum_width,
        }
    } else {
        TrackSegment {
            x: args.track_offset,
            width: minimum_width,
        }
    };

    let overflow = ready.then(|| touch_overflow(args.thumb_touch_size, thumb, container));
    let touch_area = overflow
        .map(TouchAreaMargins::from_overflow)
        .unwrap_or_default();

    let debug = args.debug_touch_area.then(|| {
        let overflow = overflow.unwrap_or(DpSize::ZERO);
        let rect = thumb_touch_rect(
            thumb_offset,
            thumb,
            container,
            args.thumb_touch_size,
            overflow,
        );
        let origin = DpPosition::new(rect.x, rect.y).offset(touch_area.left, touch_area.top);
        DebugTouchArea {
            area_color: Color::ORANGE.with_alpha(0.5),
            thumb_rect: DpRect::from_origin_size(origin, rect.size()),
            thumb_rect_color: Color::GREEN.with_alpha(0.5),
        }
    });

    SliderVisuals {
        ready,
        value_opacity: if ready { 1.0 } else { 0.0 },
        container,
        thumb_offset,
        thumb_size: thumb,
        track_height: layout.track.height,
        minimum_track,
        maximum_track: TrackSegment {
            x: args.track_offset,
            width: layout.track.width,
        },
        graduations,
        graduation_size: layout.graduation,
        graduation_margin_top: -((layout.track.height + layout.graduation.height) / 2.0),
        touch_overflow: overflow,
        touch_area,
        colors: SliderColors {
            minimum_track: args.minimum_track_tint_color,
            maximum_track: args.maximum_track_tint_color,
            thumb: args.thumb_tint_color,
        },
        thumb_text: args.thumb_text.clone(),
        debug,
    }
}

fn minimum_track_width(
    args: &SliderArgs,
    bounds: &Bounds,
    layout: &MeasuredLayout,
    value: f64,
    half_thumb: Dp,
) -> Dp {
    let container = layout.container;
    let thumb_hidden = layout.thumb.width == Dp::ZERO && args.thumb_tint_color.a == 0.0;
    if thumb_hidden && args.graduations >= 1 {
        // Without a visible thumb the fill ends at the nearest graduation.
        let last = (args.graduations - 1) as f64;
        let index = round_half_up(ratio_of(value, bounds).clamp(0.0, 1.0) * last) as usize;
        let offset = graduation_offset(
            index,
            args.graduations,
            layout.track.width,
            layout.graduation.width,
            GRADUATION_MARGIN,
            args.track_offset,
        );
        return offset - args.track_offset + layout.graduation.width + GRADUATION_MARGIN;
    }

    let at_minimum = value == bounds.minimum();
    let base = if bounds.is_degenerate() && at_minimum {
        container.width - half_thumb
    } else {
        (container.width - layout.thumb.width) * ratio_of(value, bounds)
    };
    if at_minimum {
        base
    } else {
        base + half_thumb - args.track_offset
    }
}
