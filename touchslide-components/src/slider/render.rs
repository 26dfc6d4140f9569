use smallvec::SmallVec;
use touchslide_ui::{Color, Dp};

use super::layout::SliderVisuals;

/// Which part of the slider a [`DrawRect`] paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPart {
    /// Debug fill of the whole touch area.
    TouchArea,
    /// Background track.
    MaximumTrack,
    /// Filled track.
    MinimumTrack,
    /// Graduation tick with its index.
    Graduation(usize),
    /// Thumb.
    Thumb,
    /// Debug fill of the thumb hit rectangle.
    ThumbTouchRect,
}

/// A filled rectangle in physical pixels, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    /// Painted part.
    pub part: SliderPart,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
    /// Fill, already multiplied by the part's opacity.
    pub color: Color,
}

impl DrawRect {
    fn new(part: SliderPart, x: Dp, y: Dp, width: Dp, height: Dp, color: Color) -> Self {
        Self {
            part,
            x: x.to_pixels_f32(),
            y: y.to_pixels_f32(),
            width: width.to_pixels_f32(),
            height: height.to_pixels_f32(),
            color,
        }
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.a * opacity)
}

/// Flattens `visuals` into back-to-front rectangles.
///
/// Tracks and graduations are centred vertically in the container. Parts
/// whose position depends on the value carry the visuals' value opacity.
pub fn draw_list(visuals: &SliderVisuals) -> SmallVec<[DrawRect; 16]> {
    let mut out = SmallVec::new();
    let container = visuals.container;
    let opacity = visuals.value_opacity;

    if let Some(debug) = visuals.debug {
        let area = visuals.touch_area.area(container);
        out.push(DrawRect::new(
            SliderPart::TouchArea,
            area.x,
            area.y,
            area.width,
            area.height,
            debug.area_color,
        ));
    }

    let track_y = (container.height - visuals.track_height) / 2.0;
    out.push(DrawRect::new(
        SliderPart::MaximumTrack,
        visuals.maximum_track.x,
        track_y,
        visuals.maximum_track.width,
        visuals.track_height,
        visuals.colors.maximum_track,
    ));
    out.push(DrawRect::new(
        SliderPart::MinimumTrack,
        visuals.minimum_track.x,
        track_y,
        visuals.minimum_track.width,
        visuals.track_height,
        faded(visuals.colors.minimum_track, opacity),
    ));

    let graduation_y = track_y + visuals.track_height + visuals.graduation_margin_top;
    for (index, x) in visuals.graduations.iter().enumerate() {
        out.push(DrawRect::new(
            SliderPart::Graduation(index),
            *x,
            graduation_y,
            visuals.graduation_size.width,
            visuals.graduation_size.height,
            faded(visuals.colors.maximum_track, opacity),
        ));
    }

    out.push(DrawRect::new(
        SliderPart::Thumb,
        visuals.thumb_offset,
        (container.height - visuals.thumb_size.height) / 2.0,
        visuals.thumb_size.width,
        visuals.thumb_size.height,
        faded(visuals.colors.thumb, opacity),
    ));

    if let Some(debug) = visuals.debug {
        let rect = debug.thumb_rect;
        out.push(DrawRect::new(
            SliderPart::ThumbTouchRect,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            debug.thumb_rect_color,
        ));
    }

    out
}
