//! Camera box.
//!
//! Frames arrive already fitted to the box (aspect preserved), so one edge
//! matches the box and the other may be shorter. The frame is centered and
//! the remainder stays black, which gives letterbox or pillarbox bars.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};

use crate::{
    config::{CAMERA_HEIGHT, CAMERA_WIDTH},
    dashboard::{CameraView, ViewStatus},
    styles::{CENTERED, CLEAR_STYLE, FRAME_STYLE, LABEL_STYLE_GRAY, LABEL_STYLE_ORANGE, LABEL_STYLE_WHITE, LEFT_ALIGNED},
};

const BOX_SIZE: Size = Size::new(CAMERA_WIDTH, CAMERA_HEIGHT);

/// Longest source identifier shown in the box footer.
const MAX_ID_CHARS: usize = 50;

/// Cut `source_id` to at most `MAX_ID_CHARS` bytes on a char boundary.
fn clip_id(source_id: &str) -> &str {
    let mut cut = source_id.len().min(MAX_ID_CHARS);
    while !source_id.is_char_boundary(cut) {
        cut -= 1;
    }
    &source_id[..cut]
}

/// Offset that centers a `frame` inside a `container`.
fn centered_offset(
    frame: Size,
    container: Size,
) -> Point {
    Point::new(
        (container.width.saturating_sub(frame.width) / 2) as i32,
        (container.height.saturating_sub(frame.height) / 2) as i32,
    )
}

/// Draw one camera box at `origin`.
pub fn draw_camera_view<D>(
    display: &mut D,
    origin: Point,
    label: &str,
    view: &CameraView,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let area = Rectangle::new(origin, BOX_SIZE);
    area.into_styled(CLEAR_STYLE).draw(display).ok();

    let center = area.center();
    if view.has_frame() {
        let frame_area = Rectangle::new(origin + centered_offset(view.size(), BOX_SIZE), view.size());
        display.fill_contiguous(&frame_area, view.pixels().iter().copied()).ok();
    } else {
        let (placeholder, style) = match view.status() {
            ViewStatus::NoSignal => ("NO SIGNAL", LABEL_STYLE_ORANGE),
            ViewStatus::Idle => ("NO SOURCE", LABEL_STYLE_GRAY),
            ViewStatus::Live(_) => ("WAITING", LABEL_STYLE_GRAY),
        };
        Text::with_text_style(placeholder, center, style, CENTERED)
            .draw(display)
            .ok();
    }

    area.into_styled(FRAME_STYLE).draw(display).ok();
    Text::with_text_style(label, origin + Point::new(5, 12), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    if let ViewStatus::Live(source_id) = view.status() {
        let shown = clip_id(source_id);
        let pos = origin + Point::new(5, CAMERA_HEIGHT as i32 - 5);
        Text::with_text_style(shown, pos, LABEL_STYLE_GRAY, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
