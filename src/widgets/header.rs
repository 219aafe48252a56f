//! Header bar.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};

use crate::{
    config::{CENTER_X, HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, HEADER_FILL_STYLE, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

/// Position of the title text (centered horizontally).
const TITLE_POS: Point = Point::new(CENTER_X, 19);

/// Position of the signal/brake key hint (left edge).
const HINT_LEFT_POS: Point = Point::new(6, 17);

/// Position of the start/stop key hint (right edge).
const HINT_RIGHT_POS: Point = Point::new((SCREEN_WIDTH - 6) as i32, 17);

/// Header rectangle (full width).
const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Draw the header bar. Static content, drawn on full redraws only.
pub fn draw_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style("Car Control", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("A/D signal  S brake  1/2 cam", HINT_LEFT_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("Enter start  Bksp stop", HINT_RIGHT_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
