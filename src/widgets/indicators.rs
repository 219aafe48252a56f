//! Indicator strip: turn-signal arrows, brake lamp, speed readout, run state.
//!
//! Lamp states arrive as booleans; color is decided here and nowhere else.

use core::fmt::Write;

use car_control_common::IndicatorVisuals;
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BLACK, DARK_RED, GRAY, GREEN, LIGHT_GRAY, RED, WHITE},
    config::{CENTER_X, INDICATOR_HEIGHT, INDICATOR_TOP, SCREEN_WIDTH},
    styles::{CENTERED, CLEAR_STYLE, LABEL_FONT, VALUE_STYLE_WHITE},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Vertical center of the strip.
const MID_Y: i32 = INDICATOR_TOP + (INDICATOR_HEIGHT / 2) as i32;

/// Horizontal center of the left arrow.
const LEFT_ARROW_X: i32 = 48;

/// Horizontal center of the right arrow.
const RIGHT_ARROW_X: i32 = SCREEN_WIDTH as i32 - 48;

/// Half width / half height of an arrow.
const ARROW_HALF: i32 = 16;

/// Brake lamp box.
const BRAKE_RECT: Rectangle = Rectangle::new(Point::new(CENTER_X - 180, MID_Y - 14), Size::new(80, 28));

/// Baseline of the speed readout (`ProFont` 24pt is ~29px tall).
const SPEED_POS: Point = Point::new(CENTER_X, MID_Y + 9);

/// Running / stopped label.
const RUN_POS: Point = Point::new(CENTER_X + 140, MID_Y + 4);

const STRIP_RECT: Rectangle = Rectangle::new(Point::new(0, INDICATOR_TOP), Size::new(SCREEN_WIDTH, INDICATOR_HEIGHT));

// =============================================================================
// Drawing Functions
// =============================================================================

/// Color of a lamp given its state.
const fn lamp_color(
    on: bool,
    lit: Rgb888,
    unlit: Rgb888,
) -> Rgb888 {
    if on { lit } else { unlit }
}

/// Speed readout text, e.g. `"42 km/h"`.
fn speed_text(speed: u8) -> String<16> {
    let mut text: String<16> = String::new();
    write!(text, "{speed} km/h").ok();
    text
}

/// Arrow pointing left (`dir = -1`) or right (`dir = 1`) centered at `x`.
fn arrow(
    x: i32,
    dir: i32,
) -> Triangle {
    Triangle::new(
        Point::new(x + dir * ARROW_HALF, MID_Y),
        Point::new(x - dir * ARROW_HALF, MID_Y - ARROW_HALF),
        Point::new(x - dir * ARROW_HALF, MID_Y + ARROW_HALF),
    )
}

/// Draw the whole indicator strip.
pub fn draw_indicators<D>(
    display: &mut D,
    speed: u8,
    visuals: IndicatorVisuals,
    running: bool,
) where
    D: DrawTarget<Color = Rgb888>,
{
    STRIP_RECT.into_styled(CLEAR_STYLE).draw(display).ok();

    arrow(LEFT_ARROW_X, -1)
        .into_styled(PrimitiveStyle::with_fill(lamp_color(visuals.left, GREEN, GRAY)))
        .draw(display)
        .ok();
    arrow(RIGHT_ARROW_X, 1)
        .into_styled(PrimitiveStyle::with_fill(lamp_color(visuals.right, GREEN, GRAY)))
        .draw(display)
        .ok();

    RoundedRectangle::with_equal_corners(BRAKE_RECT, Size::new(6, 6))
        .into_styled(PrimitiveStyle::with_fill(lamp_color(visuals.brake, RED, DARK_RED)))
        .draw(display)
        .ok();
    let brake_text_color = lamp_color(visuals.brake, WHITE, BLACK);
    Text::with_text_style(
        "BRAKE",
        BRAKE_RECT.center() + Point::new(0, 4),
        MonoTextStyle::new(LABEL_FONT, brake_text_color),
        CENTERED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(&speed_text(speed), SPEED_POS, VALUE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let (run_label, run_color) = if running { ("RUNNING", GREEN) } else { ("STOPPED", LIGHT_GRAY) };
    Text::with_text_style(run_label, RUN_POS, MonoTextStyle::new(LABEL_FONT, run_color), CENTERED)
        .draw(display)
        .ok();
}
