//! Event log footer. Failures are orange, the newest line white, older lines gray.

use car_control_common::EventLog;
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, Rectangle},
    text::Text,
};

use crate::{
    config::{FOOTER_HEIGHT, FOOTER_TOP, MARGIN, SCREEN_WIDTH},
    styles::{CLEAR_STYLE, FRAME_STYLE, LABEL_STYLE_GRAY, LABEL_STYLE_ORANGE, LABEL_STYLE_WHITE, LEFT_ALIGNED},
};

/// Line pitch of the 6x10 font.
const LINE_HEIGHT: i32 = 10;

/// Baseline of the first line.
const FIRST_LINE_Y: i32 = FOOTER_TOP + 12;

const FOOTER_RECT: Rectangle = Rectangle::new(Point::new(0, FOOTER_TOP), Size::new(SCREEN_WIDTH, FOOTER_HEIGHT));

const DIVIDER_START: Point = Point::new(0, FOOTER_TOP);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, FOOTER_TOP);

/// Draw the event log, oldest line first.
pub fn draw_event_log<D>(
    display: &mut D,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb888>,
{
    FOOTER_RECT.into_styled(CLEAR_STYLE).draw(display).ok();
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(FRAME_STYLE)
        .draw(display)
        .ok();

    let newest = log.len().saturating_sub(1);
    for (i, entry) in log.entries().enumerate() {
        let style = if entry.is_failure() {
            LABEL_STYLE_ORANGE
        } else if i == newest {
            LABEL_STYLE_WHITE
        } else {
            LABEL_STYLE_GRAY
        };
        let pos = Point::new(MARGIN as i32, FIRST_LINE_Y + i as i32 * LINE_HEIGHT);
        Text::with_text_style(entry.text(), pos, style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
