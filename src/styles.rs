//! Pre-computed static text and primitive styles.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` constructors are const fn
//! in embedded-graphics 0.8, so every fixed style lives here as a `const` and
//! widgets only build a style at runtime when its color depends on state.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb888,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, GRAY, LIGHT_GRAY, ORANGE, RED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the event log.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the key hint in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for labels and log lines.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for hints and placeholders.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Small orange text for failure lines.
pub const LABEL_STYLE_ORANGE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, ORANGE);

/// Medium white text for the header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for the speed readout (`ProFont` 24pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// Red fill for the header bar.
pub const HEADER_FILL_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(RED);

/// Black fill for clearing a region before redrawing it.
pub const CLEAR_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(BLACK);

/// Gray 1px stroke for camera box frames and dividers.
pub const FRAME_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_stroke(GRAY, 1);
