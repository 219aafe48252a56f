//! Color constants for the dashboard window.
//!
//! Camera frames arrive as [`Rgb888`], so the whole window is drawn in
//! `Rgb888` as well and frames can be blitted without conversion.
//! Standard colors come from the `RgbColor` trait constants.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Window background and unlit camera boxes.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Text on dark backgrounds.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Header bar and lit brake lamp.
pub const RED: Rgb888 = Rgb888::RED;

/// Lit turn-signal arrows.
pub const GREEN: Rgb888 = Rgb888::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange for failure lines in the event log.
pub const ORANGE: Rgb888 = Rgb888::new(255, 140, 0);

/// Dim gray for unlit lamps, frames around camera boxes and dividers.
pub const GRAY: Rgb888 = Rgb888::new(64, 64, 64);

/// Slightly lighter gray for secondary text (key hints, "NO SIGNAL").
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(150, 150, 150);

/// Dark red for the unlit brake lamp, so it reads as a lamp even when off.
pub const DARK_RED: Rgb888 = Rgb888::new(70, 0, 0);
