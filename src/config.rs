//! Window layout and loop timing constants.
//!
//! Layout positions are derived from a handful of base constants at compile
//! time, the same way for every widget:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 HEADER (Car Control)                 │  26px
//! ├──────────────────────────┬───────────────────────────┤
//! │         FRONT            │          REAR             │
//! │        320x240           │         320x240           │  240px
//! ├──────────────────────────┴───────────────────────────┤
//! │   <=        BRAKE          42 km/h             =>    │  56px
//! ├──────────────────────────────────────────────────────┤
//! │ event log (6 lines)                                  │  68px
//! └──────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use car_control_common::config::DEFAULT_TARGET_BOX;

// =============================================================================
// Display Configuration
// =============================================================================

/// Outer margin and gap between the two camera boxes.
pub const MARGIN: u32 = 8;

/// Camera box width (both channels).
pub const CAMERA_WIDTH: u32 = DEFAULT_TARGET_BOX.width;

/// Camera box height (both channels).
pub const CAMERA_HEIGHT: u32 = DEFAULT_TARGET_BOX.height;

/// Window width: two camera boxes with margins on both sides and between.
pub const SCREEN_WIDTH: u32 = CAMERA_WIDTH * 2 + MARGIN * 3;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Height of the indicator strip (arrows, brake lamp, speed).
pub const INDICATOR_HEIGHT: u32 = 56;

/// Height of the event log footer.
pub const FOOTER_HEIGHT: u32 = 68;

/// Window height.
pub const SCREEN_HEIGHT: u32 = HEADER_HEIGHT + MARGIN + CAMERA_HEIGHT + INDICATOR_HEIGHT + FOOTER_HEIGHT;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Top edge of both camera boxes.
pub const CAMERA_TOP: i32 = (HEADER_HEIGHT + MARGIN) as i32;

/// Left edge of the front camera box.
pub const FRONT_LEFT: i32 = MARGIN as i32;

/// Left edge of the rear camera box.
pub const REAR_LEFT: i32 = (MARGIN * 2 + CAMERA_WIDTH) as i32;

/// Top edge of the indicator strip.
pub const INDICATOR_TOP: i32 = CAMERA_TOP + CAMERA_HEIGHT as i32;

/// Top edge of the event log footer.
pub const FOOTER_TOP: i32 = INDICATOR_TOP + INDICATOR_HEIGHT as i32;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target loop period. The loop sleeps if a pass completes early; the
/// controller is advanced by the real elapsed time, so this only bounds
/// timer latency, not timer accuracy.
pub const FRAME_TIME: Duration = Duration::from_millis(10);

/// Upper bound on a single `advance` step. A stalled window (dragging,
/// debugger) would otherwise replay seconds of ramp firings at once.
pub const MAX_ADVANCE: Duration = Duration::from_millis(250);
