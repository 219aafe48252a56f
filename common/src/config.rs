//! Timing and limit constants for the dashboard core.
//!
//! Every cadence the scheduler knows about is defined here as a `const`
//! `Duration`, so the state machine, the blink scheduler and the controller
//! all agree on the same values without passing configuration around.
//!
//! | Timer | Cadence | Armed while |
//! |-------|---------|-------------|
//! | Frame acquisition (per channel) | 30 ms | channel open and not stopped |
//! | Acceleration ramp | 100 ms | running, brake released, below cap |
//! | Hard-brake ramp | 10 ms | running and brake held |
//! | Blink / indicator refresh | 500 ms | from first start onwards |

use core::time::Duration;

use embedded_graphics::geometry::Size;

// =============================================================================
// Vehicle Limits
// =============================================================================

/// Speed cap reached by the acceleration ramp.
pub const MAX_SPEED: u8 = 50;

// =============================================================================
// Cadences
// =============================================================================

/// Interval between acceleration steps (and normal deceleration steps).
pub const RAMP_CADENCE: Duration = Duration::from_millis(100);

/// Interval between deceleration steps while the brake is held.
/// Ten times faster than [`RAMP_CADENCE`].
pub const HARD_BRAKE_CADENCE: Duration = Duration::from_millis(10);

/// Interval between blink phase flips and indicator refreshes.
pub const BLINK_CADENCE: Duration = Duration::from_millis(500);

/// Interval between frame reads on each camera channel (~33 FPS).
pub const FRAME_CADENCE: Duration = Duration::from_millis(30);

/// Smallest cadence the scheduler accepts. Shorter requests are raised to this.
pub const MIN_CADENCE: Duration = Duration::from_millis(1);

// =============================================================================
// Camera Channels
// =============================================================================

/// Default box each camera channel renders into.
pub const DEFAULT_TARGET_BOX: Size = Size::new(320, 240);
