//! Output contracts between the core and whatever presents it.
//!
//! The core never draws. It pushes three kinds of output through these traits:
//!
//! - [`DisplaySink`]: one call per successfully acquired camera frame
//! - [`IndicatorSink`]: speed and lamp states, per blink firing and per
//!   speed-changing ramp step
//! - [`LifecycleSink`]: informational events (start/stop, signals, brake,
//!   source open results); purely observational
//!
//! All calls happen on the dispatch context and must return promptly. A
//! display sink that wants to keep a frame copies the pixels.

use alloc::string::String;
use core::fmt;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;

use crate::blink::IndicatorVisuals;
use crate::controller::Channel;
use crate::error::OpenError;

/// Receives fitted camera frames.
pub trait DisplaySink {
    fn present_frame(
        &mut self,
        channel: Channel,
        pixels: &[Rgb888],
        size: Size,
    );
}

/// Receives speed and lamp states.
pub trait IndicatorSink {
    fn update_indicators(
        &mut self,
        speed: u8,
        visuals: IndicatorVisuals,
    );
}

/// Receives lifecycle events.
pub trait LifecycleSink {
    fn record(
        &mut self,
        event: &LifecycleEvent,
    );
}

/// Everything the controller needs to publish to.
pub trait DashboardSinks: DisplaySink + IndicatorSink + LifecycleSink {}

impl<T: DisplaySink + IndicatorSink + LifecycleSink> DashboardSinks for T {}

// =============================================================================
// Lifecycle Events
// =============================================================================

/// Informational events emitted by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Started,
    Stopped,
    LeftSignal { on: bool },
    RightSignal { on: bool },
    BrakePressed,
    BrakeReleased,
    SourceOpened { channel: Channel, source_id: String },
    SourceFailed { channel: Channel, error: OpenError },
}

impl LifecycleEvent {
    /// Whether the event reports a problem rather than normal operation.
    #[inline]
    pub const fn is_failure(&self) -> bool { matches!(self, Self::SourceFailed { .. }) }
}

const fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Started => f.write_str("Car started"),
            Self::Stopped => f.write_str("Car stopped"),
            Self::LeftSignal { on } => write!(f, "Left signal {}", on_off(*on)),
            Self::RightSignal { on } => write!(f, "Right signal {}", on_off(*on)),
            Self::BrakePressed => f.write_str("Brake pressed"),
            Self::BrakeReleased => f.write_str("Brake released"),
            Self::SourceOpened { channel, source_id } => write!(f, "{}: {source_id}", channel.label()),
            Self::SourceFailed { channel, error } => write!(f, "{}: {error}", channel.label()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
