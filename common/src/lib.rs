//! Core of the car control dashboard.
//!
//! This crate holds everything that does not draw or talk to a window:
//!
//! - [`vehicle`]: Vehicle state machine (speed ramps, signals, brake)
//! - [`blink`]: Blink scheduler computing indicator lamp states
//! - [`scheduler`]: Virtual-time periodic timer slots
//! - [`controller`]: Dashboard controller dispatching timers and commands
//! - [`source`]: Video input traits and per-channel frame source
//! - [`frame`]: BGR to RGB normalization and aspect-fit bilinear resize
//! - [`sink`]: Display, indicator and lifecycle output contracts
//! - [`event_log`]: Fixed-capacity lifecycle log for on-screen display
//! - [`config`]: Cadences, limits and default geometry
//! - [`error`]: Open and read error types
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` + `alloc`. It never reads a clock; time only moves
//! when the embedder calls [`DashboardController::advance`], which keeps all
//! timing behavior testable without sleeping.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod blink;
pub mod config;
pub mod controller;
pub mod error;
pub mod event_log;
pub mod frame;
pub mod scheduler;
pub mod sink;
pub mod source;
pub mod vehicle;

// Re-export commonly used items
pub use blink::{BlinkScheduler, IndicatorVisuals};
pub use controller::{Channel, Command, DashboardController, TimerId};
pub use error::{OpenError, OpenFailure, ReadError};
pub use event_log::{EventLog, LogEntry};
pub use frame::{Frame, PixelFormat, RawFrame};
pub use sink::{DashboardSinks, DisplaySink, IndicatorSink, LifecycleEvent, LifecycleSink};
pub use source::{FrameSource, VideoBackend, VideoInput};
pub use vehicle::{VehicleState, VehicleStateMachine};
