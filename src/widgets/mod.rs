//! Widget components for the dashboard window.
//!
//! - [`header`]: Title bar with key hints
//! - [`camera`]: Camera box with the fitted frame, channel label and status
//! - [`indicators`]: Turn-signal arrows, brake lamp and speed readout
//! - [`footer`]: Event log lines
//!
//! Every widget clears its own region before drawing, so the main loop can
//! redraw any single region without touching the others. All widgets are
//! generic over `DrawTarget<Color = Rgb888>`.

mod camera;
mod footer;
mod header;
mod indicators;

pub use camera::draw_camera_view;
pub use footer::draw_event_log;
pub use header::draw_header;
pub use indicators::draw_indicators;
