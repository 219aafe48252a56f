//! Window-side state fed by the controller through the sink traits.
//!
//! [`DashboardPanel`] is the display, indicator and lifecycle sink in one. It
//! copies what it receives and marks the affected region dirty; the main loop
//! redraws only dirty regions after each `advance`, so sink calls stay cheap
//! and never touch the window directly.
//!
//! # Dirty Tracking
//!
//! | Region | Marked dirty by |
//! |--------|-----------------|
//! | Camera box (per channel) | new frame, source opened or failed |
//! | Indicator strip | indicator update |
//! | Event log footer | lifecycle event |

use car_control_common::{
    Channel,
    DisplaySink,
    EventLog,
    IndicatorSink,
    IndicatorVisuals,
    LifecycleEvent,
    LifecycleSink,
};
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;

// =============================================================================
// Camera View
// =============================================================================

/// What a camera box shows besides the picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing configured yet.
    Idle,
    /// Source open; shows its identifier.
    Live(String),
    /// Last open failed; the box is blanked.
    NoSignal,
}

/// Copy of the last frame presented on one channel.
#[derive(Debug)]
pub struct CameraView {
    pixels: Vec<Rgb888>,
    size: Size,
    status: ViewStatus,
}

impl CameraView {
    const fn new() -> Self {
        Self {
            pixels: Vec::new(),
            size: Size::zero(),
            status: ViewStatus::Idle,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub const fn status(&self) -> &ViewStatus { &self.status }

    /// Whether there is a picture to draw.
    #[inline]
    pub fn has_frame(&self) -> bool { !self.pixels.is_empty() }

    fn clear(&mut self) {
        self.pixels.clear();
        self.size = Size::zero();
    }
}

// =============================================================================
// Panel
// =============================================================================

/// Regions needing a redraw, taken once per loop pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dirty {
    pub cameras: [bool; 2],
    pub indicators: bool,
    pub log: bool,
}

impl Dirty {
    const ALL: Self = Self {
        cameras: [true, true],
        indicators: true,
        log: true,
    };

    pub const fn any(&self) -> bool { self.cameras[0] || self.cameras[1] || self.indicators || self.log }
}

/// Everything the window renders, kept current by the controller.
#[derive(Debug)]
pub struct DashboardPanel {
    views: [CameraView; 2],
    speed: u8,
    visuals: IndicatorVisuals,
    log: EventLog,
    dirty: Dirty,
}

const fn slot(channel: Channel) -> usize {
    match channel {
        Channel::Front => 0,
        Channel::Rear => 1,
    }
}

impl DashboardPanel {
    /// Empty panel, fully dirty so the first pass draws everything.
    pub const fn new() -> Self {
        Self {
            views: [CameraView::new(), CameraView::new()],
            speed: 0,
            visuals: IndicatorVisuals::OFF,
            log: EventLog::new(),
            dirty: Dirty::ALL,
        }
    }

    #[inline]
    pub const fn view(
        &self,
        channel: Channel,
    ) -> &CameraView {
        &self.views[slot(channel)]
    }

    #[inline]
    pub const fn speed(&self) -> u8 { self.speed }

    #[inline]
    pub const fn visuals(&self) -> IndicatorVisuals { self.visuals }

    #[inline]
    pub const fn event_log(&self) -> &EventLog { &self.log }

    /// Take and reset the dirty flags.
    pub fn take_dirty(&mut self) -> Dirty { core::mem::take(&mut self.dirty) }
}

impl Default for DashboardPanel {
    fn default() -> Self { Self::new() }
}

impl DisplaySink for DashboardPanel {
    fn present_frame(
        &mut self,
        channel: Channel,
        pixels: &[Rgb888],
        size: Size,
    ) {
        let view = &mut self.views[slot(channel)];
        view.pixels.clear();
        view.pixels.extend_from_slice(pixels);
        view.size = size;
        self.dirty.cameras[slot(channel)] = true;
    }
}

impl IndicatorSink for DashboardPanel {
    fn update_indicators(
        &mut self,
        speed: u8,
        visuals: IndicatorVisuals,
    ) {
        self.speed = speed;
        self.visuals = visuals;
        self.dirty.indicators = true;
    }
}

impl LifecycleSink for DashboardPanel {
    fn record(
        &mut self,
        event: &LifecycleEvent,
    ) {
        if event.is_failure() {
            log::warn!("{event}");
        } else {
            log::info!("{event}");
        }

        match event {
            LifecycleEvent::SourceOpened { channel, source_id } => {
                let view = &mut self.views[slot(*channel)];
                view.clear();
                view.status = ViewStatus::Live(source_id.clone());
                self.dirty.cameras[slot(*channel)] = true;
            }
            LifecycleEvent::SourceFailed { channel, .. } => {
                let view = &mut self.views[slot(*channel)];
                view.clear();
                view.status = ViewStatus::NoSignal;
                self.dirty.cameras[slot(*channel)] = true;
            }
            // Run state label lives in the indicator strip
            LifecycleEvent::Started | LifecycleEvent::Stopped => self.dirty.indicators = true,
            _ => {}
        }

        self.log.record(event);
        self.dirty.log = true;
    }
}

// =============================================================================
// Tests
// =============================================================================
