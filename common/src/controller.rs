//! Dashboard controller: one dispatch context for every timer and command.
//!
//! The controller owns the vehicle state machine, the blink scheduler and the
//! two camera channels, and drives all of them from a single [`Scheduler`].
//! Time is pushed in from outside with [`DashboardController::advance`]; every
//! firing that falls inside the advanced window is delivered in deadline
//! order before the call returns. Commands are applied synchronously between
//! `advance` calls, so nothing ever runs concurrently and no locking exists.
//!
//! # Timers
//!
//! | Id | Cadence | Handler |
//! |----|---------|---------|
//! | [`TimerId::Ramp`] | 100 ms / 10 ms | one ramp step; indicator update if speed changed |
//! | [`TimerId::Blink`] | 500 ms | blink firing; indicator update |
//! | [`TimerId::Acquire`] | 30 ms per channel | pull one frame; display update if read |
//!
//! Acceleration and hard braking share the `Ramp` slot, so swapping them on a
//! brake press is a single re-arm: the old cadence can never fire again.
//!
//! # Lifecycle
//!
//! ```text
//! configure() --open--> Acquire armed (preview before start)
//! start()     --------> Ramp(accelerate) + Blink + Acquire armed
//! stop()      --------> Ramp + Acquire disarmed, Blink keeps running
//! shutdown()  --------> everything disarmed, inputs released
//! ```

use core::time::Duration;

use embedded_graphics::geometry::Size;

use crate::blink::{BlinkScheduler, IndicatorVisuals};
use crate::config::FRAME_CADENCE;
use crate::error::OpenError;
use crate::scheduler::Scheduler;
use crate::sink::{DashboardSinks, LifecycleEvent};
use crate::source::{FrameSource, VideoBackend};
use crate::vehicle::{RampAction, VehicleState, VehicleStateMachine};

// =============================================================================
// Identifiers
// =============================================================================

/// Camera channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Front,
    Rear,
}

impl Channel {
    /// Both channels in display order.
    pub const ALL: [Self; 2] = [Self::Front, Self::Rear];

    /// Short upper-case label for logs and overlays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "FRONT",
            Self::Rear => "REAR",
        }
    }
}

/// Timer slots known to the controller's scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerId {
    /// Whichever speed ramp is armed.
    Ramp,
    /// Blink phase and indicator refresh.
    Blink,
    /// Frame acquisition on one channel.
    Acquire(Channel),
}

/// Commands accepted from the input surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    ToggleLeft,
    ToggleRight,
    BrakeDown,
    BrakeUp,
}

// =============================================================================
// Controller
// =============================================================================

/// Composes the vehicle, blink scheduler and two frame sources under one scheduler.
pub struct DashboardController<B: VideoBackend, S: DashboardSinks> {
    scheduler: Scheduler<TimerId>,
    vehicle: VehicleStateMachine,
    blink: BlinkScheduler,
    front: FrameSource<B>,
    rear: FrameSource<B>,
    sinks: S,
}

impl<B: VideoBackend, S: DashboardSinks> DashboardController<B, S> {
    /// Create a stopped dashboard. Channels start closed and no timer is armed.
    pub fn new(
        front: FrameSource<B>,
        rear: FrameSource<B>,
        sinks: S,
    ) -> Self {
        Self {
            scheduler: Scheduler::new(),
            vehicle: VehicleStateMachine::new(),
            blink: BlinkScheduler::new(),
            front,
            rear,
            sinks,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Read-only vehicle state for rendering.
    #[inline]
    pub const fn vehicle(&self) -> &VehicleState { self.vehicle.state() }

    /// Lamp states from the latest blink firing.
    #[inline]
    pub const fn visuals(&self) -> IndicatorVisuals { self.blink.visuals() }

    #[inline]
    pub fn is_armed(
        &self,
        timer: TimerId,
    ) -> bool {
        self.scheduler.is_armed(timer)
    }

    #[inline]
    pub const fn scheduler(&self) -> &Scheduler<TimerId> { &self.scheduler }

    /// Frame source of `channel`.
    pub const fn source(
        &self,
        channel: Channel,
    ) -> &FrameSource<B> {
        match channel {
            Channel::Front => &self.front,
            Channel::Rear => &self.rear,
        }
    }

    #[inline]
    pub const fn sinks(&self) -> &S { &self.sinks }

    #[inline]
    pub fn sinks_mut(&mut self) -> &mut S { &mut self.sinks }

    fn source_mut(
        &mut self,
        channel: Channel,
    ) -> &mut FrameSource<B> {
        match channel {
            Channel::Front => &mut self.front,
            Channel::Rear => &mut self.rear,
        }
    }

    // -------------------------------------------------------------------------
    // Video Sources
    // -------------------------------------------------------------------------

    /// Open `source_id` on `channel` rendering into `target`.
    ///
    /// On success the 30 ms acquisition cadence starts immediately, so camera
    /// previews run before the vehicle is started. Failures are reported to
    /// the lifecycle sink and returned; the channel stays closed.
    pub fn configure(
        &mut self,
        channel: Channel,
        source_id: &str,
        target: Size,
    ) -> Result<(), OpenError> {
        self.scheduler.disarm(TimerId::Acquire(channel));
        let result = self.source_mut(channel).open(source_id, target);
        self.finish_open(channel, source_id, result)
    }

    /// Switch `channel` to `source_id`, keeping its target box.
    ///
    /// Acquisition is disarmed and the old input released before the new one
    /// is opened; the channel never holds two inputs.
    pub fn reconfigure(
        &mut self,
        channel: Channel,
        source_id: &str,
    ) -> Result<(), OpenError> {
        self.scheduler.disarm(TimerId::Acquire(channel));
        let result = self.source_mut(channel).reconfigure(source_id);
        self.finish_open(channel, source_id, result)
    }

    fn finish_open(
        &mut self,
        channel: Channel,
        source_id: &str,
        result: Result<(), OpenError>,
    ) -> Result<(), OpenError> {
        match result {
            Ok(()) => {
                self.scheduler.arm(TimerId::Acquire(channel), FRAME_CADENCE);
                self.sinks.record(&LifecycleEvent::SourceOpened {
                    channel,
                    source_id: source_id.into(),
                });
                Ok(())
            }
            Err(error) => {
                self.sinks.record(&LifecycleEvent::SourceFailed {
                    channel,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Apply one command from the input surface.
    pub fn execute(
        &mut self,
        command: Command,
    ) {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::ToggleLeft => self.toggle_left(),
            Command::ToggleRight => self.toggle_right(),
            Command::BrakeDown => self.brake_down(),
            Command::BrakeUp => self.brake_up(),
        }
    }

    /// Start the vehicle: acceleration ramp, blink refresh and acquisition on open channels.
    pub fn start(&mut self) {
        let action = self.vehicle.start();
        self.apply_ramp(action);
        self.scheduler.ensure_armed(TimerId::Blink, self.blink.cadence());
        for channel in Channel::ALL {
            if self.source(channel).is_open() {
                self.scheduler.ensure_armed(TimerId::Acquire(channel), FRAME_CADENCE);
            }
        }
        self.sinks.record(&LifecycleEvent::Started);
    }

    /// Stop the vehicle: speed to zero, ramps and acquisition disarmed.
    /// The blink timer keeps running and keeps the lamps dark.
    pub fn stop(&mut self) {
        let action = self.vehicle.stop();
        self.apply_ramp(action);
        self.blink.reset();
        self.scheduler.disarm_where(|timer| matches!(timer, TimerId::Acquire(_)));
        self.sinks.record(&LifecycleEvent::Stopped);
    }

    pub fn toggle_left(&mut self) {
        if self.vehicle.toggle_left() {
            let on = self.vehicle.state().left_signal;
            self.sinks.record(&LifecycleEvent::LeftSignal { on });
        }
    }

    pub fn toggle_right(&mut self) {
        if self.vehicle.toggle_right() {
            let on = self.vehicle.state().right_signal;
            self.sinks.record(&LifecycleEvent::RightSignal { on });
        }
    }

    pub fn brake_down(&mut self) {
        let action = self.vehicle.press_brake();
        if action != RampAction::Keep {
            self.apply_ramp(action);
            self.sinks.record(&LifecycleEvent::BrakePressed);
        }
    }

    pub fn brake_up(&mut self) {
        let action = self.vehicle.release_brake();
        if action != RampAction::Keep {
            self.apply_ramp(action);
            self.sinks.record(&LifecycleEvent::BrakeReleased);
        }
    }

    /// Close both channels and disarm every timer.
    pub fn shutdown(&mut self) {
        let action = self.vehicle.stop();
        self.apply_ramp(action);
        self.scheduler.disarm_where(|_| true);
        self.front.close();
        self.rear.close();
        log::debug!("dashboard shut down");
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Advance time by `elapsed`, delivering every due firing in order.
    pub fn advance(
        &mut self,
        elapsed: Duration,
    ) {
        let until = self.scheduler.now() + elapsed;
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.dispatch(timer);
        }
        self.scheduler.settle(until);
    }

    fn dispatch(
        &mut self,
        timer: TimerId,
    ) {
        match timer {
            TimerId::Ramp => {
                let before = self.vehicle.speed();
                let action = self.vehicle.ramp_tick();
                self.apply_ramp(action);
                if self.vehicle.speed() != before {
                    let visuals = self.blink.refresh(&self.vehicle);
                    self.sinks.update_indicators(self.vehicle.speed(), visuals);
                }
            }
            TimerId::Blink => {
                let tick = self.blink.fire(&mut self.vehicle);
                self.apply_ramp(tick.ramp);
                self.sinks.update_indicators(self.vehicle.speed(), tick.visuals);
            }
            TimerId::Acquire(channel) => {
                let (source, sinks) = match channel {
                    Channel::Front => (&mut self.front, &mut self.sinks),
                    Channel::Rear => (&mut self.rear, &mut self.sinks),
                };
                if let Some(frame) = source.next_frame() {
                    sinks.present_frame(channel, frame.pixels(), frame.size());
                }
            }
        }
    }

    fn apply_ramp(
        &mut self,
        action: RampAction,
    ) {
        match action {
            RampAction::Keep => {}
            RampAction::Arm(ramp, cadence) => {
                log::trace!("ramp {ramp:?} armed at {}ms", cadence.as_millis());
                self.scheduler.arm(TimerId::Ramp, cadence);
            }
            RampAction::Disarm => {
                self.scheduler.disarm(TimerId::Ramp);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::vec::Vec;

    use embedded_graphics::pixelcolor::Rgb888;

    use super::*;
    use crate::config::{HARD_BRAKE_CADENCE, MAX_SPEED, RAMP_CADENCE};
    use crate::sink::{DisplaySink, IndicatorSink, LifecycleSink};
    use crate::source::tests::ScriptedBackend;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Channel, Size, usize)>,
        indicators: Vec<(u8, IndicatorVisuals)>,
        events: Vec<LifecycleEvent>,
    }

    impl DisplaySink for Recorder {
        fn present_frame(
            &mut self,
            channel: Channel,
            pixels: &[Rgb888],
            size: Size,
        ) {
            self.frames.push((channel, size, pixels.len()));
        }
    }

    impl IndicatorSink for Recorder {
        fn update_indicators(
            &mut self,
            speed: u8,
            visuals: IndicatorVisuals,
        ) {
            self.indicators.push((speed, visuals));
        }
    }

    impl LifecycleSink for Recorder {
        fn record(
            &mut self,
            event: &LifecycleEvent,
        ) {
            self.events.push(event.clone());
        }
    }

    const TARGET: Size = Size::new(32, 24);

    fn dashboard() -> DashboardController<ScriptedBackend, Recorder> {
        let backend = ScriptedBackend::new(Size::new(64, 36));
        DashboardController::new(
            FrameSource::new(backend.clone(), TARGET),
            FrameSource::new(backend, TARGET),
            Recorder::default(),
        )
    }

    fn ms(value: u64) -> Duration { Duration::from_millis(value) }

    fn running_at(speed: u8) -> DashboardController<ScriptedBackend, Recorder> {
        let mut dash = dashboard();
        dash.start();
        dash.advance(RAMP_CADENCE * u32::from(speed));
        assert_eq!(dash.vehicle().speed, speed);
        dash
    }

    // -------------------------------------------------------------------------
    // Speed Ramps
    // -------------------------------------------------------------------------

    #[test]
    fn test_forty_ramp_firings_reach_forty() {
        let mut dash = dashboard();
        dash.start();
        dash.advance(ms(4000));
        assert_eq!(dash.vehicle().speed, 40);
        assert!(dash.is_armed(TimerId::Ramp));
    }

    #[test]
    fn test_ramp_self_disarms_at_cap() {
        let mut dash = running_at(MAX_SPEED);
        assert!(dash.is_armed(TimerId::Ramp));

        dash.advance(ms(100));
        assert_eq!(dash.vehicle().speed, MAX_SPEED);
        assert!(!dash.is_armed(TimerId::Ramp));

        dash.advance(ms(1000));
        assert_eq!(dash.vehicle().speed, MAX_SPEED);
    }

    #[test]
    fn test_hard_brake_twenty_firings_to_zero() {
        let mut dash = running_at(20);
        let updates_before = dash.sinks().indicators.len();

        dash.brake_down();
        assert_eq!(dash.scheduler().cadence(TimerId::Ramp), Some(HARD_BRAKE_CADENCE));

        dash.advance(ms(200));
        assert_eq!(dash.vehicle().speed, 0);

        // Strictly one step down per firing; the 100ms ramp never interleaved
        let speeds: Vec<u8> = dash.sinks().indicators[updates_before..].iter().map(|(s, _)| *s).collect();
        assert_eq!(speeds, (0..20).rev().collect::<Vec<u8>>());
    }

    #[test]
    fn test_hard_brake_disarms_at_zero() {
        let mut dash = running_at(3);
        dash.brake_down();
        dash.advance(ms(40));
        assert_eq!(dash.vehicle().speed, 0);
        assert!(!dash.is_armed(TimerId::Ramp));
    }

    #[test]
    fn test_release_at_zero_resumes_acceleration() {
        let mut dash = running_at(2);
        dash.brake_down();
        dash.advance(ms(50));
        assert_eq!(dash.vehicle().speed, 0);

        dash.brake_up();
        assert_eq!(dash.scheduler().cadence(TimerId::Ramp), Some(RAMP_CADENCE));
        dash.advance(ms(100));
        assert_eq!(dash.vehicle().speed, 1);
    }

    #[test]
    fn test_brake_press_mid_window_loses_no_tick() {
        let mut dash = running_at(10);
        // 60ms into the 100ms window, swap to the 10ms ramp
        dash.advance(ms(60));
        dash.brake_down();
        dash.advance(ms(50));
        assert_eq!(dash.vehicle().speed, 5);
        assert_eq!(dash.scheduler().armed_count(), 2); // Ramp + Blink
    }

    #[test]
    fn test_stop_resets_in_same_call() {
        let mut dash = running_at(30);
        dash.toggle_left();
        dash.toggle_right();
        dash.brake_down();

        dash.stop();
        let state = dash.vehicle();
        assert_eq!(state.speed, 0);
        assert!(!state.left_signal);
        assert!(!state.right_signal);
        assert!(!state.braking);
        assert!(!dash.is_armed(TimerId::Ramp));
        assert!(dash.is_armed(TimerId::Blink));
    }

    #[test]
    fn test_speed_frozen_while_stopped() {
        let mut dash = running_at(5);
        dash.stop();
        dash.brake_down();
        dash.brake_up();
        dash.advance(ms(3000));
        assert_eq!(dash.vehicle().speed, 0);
        assert!(!dash.is_armed(TimerId::Ramp));
    }

    // -------------------------------------------------------------------------
    // Indicators
    // -------------------------------------------------------------------------

    #[test]
    fn test_indicator_update_per_speed_change_and_blink() {
        let mut dash = dashboard();
        dash.start();
        dash.advance(ms(1000));

        // 10 ramp steps + 2 blink firings
        assert_eq!(dash.sinks().indicators.len(), 12);
    }

    #[test]
    fn test_no_indicator_update_when_speed_capped() {
        let mut dash = running_at(MAX_SPEED);
        dash.advance(ms(100)); // cap firing disarms, no speed change
        let count = dash.sinks().indicators.len();

        dash.advance(ms(400));
        // Only blink firings from here on: 5000 + 500 = 5500 is the next one
        assert_eq!(dash.sinks().indicators.len(), count + 1);
    }

    #[test]
    fn test_left_signal_blinks() {
        let mut dash = dashboard();
        dash.start();
        dash.toggle_left();
        dash.advance(ms(500));
        assert!(dash.visuals().left);
        dash.advance(ms(500));
        assert!(!dash.visuals().left);
        dash.advance(ms(500));
        assert!(dash.visuals().left);
    }

    #[test]
    fn test_double_toggle_left_is_dark() {
        let mut dash = dashboard();
        dash.start();
        dash.toggle_left();
        dash.toggle_left();
        for _ in 0..4 {
            dash.advance(ms(500));
            assert!(!dash.visuals().left);
        }
        assert!(!dash.vehicle().left_signal);
    }

    #[test]
    fn test_brake_light_one_extra_cycle() {
        let mut dash = running_at(10);
        dash.brake_down();
        dash.advance(ms(10));
        dash.brake_up();

        // Next blink firing (t = 1500ms) still shows the brake, the one after does not
        dash.advance(ms(490));
        assert!(dash.visuals().brake);
        dash.advance(ms(500));
        assert!(!dash.visuals().brake);
    }

    #[test]
    fn test_blink_after_stop_keeps_lamps_dark() {
        let mut dash = dashboard();
        dash.start();
        dash.toggle_right();
        dash.advance(ms(500));
        assert!(dash.visuals().right);

        dash.stop();
        dash.advance(ms(500));
        assert_eq!(dash.visuals(), IndicatorVisuals::OFF);
        assert!(dash.is_armed(TimerId::Blink));
        assert!(!dash.is_armed(TimerId::Ramp));
    }

    #[test]
    fn test_restart_ramp_updates_drop_stale_lamps() {
        let mut dash = dashboard();
        dash.start();
        dash.toggle_left();
        dash.brake_down();
        dash.brake_up();
        dash.advance(ms(500));
        assert!(dash.visuals().left);
        assert!(dash.visuals().brake);

        dash.stop();
        assert_eq!(dash.visuals(), IndicatorVisuals::OFF);
        dash.start();
        let seen = dash.sinks().indicators.len();
        dash.advance(ms(100));

        let updates = &dash.sinks().indicators[seen..];
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, 1);
        for (_, visuals) in updates {
            assert!(!visuals.left);
            assert!(!visuals.brake);
        }
    }

    #[test]
    fn test_ramp_update_after_toggle_off_is_dark() {
        let mut dash = dashboard();
        dash.start();
        dash.toggle_left();
        dash.advance(ms(500));
        assert!(dash.visuals().left);

        // Phase is still "on" until the next blink firing
        dash.toggle_left();
        let seen = dash.sinks().indicators.len();
        dash.advance(ms(100));

        let updates = &dash.sinks().indicators[seen..];
        assert_eq!(updates.len(), 1);
        for (_, visuals) in updates {
            assert!(!visuals.left);
            assert!(!visuals.brake);
        }
        assert!(!dash.visuals().left);
    }

    // -------------------------------------------------------------------------
    // Frame Acquisition
    // -------------------------------------------------------------------------

    #[test]
    fn test_configure_starts_preview() {
        let mut dash = dashboard();
        dash.configure(Channel::Front, "good:front", TARGET).unwrap();
        dash.configure(Channel::Rear, "good:rear", TARGET).unwrap();

        dash.advance(ms(90));
        let frames = &dash.sinks().frames;
        assert_eq!(frames.len(), 6);
        assert!(frames.iter().all(|(_, size, len)| *size == Size::new(32, 18) && *len == 32 * 18));
        assert_eq!(frames.iter().filter(|(ch, ..)| *ch == Channel::Front).count(), 3);
    }

    #[test]
    fn test_failed_channel_does_not_block_other() {
        let mut dash = dashboard();
        assert!(dash.configure(Channel::Front, "bad:front", TARGET).is_err());
        dash.configure(Channel::Rear, "good:rear", TARGET).unwrap();

        dash.advance(ms(300));
        assert!(!dash.is_armed(TimerId::Acquire(Channel::Front)));
        assert_eq!(dash.sinks().frames.len(), 10);
        assert!(dash.sinks().frames.iter().all(|(ch, ..)| *ch == Channel::Rear));
        assert!(dash.sinks().events[0].is_failure());
    }

    #[test]
    fn test_reconfigure_after_open_error_resumes() {
        let mut dash = dashboard();
        assert!(dash.configure(Channel::Front, "bad:front", TARGET).is_err());
        dash.advance(ms(60));
        assert!(dash.sinks().frames.is_empty());

        dash.reconfigure(Channel::Front, "good:front").unwrap();
        assert!(dash.is_armed(TimerId::Acquire(Channel::Front)));
        dash.advance(ms(30));
        assert_eq!(dash.sinks().frames.len(), 1);
        assert_eq!(dash.source(Channel::Front).target_box(), TARGET);
    }

    #[test]
    fn test_reconfigure_holds_single_input() {
        let mut dash = dashboard();
        let live = Rc::clone(&dash.source(Channel::Front).backend().live);
        dash.configure(Channel::Front, "good:a", TARGET).unwrap();
        dash.configure(Channel::Rear, "good:b", TARGET).unwrap();
        assert_eq!(*live.borrow(), 2);

        dash.reconfigure(Channel::Front, "good:c").unwrap();
        assert_eq!(*live.borrow(), 2);

        assert!(dash.reconfigure(Channel::Front, "bad:d").is_err());
        assert_eq!(*live.borrow(), 1);
        assert!(!dash.is_armed(TimerId::Acquire(Channel::Front)));
    }

    #[test]
    fn test_stop_and_start_gate_acquisition() {
        let mut dash = dashboard();
        dash.configure(Channel::Front, "good:front", TARGET).unwrap();
        dash.start();
        dash.stop();
        assert!(!dash.is_armed(TimerId::Acquire(Channel::Front)));

        dash.advance(ms(300));
        assert!(dash.sinks().frames.is_empty());

        dash.start();
        assert!(dash.is_armed(TimerId::Acquire(Channel::Front)));
        assert!(!dash.is_armed(TimerId::Acquire(Channel::Rear)));
        dash.advance(ms(30));
        assert_eq!(dash.sinks().frames.len(), 1);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let mut dash = dashboard();
        let live = Rc::clone(&dash.source(Channel::Front).backend().live);
        dash.configure(Channel::Front, "good:a", TARGET).unwrap();
        dash.configure(Channel::Rear, "good:b", TARGET).unwrap();
        dash.start();

        dash.shutdown();
        assert_eq!(*live.borrow(), 0);
        assert_eq!(dash.scheduler().armed_count(), 0);
        assert!(!dash.source(Channel::Front).is_open());
        assert!(!dash.source(Channel::Rear).is_open());
    }

    // -------------------------------------------------------------------------
    // Lifecycle Events
    // -------------------------------------------------------------------------

    #[test]
    fn test_lifecycle_events_for_effective_commands() {
        let mut dash = dashboard();
        // Ignored while stopped: no events
        dash.execute(Command::ToggleLeft);
        dash.execute(Command::BrakeDown);
        assert!(dash.sinks().events.is_empty());

        dash.execute(Command::Start);
        dash.execute(Command::ToggleLeft);
        dash.execute(Command::ToggleRight);
        dash.execute(Command::BrakeDown);
        dash.execute(Command::BrakeUp);
        dash.execute(Command::Stop);

        assert_eq!(
            dash.sinks().events,
            vec![
                LifecycleEvent::Started,
                LifecycleEvent::LeftSignal { on: true },
                LifecycleEvent::RightSignal { on: true },
                LifecycleEvent::BrakePressed,
                LifecycleEvent::BrakeReleased,
                LifecycleEvent::Stopped,
            ]
        );
    }

    #[test]
    fn test_speed_bounds_over_long_session() {
        let mut dash = dashboard();
        dash.start();
        for round in 0..60u64 {
            match round % 6 {
                1 => dash.brake_down(),
                3 => dash.brake_up(),
                5 => dash.toggle_left(),
                _ => {}
            }
            dash.advance(ms(37 * (round % 5 + 1)));
            let state = dash.vehicle();
            assert!(state.speed <= MAX_SPEED);
            // At most one ramp slot, never two
            assert!(dash.scheduler().armed_count() <= 2);
        }
    }
}
