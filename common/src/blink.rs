//! Blink scheduler: the single authority for indicator visuals.
//!
//! Every 500 ms firing flips the shared blink phase and recomputes the three
//! lamp states from the vehicle state:
//!
//! | Lamp | On when |
//! |------|---------|
//! | Left / right | running AND signal intent AND blink phase |
//! | Brake | braking, or once after release (one-shot latch) |
//!
//! While the vehicle is stopped every lamp is forced off and `stop()` is
//! re-asserted on the state machine. The returned [`RampAction`] from that
//! re-assertion is handed back so the controller keeps the ramp timer in sync.

use core::time::Duration;

use crate::config::BLINK_CADENCE;
use crate::vehicle::{RampAction, VehicleStateMachine};

/// Boolean lamp states handed to the indicator sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndicatorVisuals {
    pub left: bool,
    pub right: bool,
    pub brake: bool,
}

impl IndicatorVisuals {
    /// Every lamp off.
    pub const OFF: Self = Self {
        left: false,
        right: false,
        brake: false,
    };
}

/// Result of one blink firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkTick {
    /// Lamp states to render until the next firing.
    pub visuals: IndicatorVisuals,
    /// Ramp timer change requested by a re-asserted stop.
    pub ramp: RampAction,
}

/// Fixed-cadence phase toggle that renders indicator lamps.
#[derive(Debug)]
pub struct BlinkScheduler {
    cadence: Duration,
    visuals: IndicatorVisuals,
}

impl BlinkScheduler {
    pub const fn new() -> Self {
        Self {
            cadence: BLINK_CADENCE,
            visuals: IndicatorVisuals::OFF,
        }
    }

    /// Cadence the blink timer must be armed with.
    #[inline]
    pub const fn cadence(&self) -> Duration { self.cadence }

    /// Lamp states computed by the most recent firing.
    #[inline]
    pub const fn visuals(&self) -> IndicatorVisuals { self.visuals }

    /// Recompute lamps from the current state without flipping the phase or
    /// consuming the brake release latch. Used between firings, when speed
    /// changes but the phase stays put.
    pub fn refresh(
        &mut self,
        vehicle: &VehicleStateMachine,
    ) -> IndicatorVisuals {
        let state = vehicle.state();
        self.visuals = if state.running {
            IndicatorVisuals {
                left: state.left_signal && state.blink_phase,
                right: state.right_signal && state.blink_phase,
                brake: state.braking || state.brake_just_released,
            }
        } else {
            IndicatorVisuals::OFF
        };
        self.visuals
    }

    /// Forget the last computed lamps.
    #[inline]
    pub fn reset(&mut self) { self.visuals = IndicatorVisuals::OFF; }

    /// Handle one blink firing.
    pub fn fire(
        &mut self,
        vehicle: &mut VehicleStateMachine,
    ) -> BlinkTick {
        let phase = vehicle.flip_blink_phase();

        if !vehicle.is_running() {
            self.visuals = IndicatorVisuals::OFF;
            let ramp = vehicle.stop();
            return BlinkTick {
                visuals: self.visuals,
                ramp,
            };
        }

        let state = *vehicle.state();
        let brake = if state.braking {
            true
        } else {
            // Lit for exactly one refresh after release
            vehicle.take_brake_release()
        };

        self.visuals = IndicatorVisuals {
            left: state.left_signal && phase,
            right: state.right_signal && phase,
            brake,
        };

        BlinkTick {
            visuals: self.visuals,
            ramp: RampAction::Keep,
        }
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> VehicleStateMachine {
        let mut vehicle = VehicleStateMachine::new();
        vehicle.start();
        vehicle
    }

    #[test]
    fn test_phase_flips_every_firing() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();

        blink.fire(&mut vehicle);
        assert!(vehicle.state().blink_phase);
        blink.fire(&mut vehicle);
        assert!(!vehicle.state().blink_phase);
    }

    #[test]
    fn test_left_signal_blinks_with_phase() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.toggle_left();

        let on = blink.fire(&mut vehicle).visuals;
        let off = blink.fire(&mut vehicle).visuals;
        assert!(on.left);
        assert!(!on.right);
        assert!(!off.left);
    }

    #[test]
    fn test_double_toggle_stays_off() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.toggle_left();
        vehicle.toggle_left();

        // Off regardless of phase
        for _ in 0..4 {
            assert!(!blink.fire(&mut vehicle).visuals.left);
        }
        assert!(!vehicle.state().left_signal);
    }

    #[test]
    fn test_brake_lit_while_held() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.press_brake();

        for _ in 0..3 {
            assert!(blink.fire(&mut vehicle).visuals.brake);
        }
    }

    #[test]
    fn test_brake_stays_lit_one_cycle_after_release() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.press_brake();
        vehicle.release_brake();

        assert!(blink.fire(&mut vehicle).visuals.brake);
        assert!(!vehicle.state().brake_just_released);
        assert!(!blink.fire(&mut vehicle).visuals.brake);
    }

    #[test]
    fn test_stopped_forces_off_and_reasserts_stop() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = VehicleStateMachine::new();

        let tick = blink.fire(&mut vehicle);
        assert_eq!(tick.visuals, IndicatorVisuals::OFF);
        assert_eq!(tick.ramp, RampAction::Disarm);
        assert_eq!(vehicle.speed(), 0);
    }

    #[test]
    fn test_visuals_cached_between_firings() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.toggle_right();
        vehicle.press_brake();

        let tick = blink.fire(&mut vehicle);
        assert_eq!(blink.visuals(), tick.visuals);
        assert!(blink.visuals().right);
        assert!(blink.visuals().brake);
    }

    #[test]
    fn test_refresh_follows_toggle_off() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.toggle_left();
        assert!(blink.fire(&mut vehicle).visuals.left);

        vehicle.toggle_left();
        assert!(!blink.refresh(&vehicle).left);
        assert!(!blink.visuals().left);
    }

    #[test]
    fn test_refresh_keeps_phase_and_latch() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.toggle_right();
        vehicle.press_brake();
        blink.fire(&mut vehicle);
        vehicle.release_brake();

        let visuals = blink.refresh(&vehicle);
        assert!(visuals.right);
        assert!(visuals.brake);
        assert!(vehicle.state().blink_phase);
        assert!(vehicle.state().brake_just_released);

        // The next firing still consumes the latch
        assert!(blink.fire(&mut vehicle).visuals.brake);
        assert!(!vehicle.state().brake_just_released);
    }

    #[test]
    fn test_refresh_dark_while_stopped() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.press_brake();
        blink.fire(&mut vehicle);
        vehicle.stop();

        assert_eq!(blink.refresh(&vehicle), IndicatorVisuals::OFF);
    }

    #[test]
    fn test_reset_clears_cached_visuals() {
        let mut blink = BlinkScheduler::new();
        let mut vehicle = running();
        vehicle.press_brake();
        blink.fire(&mut vehicle);

        blink.reset();
        assert_eq!(blink.visuals(), IndicatorVisuals::OFF);
    }
}
