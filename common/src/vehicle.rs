//! Vehicle state machine: speed ramps, turn signals and brake.
//!
//! The machine never touches timers itself. Every command and ramp step
//! returns a [`RampAction`] describing what should happen to the single ramp
//! timer slot; the controller applies it to the scheduler in the same dispatch
//! step. Because acceleration and deceleration share that one slot, swapping
//! ramps on a brake press replaces the cadence atomically and the two ramps
//! can never be armed together.
//!
//! # Speed Ramps
//!
//! | Ramp | Cadence | Step | Stops when |
//! |------|---------|------|------------|
//! | [`Ramp::Accelerate`] | 100 ms | +1 | speed reaches 50, or not running |
//! | [`Ramp::Decelerate`] | 10 ms (brake held) | -1 | speed reaches 0, or not running |
//!
//! # Preconditions
//!
//! Signal and brake commands are silent no-ops while the vehicle is stopped.
//! That is the defined behavior, not an error path.

use core::time::Duration;

use crate::config::{HARD_BRAKE_CADENCE, MAX_SPEED, RAMP_CADENCE};

// =============================================================================
// State
// =============================================================================

/// Observable vehicle state, readable by renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VehicleState {
    /// Current speed, always within `0..=MAX_SPEED`.
    pub speed: u8,
    /// Engine running. Gates every ramp and indicator effect.
    pub running: bool,
    /// Left turn-signal intent.
    pub left_signal: bool,
    /// Right turn-signal intent.
    pub right_signal: bool,
    /// Shared blink phase, flipped by the blink scheduler.
    pub blink_phase: bool,
    /// Brake currently held.
    pub braking: bool,
    /// Brake was released since the last indicator refresh.
    pub brake_just_released: bool,
}

/// Which speed ramp owns the ramp timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    /// +1 per firing up to [`MAX_SPEED`].
    Accelerate,
    /// -1 per firing down to zero.
    Decelerate,
}

/// What the caller must do with the ramp timer after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampAction {
    /// Leave the ramp timer as it is.
    Keep,
    /// (Re)arm the ramp timer for `Ramp` at the given cadence.
    Arm(Ramp, Duration),
    /// Disarm the ramp timer.
    Disarm,
}

// =============================================================================
// State Machine
// =============================================================================

/// Owns [`VehicleState`] and the identity of the armed ramp.
#[derive(Debug, Default)]
pub struct VehicleStateMachine {
    state: VehicleState,
    ramp: Option<Ramp>,
}

impl VehicleStateMachine {
    /// Create a stopped vehicle with every field cleared.
    pub const fn new() -> Self {
        Self {
            state: VehicleState {
                speed: 0,
                running: false,
                left_signal: false,
                right_signal: false,
                blink_phase: false,
                braking: false,
                brake_just_released: false,
            },
            ramp: None,
        }
    }

    /// Read-only view of the current state.
    #[inline]
    pub const fn state(&self) -> &VehicleState { &self.state }

    /// Ramp currently owning the ramp timer, if any.
    #[inline]
    pub const fn armed_ramp(&self) -> Option<Ramp> { self.ramp }

    #[inline]
    pub const fn is_running(&self) -> bool { self.state.running }

    #[inline]
    pub const fn speed(&self) -> u8 { self.state.speed }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Start the engine and (re)start the acceleration ramp.
    pub fn start(&mut self) -> RampAction {
        self.state.running = true;
        self.arm(Ramp::Accelerate, RAMP_CADENCE)
    }

    /// Stop the engine: speed drops to zero at once and every flag clears.
    ///
    /// Idempotent; the blink scheduler re-asserts it while stopped.
    pub fn stop(&mut self) -> RampAction {
        self.state.running = false;
        self.state.speed = 0;
        self.state.left_signal = false;
        self.state.right_signal = false;
        self.state.braking = false;
        self.state.brake_just_released = false;
        self.ramp = None;
        RampAction::Disarm
    }

    /// Flip the left signal intent. Returns `false` (no-op) when stopped.
    pub fn toggle_left(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.left_signal = !self.state.left_signal;
        true
    }

    /// Flip the right signal intent. Returns `false` (no-op) when stopped.
    pub fn toggle_right(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.right_signal = !self.state.right_signal;
        true
    }

    /// Hold the brake: swap the acceleration ramp for the hard-brake ramp.
    pub fn press_brake(&mut self) -> RampAction {
        if !self.state.running {
            return RampAction::Keep;
        }
        self.state.braking = true;
        self.arm(Ramp::Decelerate, HARD_BRAKE_CADENCE)
    }

    /// Release the brake: latch the brake light for one more refresh and
    /// return to the acceleration ramp.
    pub fn release_brake(&mut self) -> RampAction {
        if !self.state.running {
            return RampAction::Keep;
        }
        self.state.braking = false;
        self.state.brake_just_released = true;
        self.arm(Ramp::Accelerate, RAMP_CADENCE)
    }

    // -------------------------------------------------------------------------
    // Ramp Steps
    // -------------------------------------------------------------------------

    /// One acceleration step. Disarms itself at the cap or when stopped.
    pub fn accel_ramp_tick(&mut self) -> RampAction {
        if self.state.running && self.state.speed < MAX_SPEED {
            self.state.speed += 1;
            RampAction::Keep
        } else {
            self.ramp = None;
            RampAction::Disarm
        }
    }

    /// One deceleration step at whatever cadence is armed.
    /// Disarms itself at zero or when stopped.
    pub fn decel_ramp_tick(&mut self) -> RampAction {
        if self.state.running && self.state.speed > 0 {
            self.state.speed -= 1;
            RampAction::Keep
        } else {
            self.ramp = None;
            RampAction::Disarm
        }
    }

    /// Run the step belonging to whichever ramp is armed.
    pub fn ramp_tick(&mut self) -> RampAction {
        match self.ramp {
            Some(Ramp::Accelerate) => self.accel_ramp_tick(),
            Some(Ramp::Decelerate) => self.decel_ramp_tick(),
            None => RampAction::Disarm,
        }
    }

    // -------------------------------------------------------------------------
    // Indicator Support (blink scheduler only)
    // -------------------------------------------------------------------------

    /// Flip the shared blink phase and return the new value.
    pub(crate) fn flip_blink_phase(&mut self) -> bool {
        self.state.blink_phase = !self.state.blink_phase;
        self.state.blink_phase
    }

    /// Consume the one-shot brake release latch.
    pub(crate) fn take_brake_release(&mut self) -> bool {
        core::mem::take(&mut self.state.brake_just_released)
    }

    fn arm(
        &mut self,
        ramp: Ramp,
        cadence: Duration,
    ) -> RampAction {
        self.ramp = Some(ramp);
        RampAction::Arm(ramp, cadence)
    }
}

// =============================================================================
// Tests
// =============================================================================
