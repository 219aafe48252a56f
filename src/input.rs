//! Keyboard input: key filtering and key-to-command mapping.
//!
//! # Controls
//!
//! | Key | Event | Action |
//! |-----|-------|--------|
//! | `Return` | down | Start |
//! | `Backspace` | down | Stop |
//! | `A` | down | Toggle left signal |
//! | `D` | down | Toggle right signal |
//! | `S` | down / up | Brake pressed / released |
//! | `1` / `2` | down | Next front / rear camera source |
//! | `Space` | any | Swallowed by the button filter |
//!
//! Key repeat is ignored so holding `A` does not toggle the signal on every
//! repeat and holding `S` produces a single press.
//!
//! Filtering happens before mapping and lives on the input side only. The
//! vehicle never sees a swallowed key.

use car_control_common::{Channel, Command};
use embedded_graphics_simulator::sdl2::Keycode;

// =============================================================================
// Actions
// =============================================================================

/// What a key event asks the application to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// A vehicle command for the controller.
    Command(Command),
    /// Reconfigure a channel to its next configured source.
    CycleSource(Channel),
}

// =============================================================================
// Key Filter
// =============================================================================

/// Consumes keys before they are mapped. Returns `true` if the key was consumed.
pub trait KeyFilter {
    fn filter_key(
        &mut self,
        keycode: Keycode,
    ) -> bool;
}

/// Filter for the on-screen button surface: Space must never activate a
/// button, so it is consumed here.
#[derive(Debug, Default)]
pub struct ButtonKeyFilter {
    swallowed: u32,
}

impl ButtonKeyFilter {
    pub const fn new() -> Self { Self { swallowed: 0 } }

    /// Number of key events consumed so far.
    #[inline]
    pub const fn swallowed(&self) -> u32 { self.swallowed }
}

impl KeyFilter for ButtonKeyFilter {
    fn filter_key(
        &mut self,
        keycode: Keycode,
    ) -> bool {
        if keycode == Keycode::SPACE {
            self.swallowed += 1;
            log::trace!("key {keycode:?} swallowed");
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Key Mapping
// =============================================================================

/// Map a key press to an action.
pub fn map_key_down(keycode: Keycode) -> Option<InputAction> {
    let action = match keycode {
        Keycode::RETURN => InputAction::Command(Command::Start),
        Keycode::BACKSPACE => InputAction::Command(Command::Stop),
        Keycode::A => InputAction::Command(Command::ToggleLeft),
        Keycode::D => InputAction::Command(Command::ToggleRight),
        Keycode::S => InputAction::Command(Command::BrakeDown),
        Keycode::NUM_1 => InputAction::CycleSource(Channel::Front),
        Keycode::NUM_2 => InputAction::CycleSource(Channel::Rear),
        _ => return None,
    };
    Some(action)
}

/// Map a key release to an action. Only the brake cares about releases.
pub fn map_key_up(keycode: Keycode) -> Option<InputAction> {
    (keycode == Keycode::S).then_some(InputAction::Command(Command::BrakeUp))
}

/// Runs key events through a [`KeyFilter`] and then the key map.
#[derive(Debug, Default)]
pub struct KeyRouter<F: KeyFilter> {
    filter: F,
}

impl<F: KeyFilter> KeyRouter<F> {
    pub const fn new(filter: F) -> Self { Self { filter } }

    #[inline]
    pub const fn filter(&self) -> &F { &self.filter }

    pub fn key_down(
        &mut self,
        keycode: Keycode,
        repeat: bool,
    ) -> Option<InputAction> {
        if repeat || self.filter.filter_key(keycode) {
            return None;
        }
        map_key_down(keycode)
    }

    pub fn key_up(
        &mut self,
        keycode: Keycode,
        repeat: bool,
    ) -> Option<InputAction> {
        if repeat || self.filter.filter_key(keycode) {
            return None;
        }
        map_key_up(keycode)
    }
}

// =============================================================================
// Tests
// =============================================================================
