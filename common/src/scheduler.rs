//! Virtual-time timer table for the single dispatch context.
//!
//! The scheduler holds one slot per timer id. Arming a slot sets its cadence
//! and schedules the first firing one cadence after the current time; a slot
//! that is already armed is replaced, never duplicated. Firings are pulled one
//! at a time with [`Scheduler::pop_due`], always the earliest deadline first,
//! with ties going to the slot that was armed first.
//!
//! Pulling firings one by one is what gives the cancellation guarantee: the
//! caller handles a firing, may arm or disarm other slots while doing so, and
//! the next call to `pop_due` only sees what is armed at that moment. A slot
//! disarmed by a handler can therefore never fire afterwards, even when its
//! deadline had already elapsed.
//!
//! # Usage
//!
//! ```ignore
//! let mut scheduler = Scheduler::new();
//! scheduler.arm(TimerId::Blink, BLINK_CADENCE);
//!
//! let until = scheduler.now() + elapsed;
//! while let Some(id) = scheduler.pop_due(until) {
//!     handle(id);
//! }
//! scheduler.settle(until);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use crate::config::MIN_CADENCE;

/// One armed timer slot.
#[derive(Clone, Copy, Debug)]
struct Slot<T> {
    id: T,
    cadence: Duration,
    deadline: Duration,
    /// Arm order, used to break deadline ties.
    seq: u64,
}

/// Periodic timers keyed by `T`, driven by an externally advanced clock.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    slots: Vec<Slot<T>>,
    next_seq: u64,
}

impl<T: Copy + PartialEq> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            slots: Vec::new(),
            next_seq: 0,
        }
    }

    /// Current scheduler time.
    #[inline]
    pub const fn now(&self) -> Duration { self.now }

    /// Arm `id` with `cadence`, replacing any existing registration.
    ///
    /// The first firing happens one cadence from now.
    pub fn arm(
        &mut self,
        id: T,
        cadence: Duration,
    ) {
        self.disarm(id);
        let cadence = cadence.max(MIN_CADENCE);
        self.slots.push(Slot {
            id,
            cadence,
            deadline: self.now + cadence,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Arm `id` only if it is not armed yet. An armed slot keeps its phase.
    pub fn ensure_armed(
        &mut self,
        id: T,
        cadence: Duration,
    ) {
        if !self.is_armed(id) {
            self.arm(id, cadence);
        }
    }

    /// Disarm `id`. Returns `true` if it was armed.
    pub fn disarm(
        &mut self,
        id: T,
    ) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    /// Disarm every slot matching `predicate`.
    pub fn disarm_where<F>(
        &mut self,
        mut predicate: F,
    ) where
        F: FnMut(T) -> bool,
    {
        self.slots.retain(|slot| !predicate(slot.id));
    }

    /// Check whether `id` is armed.
    #[inline]
    pub fn is_armed(
        &self,
        id: T,
    ) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    /// Cadence `id` is armed with, if any.
    pub fn cadence(
        &self,
        id: T,
    ) -> Option<Duration> {
        self.slots.iter().find(|slot| slot.id == id).map(|slot| slot.cadence)
    }

    /// Earliest pending deadline across all armed slots.
    pub fn next_deadline(&self) -> Option<Duration> { self.slots.iter().map(|slot| slot.deadline).min() }

    /// Number of armed slots.
    #[inline]
    pub fn armed_count(&self) -> usize { self.slots.len() }

    /// Pop the next firing whose deadline is at or before `until`.
    ///
    /// Advances the clock to that deadline and reschedules the slot one
    /// cadence later. Returns `None` once nothing else is due.
    pub fn pop_due(
        &mut self,
        until: Duration,
    ) -> Option<T> {
        let slot = self
            .slots
            .iter_mut()
            .filter(|slot| slot.deadline <= until)
            .min_by_key(|slot| (slot.deadline, slot.seq))?;

        let id = slot.id;
        let fired_at = slot.deadline;
        slot.deadline += slot.cadence;

        // Never run the clock backwards when a caller arms late.
        if fired_at > self.now {
            self.now = fired_at;
        }
        Some(id)
    }

    /// Move the clock to `until` once every due firing has been popped.
    pub fn settle(
        &mut self,
        until: Duration,
    ) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl<T: Copy + PartialEq> Default for Scheduler<T> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
