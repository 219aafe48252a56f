//! Lifecycle event log.
//!
//! A fixed-capacity ring of formatted lifecycle events for on-screen display.
//! No heap is used for storage: each entry is a `heapless::String` and the
//! ring is a `heapless::Deque`, so the log costs the same memory from the
//! first event to the millionth.
//!
//! Entries remember whether they came from a failure event, so a renderer
//! can color them without parsing the text.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.record(&LifecycleEvent::Started);
//!
//! for entry in log.entries() {
//!     draw(entry.text(), entry.is_failure());
//! }
//! ```

use core::fmt::Write;

use heapless::{Deque, String};

use crate::sink::{LifecycleEvent, LifecycleSink};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Number of entries kept; older entries fall off the front.
pub const LOG_CAPACITY: usize = 6;

/// Maximum bytes per entry. Longer text is cut at a char boundary.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Entries
// =============================================================================

/// One formatted log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    text: String<LOG_LINE_LENGTH>,
    failure: bool,
}

impl LogEntry {
    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    #[inline]
    pub const fn is_failure(&self) -> bool { self.failure }
}

/// `fmt::Write` adapter that drops whatever does not fit instead of failing.
struct Truncating<'a>(&'a mut String<LOG_LINE_LENGTH>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        let room = LOG_LINE_LENGTH - self.0.len();
        let mut cut = s.len().min(room);
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        // Cannot fail: `cut <= room`
        self.0.push_str(&s[..cut]).ok();
        Ok(())
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of the most recent lifecycle messages.
#[derive(Debug)]
pub struct EventLog {
    entries: Deque<LogEntry, LOG_CAPACITY>,
}

impl EventLog {
    pub const fn new() -> Self { Self { entries: Deque::new() } }

    /// Append a line, evicting the oldest one when full.
    pub fn push(
        &mut self,
        text: impl core::fmt::Display,
        failure: bool,
    ) {
        let mut line = String::new();
        write!(Truncating(&mut line), "{text}").ok();

        if self.entries.is_full() {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { text: line, failure }).ok();
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> { self.entries.back() }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

impl LifecycleSink for EventLog {
    fn record(
        &mut self,
        event: &LifecycleEvent,
    ) {
        self.push(event, event.is_failure());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::controller::Channel;
    use crate::error::{OpenError, OpenFailure};

    fn texts(log: &EventLog) -> Vec<&str> { log.entries().map(LogEntry::text).collect() }

    #[test]
    fn test_record_formats_events() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.record(&LifecycleEvent::BrakePressed);
        log.record(&LifecycleEvent::LeftSignal { on: true });

        assert_eq!(texts(&log), ["Brake pressed", "Left signal ON"]);
        assert_eq!(log.latest().map(LogEntry::text), Some("Left signal ON"));
    }

    #[test]
    fn test_oldest_entry_evicted() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAPACITY + 2 {
            log.push(i, false);
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(texts(&log), ["2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_long_line_truncated_on_char_boundary() {
        let mut log = EventLog::new();
        // 47 ASCII bytes then a 2-byte char straddling the limit
        let long = "x".repeat(LOG_LINE_LENGTH - 1) + "é and more";
        log.push(&long, false);

        let text = log.latest().map(LogEntry::text).unwrap();
        assert_eq!(text.len(), LOG_LINE_LENGTH - 1);
        assert!(long.starts_with(text));
    }

    #[test]
    fn test_failure_flag_kept() {
        let mut log = EventLog::new();
        log.record(&LifecycleEvent::Started);
        log.record(&LifecycleEvent::SourceFailed {
            channel: Channel::Front,
            error: OpenError::new("raw:missing.bgr@64x48", OpenFailure::NotFound),
        });

        let flags: Vec<bool> = log.entries().map(LogEntry::is_failure).collect();
        assert_eq!(flags, [false, true]);
        assert!(log.latest().unwrap().text().starts_with("FRONT: unable to open"));
    }
}
