//! Per-channel list of configured video sources.
//!
//! Each channel may be given several sources on the command line. The first
//! one is opened at startup; the cycle key moves to the next, wrapping
//! around, and the controller reconfigures the channel to it.

/// Ordered source identifiers with a cursor.
#[derive(Debug, Default)]
pub struct SourceList {
    ids: Vec<String>,
    cursor: usize,
}

impl SourceList {
    pub const fn new(ids: Vec<String>) -> Self { Self { ids, cursor: 0 } }

    /// Source currently selected, if any were configured.
    pub fn current(&self) -> Option<&str> { self.ids.get(self.cursor).map(String::as_str) }

    /// Move to the next source (wrapping) and return it.
    pub fn advance(&mut self) -> Option<&str> {
        if self.ids.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.ids.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[&str]) -> SourceList { SourceList::new(ids.iter().map(|id| (*id).to_string()).collect()) }

    #[test]
    fn test_cycle_wraps() {
        let mut sources = list(&["pattern:bars@640x480", "raw:a.bgr@320x240"]);
        assert_eq!(sources.current(), Some("pattern:bars@640x480"));
        assert_eq!(sources.advance(), Some("raw:a.bgr@320x240"));
        assert_eq!(sources.advance(), Some("pattern:bars@640x480"));
    }

    #[test]
    fn test_single_source_reselects_itself() {
        let mut sources = list(&["pattern:gray@64x48"]);
        assert_eq!(sources.advance(), Some("pattern:gray@64x48"));
    }

    #[test]
    fn test_empty_list() {
        let mut sources = list(&[]);
        assert_eq!(sources.current(), None);
        assert_eq!(sources.advance(), None);
    }
}
