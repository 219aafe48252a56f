//! Video backends available to the dashboard window.
//!
//! - [`pattern`]: Synthetic color-bar camera (`pattern:<name>@WxH`)
//! - [`raw`]: Packed BGR24 frame files (`raw:<path>@WxH`)
//! - [`uri`]: Source identifier parsing
//!
//! [`SimBackend`] dispatches on the identifier's scheme and hands the frame
//! source a [`SimInput`]. Dropping the input closes the file, if any.

mod pattern;
mod raw;
mod uri;

use std::fs::File;
use std::io::BufReader;

use car_control_common::{OpenError, OpenFailure, RawFrame, ReadError, VideoBackend, VideoInput};
use pattern::{Palette, PatternInput};
use raw::RawFileInput;
use uri::SourceUri;

/// An open input of either kind.
#[derive(Debug)]
pub enum SimInput {
    Pattern(PatternInput),
    Raw(RawFileInput<BufReader<File>>),
}

impl VideoInput for SimInput {
    fn read_frame(
        &mut self,
        frame: &mut RawFrame,
    ) -> Result<(), ReadError> {
        match self {
            Self::Pattern(input) => input.read_frame(frame),
            Self::Raw(input) => input.read_frame(frame),
        }
    }
}

/// Opens `pattern:` and `raw:` sources.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimBackend;

impl VideoBackend for SimBackend {
    type Input = SimInput;

    fn open(
        &mut self,
        source_id: &str,
    ) -> Result<Self::Input, OpenError> {
        let fail = |reason: OpenFailure| OpenError::new(source_id, reason);

        let uri = SourceUri::parse(source_id).map_err(|err| fail(err.into()))?;
        let input = match uri {
            SourceUri::Pattern { name, size } => {
                let palette = Palette::from_name(&name).map_err(fail)?;
                SimInput::Pattern(PatternInput::new(palette, size))
            }
            SourceUri::Raw { path, size } => SimInput::Raw(RawFileInput::open(&path, size).map_err(fail)?),
        };
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_pattern() {
        let mut backend = SimBackend;
        let mut input = backend.open("pattern:bars@64x48").unwrap();
        let mut frame = RawFrame::default();
        input.read_frame(&mut frame).unwrap();
        assert_eq!(frame.data.len(), 64 * 48 * 3);
    }

    #[test]
    fn test_open_failures_carry_source_id() {
        let mut backend = SimBackend;

        let err = backend.open("pattern:plaid@64x48").unwrap_err();
        assert_eq!(err.source_id, "pattern:plaid@64x48");
        assert_eq!(err.reason, OpenFailure::NotFound);

        let err = backend.open("v4l2:/dev/video0@640x480").unwrap_err();
        assert_eq!(err.reason, OpenFailure::Unsupported);

        let err = backend.open("raw:/nonexistent.bgr@64x48").unwrap_err();
        assert_eq!(err.reason, OpenFailure::NotFound);
    }
}
