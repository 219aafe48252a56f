//! Per-channel frame source: owns one video input and produces fitted frames.
//!
//! Video inputs are reached through two small traits so the core never knows
//! what a source identifier points at:
//!
//! - [`VideoBackend`] turns an opaque source identifier into an open input
//! - [`VideoInput`] reads one raw frame at a time; dropping it releases the device
//!
//! A [`FrameSource`] owns at most one input. Opening while already open
//! releases the old input first, so a channel can never hold two devices.
//! The acquisition cadence itself lives in the controller's scheduler; this
//! type only reports whether it is open.

use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;

use crate::error::{OpenError, ReadError};
use crate::frame::{Frame, RawFrame};

// =============================================================================
// Video Input Traits
// =============================================================================

/// An acquired video input. Dropping it releases the underlying device.
pub trait VideoInput {
    /// Read the next raw frame into `frame`, reusing its buffer.
    fn read_frame(
        &mut self,
        frame: &mut RawFrame,
    ) -> Result<(), ReadError>;
}

/// Opens video inputs from opaque source identifiers.
pub trait VideoBackend {
    type Input: VideoInput;

    /// Acquire the input named by `source_id`.
    fn open(
        &mut self,
        source_id: &str,
    ) -> Result<Self::Input, OpenError>;
}

// =============================================================================
// Frame Source
// =============================================================================

/// One camera channel's acquisition pipeline.
pub struct FrameSource<B: VideoBackend> {
    backend: B,
    source_id: Option<String>,
    target: Size,
    input: Option<B::Input>,
    raw: RawFrame,
    scratch: Vec<Rgb888>,
    frame: Frame,
}

impl<B: VideoBackend> FrameSource<B> {
    /// Create a closed source rendering into `target`.
    pub fn new(
        backend: B,
        target: Size,
    ) -> Self {
        Self {
            backend,
            source_id: None,
            target,
            input: None,
            raw: RawFrame::default(),
            scratch: Vec::new(),
            frame: Frame::default(),
        }
    }

    /// Whether an input is currently held.
    #[inline]
    pub const fn is_open(&self) -> bool { self.input.is_some() }

    /// Identifier of the last source opened or attempted.
    #[inline]
    pub fn source_id(&self) -> Option<&str> { self.source_id.as_deref() }

    /// Box every emitted frame fits into.
    #[inline]
    pub const fn target_box(&self) -> Size { self.target }

    #[inline]
    pub const fn backend(&self) -> &B { &self.backend }

    /// Acquire `source_id` and render into `target`.
    ///
    /// Any held input is released first. On failure the source stays closed.
    pub fn open(
        &mut self,
        source_id: &str,
        target: Size,
    ) -> Result<(), OpenError> {
        self.close();
        self.target = target;
        self.source_id = Some(source_id.into());

        let input = self.backend.open(source_id)?;
        log::debug!("video source `{source_id}` opened, target {}x{}", target.width, target.height);
        self.input = Some(input);
        Ok(())
    }

    /// Release the current input and open `source_id` with the existing target box.
    pub fn reconfigure(
        &mut self,
        source_id: &str,
    ) -> Result<(), OpenError> {
        let target = self.target;
        self.open(source_id, target)
    }

    /// Release the input. The source identifier is kept for diagnostics.
    pub fn close(&mut self) {
        if let Some(input) = self.input.take() {
            drop(input);
            if let Some(id) = &self.source_id {
                log::debug!("video source `{id}` released");
            }
        }
    }

    /// Acquire, normalize and fit one frame.
    ///
    /// Returns `None` when closed or when the read fails; the previous frame
    /// buffer is left untouched in that case.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        let input = self.input.as_mut()?;

        if let Err(err) = input.read_frame(&mut self.raw) {
            log::trace!("frame read skipped: {err}");
            return None;
        }

        // Conversion fails before the pixel buffer is touched, so the last good frame survives
        if let Err(err) = self.frame.fill_from(&self.raw, self.target, &mut self.scratch) {
            log::trace!("frame conversion skipped: {err}");
            return None;
        }
        Some(&self.frame)
    }

    /// Most recent successfully produced frame (empty before the first one).
    #[inline]
    pub const fn last_frame(&self) -> &Frame { &self.frame }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::error::OpenFailure;
    use crate::frame::PixelFormat;

    /// Scripted input: plays queued results, then reports end of stream.
    pub struct ScriptedInput {
        frames: VecDeque<Result<(Size, [u8; 3]), ReadError>>,
        live: Rc<RefCell<u32>>,
    }

    impl VideoInput for ScriptedInput {
        fn read_frame(
            &mut self,
            frame: &mut RawFrame,
        ) -> Result<(), ReadError> {
            let (size, bgr) = self.frames.pop_front().unwrap_or(Err(ReadError::EndOfStream))?;
            frame.size = size;
            frame.format = PixelFormat::Bgr888;
            frame.data = bgr.repeat((size.width * size.height) as usize);
            Ok(())
        }
    }

    impl Drop for ScriptedInput {
        fn drop(&mut self) { *self.live.borrow_mut() -= 1; }
    }

    /// Backend that knows `good:*` identifiers and fails on anything else.
    /// Every input plays `frames_per_input` solid frames of the given size.
    #[derive(Clone)]
    pub struct ScriptedBackend {
        pub source_size: Size,
        pub frames_per_input: usize,
        /// Number of inputs currently alive.
        pub live: Rc<RefCell<u32>>,
    }

    impl ScriptedBackend {
        pub fn new(source_size: Size) -> Self {
            Self {
                source_size,
                frames_per_input: usize::MAX,
                live: Rc::new(RefCell::new(0)),
            }
        }
    }

    impl VideoBackend for ScriptedBackend {
        type Input = ScriptedInput;

        fn open(
            &mut self,
            source_id: &str,
        ) -> Result<Self::Input, OpenError> {
            if !source_id.starts_with("good:") {
                return Err(OpenError::new(source_id, OpenFailure::NotFound));
            }
            *self.live.borrow_mut() += 1;
            let count = self.frames_per_input.min(1024);
            Ok(ScriptedInput {
                frames: (0..count).map(|_| Ok((self.source_size, [255, 0, 0]))).collect(),
                live: Rc::clone(&self.live),
            })
        }
    }

    fn source() -> FrameSource<ScriptedBackend> {
        FrameSource::new(ScriptedBackend::new(Size::new(1920, 1080)), Size::new(640, 480))
    }

    #[test]
    fn test_new_source_is_closed() {
        let mut src = source();
        assert!(!src.is_open());
        assert!(src.next_frame().is_none());
    }

    #[test]
    fn test_open_and_read_fitted_frame() {
        let mut src = source();
        src.open("good:front", Size::new(640, 480)).unwrap();
        assert!(src.is_open());

        let frame = src.next_frame().unwrap();
        assert_eq!(frame.size(), Size::new(640, 360));
        assert_eq!(frame.pixels().len(), 640 * 360);
        // BGR blue becomes RGB blue
        assert_eq!(frame.pixels()[0], Rgb888::new(0, 0, 255));
    }

    #[test]
    fn test_open_failure_leaves_closed() {
        let mut src = source();
        let err = src.open("bad:front", Size::new(640, 480)).unwrap_err();
        assert_eq!(err.reason, OpenFailure::NotFound);
        assert_eq!(err.source_id, "bad:front");
        assert!(!src.is_open());
        assert_eq!(src.source_id(), Some("bad:front"));
    }

    #[test]
    fn test_read_failure_keeps_last_frame() {
        let mut backend = ScriptedBackend::new(Size::new(160, 120));
        backend.frames_per_input = 1;
        let mut src = FrameSource::new(backend, Size::new(320, 240));
        src.open("good:a", Size::new(320, 240)).unwrap();

        assert!(src.next_frame().is_some());
        let before = src.last_frame().clone();
        assert!(src.next_frame().is_none());
        assert_eq!(*src.last_frame(), before);
        assert!(src.is_open());
    }

    #[test]
    fn test_reconfigure_releases_before_reopen() {
        let mut src = source();
        let live = Rc::clone(&src.backend.live);

        src.open("good:a", Size::new(640, 480)).unwrap();
        assert_eq!(*live.borrow(), 1);

        src.reconfigure("good:b").unwrap();
        assert_eq!(*live.borrow(), 1);
        assert_eq!(src.source_id(), Some("good:b"));
        assert_eq!(src.target_box(), Size::new(640, 480));
    }

    #[test]
    fn test_reconfigure_after_open_error_recovers() {
        let mut src = source();
        assert!(src.open("bad:a", Size::new(640, 480)).is_err());
        assert!(src.next_frame().is_none());

        src.reconfigure("good:b").unwrap();
        assert!(src.is_open());
        assert!(src.next_frame().is_some());
    }

    #[test]
    fn test_reconfigure_to_bad_source_closes() {
        let mut src = source();
        let live = Rc::clone(&src.backend.live);
        src.open("good:a", Size::new(640, 480)).unwrap();

        assert!(src.reconfigure("bad:b").is_err());
        assert!(!src.is_open());
        assert_eq!(*live.borrow(), 0);
    }

    #[test]
    fn test_close_releases_input() {
        let mut src = source();
        let live = Rc::clone(&src.backend.live);
        src.open("good:a", Size::new(640, 480)).unwrap();

        src.close();
        assert!(!src.is_open());
        assert_eq!(*live.borrow(), 0);
        assert!(src.next_frame().is_none());
    }
}
