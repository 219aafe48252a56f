//! Raw BGR24 frame files.
//!
//! The file is a plain concatenation of frames, each `W * H * 3` bytes,
//! row-major, blue first. There is no header; the geometry comes from the
//! source identifier. Reaching the end of the file is reported as
//! [`ReadError::EndOfStream`], which the frame source treats as transient,
//! so the last frame simply stays on screen.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use car_control_common::{OpenFailure, PixelFormat, RawFrame, ReadError, VideoInput};
use embedded_graphics::geometry::Size;

/// Video input reading packed frames from a file.
#[derive(Debug)]
pub struct RawFileInput<R> {
    reader: R,
    size: Size,
    frame_len: usize,
}

impl RawFileInput<BufReader<File>> {
    /// Open `path` holding frames of `size`.
    pub fn open(
        path: &Path,
        size: Size,
    ) -> Result<Self, OpenFailure> {
        let file = File::open(path).map_err(open_failure)?;
        let frame_len = frame_len(size);

        let len = file.metadata().map_err(open_failure)?.len();
        if len < frame_len as u64 {
            return Err(OpenFailure::Malformed(format!(
                "{} holds {len} bytes, one {}x{} frame needs {frame_len}",
                path.display(),
                size.width,
                size.height
            )));
        }
        Ok(Self::from_reader(BufReader::new(file), size))
    }
}

impl<R: Read> RawFileInput<R> {
    pub fn from_reader(
        reader: R,
        size: Size,
    ) -> Self {
        Self {
            reader,
            size,
            frame_len: frame_len(size),
        }
    }
}

impl<R: Read> VideoInput for RawFileInput<R> {
    fn read_frame(
        &mut self,
        frame: &mut RawFrame,
    ) -> Result<(), ReadError> {
        frame.data.resize(self.frame_len, 0);
        let filled = fill(&mut self.reader, &mut frame.data).map_err(|err| {
            log::debug!("raw frame read failed: {err}");
            ReadError::Device
        })?;

        match filled {
            0 => Err(ReadError::EndOfStream),
            n if n < self.frame_len => Err(ReadError::Truncated {
                expected: self.frame_len,
                actual: n,
            }),
            _ => {
                frame.size = self.size;
                frame.format = PixelFormat::Bgr888;
                Ok(())
            }
        }
    }
}

const fn frame_len(size: Size) -> usize { size.width as usize * size.height as usize * PixelFormat::BYTES_PER_PIXEL }

/// Read until `buf` is full or the reader is exhausted. Returns bytes read.
fn fill(
    reader: &mut impl Read,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn open_failure(err: io::Error) -> OpenFailure {
    match err.kind() {
        ErrorKind::NotFound => OpenFailure::NotFound,
        _ => OpenFailure::Unavailable(err.to_string()),
    }
}
