//! Synthetic camera: vertical color bars with a scan bar sweeping downwards.
//!
//! Frames are produced in BGR order like a real capture device, so they go
//! through the same normalization path. The scan bar moves a fixed number of
//! rows per frame, which makes dropped or frozen frames easy to spot.

use car_control_common::{OpenFailure, PixelFormat, RawFrame, ReadError, VideoInput};
use embedded_graphics::geometry::Size;

/// Rows the scan bar advances per frame.
const SCAN_STEP: u32 = 4;

/// Scan bar thickness in rows.
const SCAN_HEIGHT: u32 = 6;

/// Classic 75% color bars, as (R, G, B).
const COLOR_BARS: [[u8; 3]; 8] = [
    [191, 191, 191],
    [191, 191, 0],
    [0, 191, 191],
    [0, 191, 0],
    [191, 0, 191],
    [191, 0, 0],
    [0, 0, 191],
    [16, 16, 16],
];

/// Eight-step gray ramp, as (R, G, B).
const GRAY_BARS: [[u8; 3]; 8] = [
    [255, 255, 255],
    [219, 219, 219],
    [182, 182, 182],
    [146, 146, 146],
    [109, 109, 109],
    [73, 73, 73],
    [36, 36, 36],
    [0, 0, 0],
];

/// Pattern palettes selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Bars,
    Gray,
}

impl Palette {
    pub fn from_name(name: &str) -> Result<Self, OpenFailure> {
        match name {
            "bars" => Ok(Self::Bars),
            "gray" => Ok(Self::Gray),
            _ => Err(OpenFailure::NotFound),
        }
    }

    const fn colors(self) -> &'static [[u8; 3]; 8] {
        match self {
            Self::Bars => &COLOR_BARS,
            Self::Gray => &GRAY_BARS,
        }
    }
}

/// Endless synthetic video input.
#[derive(Debug)]
pub struct PatternInput {
    palette: Palette,
    size: Size,
    /// Frames read so far, modulo the frame height.
    frame_index: u32,
}

impl PatternInput {
    pub const fn new(
        palette: Palette,
        size: Size,
    ) -> Self {
        Self {
            palette,
            size,
            frame_index: 0,
        }
    }

    /// First row covered by the scan bar in the current frame.
    const fn scan_row(&self) -> u32 { (self.frame_index * SCAN_STEP) % self.size.height }
}

impl VideoInput for PatternInput {
    fn read_frame(
        &mut self,
        frame: &mut RawFrame,
    ) -> Result<(), ReadError> {
        let Size { width, height } = self.size;
        let colors = self.palette.colors();
        let scan_row = self.scan_row();

        frame.size = self.size;
        frame.format = PixelFormat::Bgr888;
        frame.data.clear();
        frame.data.reserve(width as usize * height as usize * PixelFormat::BYTES_PER_PIXEL);

        for y in 0..height {
            let in_scan = y.wrapping_sub(scan_row) < SCAN_HEIGHT;
            for x in 0..width {
                let [r, g, b] = if in_scan {
                    [255, 255, 255]
                } else {
                    colors[(x * 8 / width) as usize]
                };
                frame.data.extend_from_slice(&[b, g, r]);
            }
        }

        // Heights are at most 4096 (checked by the URI parser), so this never overflows
        self.frame_index = (self.frame_index + 1) % height;
        Ok(())
    }
}
