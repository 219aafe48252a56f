//! Frame normalization: channel order conversion and aspect-preserving resize.
//!
//! Video inputs deliver packed 24-bit frames in whatever channel order the
//! device produces. Before a frame reaches the display sink it is:
//!
//! 1. Converted to display-native [`Rgb888`] ([`normalize`])
//! 2. Fitted into the channel's target box keeping its aspect ratio ([`aspect_fit`])
//! 3. Resampled to that size with bilinear filtering ([`resize_bilinear`])
//!
//! # Aspect Fit
//!
//! For a source `(w, h)` and box `(W, H)`:
//!
//! ```text
//! w/h > W/H  =>  (W, round(W*h/w))     wider than the box: full width
//! otherwise  =>  (round(H*w/h), H)     taller or equal: full height
//! ```
//!
//! The comparison is done as `w*H > W*h` and the rounding as integer
//! round-half-up division, so results are exact and identical on every
//! target.
//!
//! # Fixed-Point Resampling
//!
//! Sample positions and weights use 8 fractional bits (`x.256`), matching
//! the integer color interpolation used elsewhere in the dashboard. No
//! floating point is involved, which keeps this module usable without `std`.

use alloc::vec::Vec;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::error::ReadError;

// =============================================================================
// Raw Frames
// =============================================================================

/// Channel order of a packed 24-bit raw frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// Blue, green, red (typical camera and decoder output).
    #[default]
    Bgr888,
    /// Red, green, blue (display native).
    Rgb888,
}

impl PixelFormat {
    /// Bytes per pixel for every supported format.
    pub const BYTES_PER_PIXEL: usize = 3;
}

/// One frame as read from a video input, before normalization.
#[derive(Clone, Debug, Default)]
pub struct RawFrame {
    /// Packed pixel bytes, row-major, no padding.
    pub data: Vec<u8>,
    /// Frame dimensions.
    pub size: Size,
    /// Channel order of `data`.
    pub format: PixelFormat,
}

impl RawFrame {
    /// Number of bytes `data` must hold for `size`.
    #[inline]
    pub const fn expected_len(&self) -> usize {
        self.size.width as usize * self.size.height as usize * PixelFormat::BYTES_PER_PIXEL
    }
}

// =============================================================================
// Normalized Frames
// =============================================================================

/// A display-ready frame: RGB pixels already fitted to the target box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Rgb888>,
    size: Size,
}

impl Frame {
    /// Row-major pixels, `size.width * size.height` entries.
    #[inline]
    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Actual frame dimensions (fits within the target box).
    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Replace the contents with `raw`, normalized and fitted to `target`.
    ///
    /// `scratch` holds the full-size RGB conversion and is reused between
    /// calls to avoid per-frame allocation.
    pub fn fill_from(
        &mut self,
        raw: &RawFrame,
        target: Size,
        scratch: &mut Vec<Rgb888>,
    ) -> Result<(), ReadError> {
        normalize(raw, scratch)?;
        let fitted = aspect_fit(raw.size, target);
        resize_bilinear(scratch, raw.size, &mut self.pixels, fitted);
        self.size = fitted;
        Ok(())
    }
}

// =============================================================================
// Color Normalization
// =============================================================================

/// Convert a packed raw frame to display-native RGB pixels.
///
/// Fails with [`ReadError::Truncated`] if `raw.data` is shorter than the
/// frame size requires. Extra trailing bytes are ignored.
pub fn normalize(
    raw: &RawFrame,
    out: &mut Vec<Rgb888>,
) -> Result<(), ReadError> {
    let expected = raw.expected_len();
    if raw.data.len() < expected {
        return Err(ReadError::Truncated {
            expected,
            actual: raw.data.len(),
        });
    }

    out.clear();
    out.reserve(expected / PixelFormat::BYTES_PER_PIXEL);
    let packed = raw.data[..expected].chunks_exact(PixelFormat::BYTES_PER_PIXEL);
    match raw.format {
        PixelFormat::Bgr888 => out.extend(packed.map(|c| Rgb888::new(c[2], c[1], c[0]))),
        PixelFormat::Rgb888 => out.extend(packed.map(|c| Rgb888::new(c[0], c[1], c[2]))),
    }
    Ok(())
}

// =============================================================================
// Aspect Fit
// =============================================================================

/// Largest size inside `target` with the aspect ratio of `source`.
///
/// Degenerate inputs (any zero dimension) produce `Size::zero()`. A computed
/// dimension that rounds to zero is raised to one pixel.
pub fn aspect_fit(
    source: Size,
    target: Size,
) -> Size {
    let (w, h) = (u64::from(source.width), u64::from(source.height));
    let (bw, bh) = (u64::from(target.width), u64::from(target.height));
    if w == 0 || h == 0 || bw == 0 || bh == 0 {
        return Size::zero();
    }

    if w * bh > bw * h {
        Size::new(target.width, div_round(bw * h, w).max(1) as u32)
    } else {
        Size::new(div_round(bh * w, h).max(1) as u32, target.height)
    }
}

/// Integer division rounding halves up.
#[inline]
const fn div_round(
    num: u64,
    den: u64,
) -> u64 {
    (2 * num + den) / (2 * den)
}

// =============================================================================
// Bilinear Resize
// =============================================================================

/// Fractional bits of sample positions.
const FRAC_BITS: u32 = 8;
const FRAC_ONE: u32 = 1 << FRAC_BITS;

/// Source sample for one destination coordinate: lower index, upper index, weight of upper.
#[derive(Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: u32,
}

/// Pixel-center aligned taps mapping `dst_len` positions onto `src_len`.
fn taps(
    src_len: u32,
    dst_len: u32,
) -> Vec<Tap> {
    let last = src_len.saturating_sub(1) as u64;
    (0..u64::from(dst_len))
        .map(|d| {
            // ((d + 0.5) * src / dst - 0.5) in fixed point
            let centered = ((2 * d + 1) * u64::from(src_len) * u64::from(FRAC_ONE)) / (2 * u64::from(dst_len));
            let pos = centered.saturating_sub(u64::from(FRAC_ONE / 2));
            let lo = (pos >> FRAC_BITS).min(last);
            let hi = (lo + 1).min(last);
            let frac = if lo == last { 0 } else { (pos & u64::from(FRAC_ONE - 1)) as u32 };
            Tap {
                lo: lo as usize,
                hi: hi as usize,
                frac,
            }
        })
        .collect()
}

#[inline]
fn lerp_channel(
    a: u8,
    b: u8,
    frac: u32,
) -> u32 {
    u32::from(a) * (FRAC_ONE - frac) + u32::from(b) * frac
}

/// Resample `src` (of `src_size`) into `dst` at `dst_size` with bilinear filtering.
///
/// `dst` is cleared and refilled. Equal sizes copy straight through.
pub fn resize_bilinear(
    src: &[Rgb888],
    src_size: Size,
    dst: &mut Vec<Rgb888>,
    dst_size: Size,
) {
    dst.clear();
    let src_len = src_size.width as usize * src_size.height as usize;
    if dst_size.width == 0 || dst_size.height == 0 || src_len == 0 || src.len() < src_len {
        return;
    }

    if src_size == dst_size {
        dst.extend_from_slice(&src[..src_len]);
        return;
    }

    let xs = taps(src_size.width, dst_size.width);
    let ys = taps(src_size.height, dst_size.height);
    let stride = src_size.width as usize;
    dst.reserve(xs.len() * ys.len());

    for ty in &ys {
        let top = &src[ty.lo * stride..(ty.lo + 1) * stride];
        let bottom = &src[ty.hi * stride..(ty.hi + 1) * stride];
        for tx in &xs {
            let (tl, tr) = (top[tx.lo], top[tx.hi]);
            let (bl, br) = (bottom[tx.lo], bottom[tx.hi]);

            let blend = |tl: u8, tr: u8, bl: u8, br: u8| -> u8 {
                let upper = lerp_channel_wide(lerp_channel(tl, tr, tx.frac), lerp_channel(bl, br, tx.frac), ty.frac);
                // Two 8-bit weights: divide by 2^16 with rounding
                ((upper + (1 << (2 * FRAC_BITS - 1))) >> (2 * FRAC_BITS)) as u8
            };

            dst.push(Rgb888::new(
                blend(tl.r(), tr.r(), bl.r(), br.r()),
                blend(tl.g(), tr.g(), bl.g(), br.g()),
                blend(tl.b(), tr.b(), bl.b(), br.b()),
            ));
        }
    }
}

#[inline]
fn lerp_channel_wide(
    a: u32,
    b: u32,
    frac: u32,
) -> u32 {
    a * (FRAC_ONE - frac) + b * frac
}

// =============================================================================
// Tests
// =============================================================================
