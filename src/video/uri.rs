//! Source identifier parsing.
//!
//! ```text
//! pattern:<name>@<W>x<H>     synthetic camera
//! raw:<path>@<W>x<H>         file of packed BGR24 frames
//! ```
//!
//! The geometry suffix is split at the last `@`, so paths may contain `@`.

use std::path::PathBuf;

use car_control_common::OpenFailure;
use embedded_graphics::geometry::Size;

/// Largest accepted frame edge. Keeps a typo from allocating gigabytes.
pub const MAX_EDGE: u32 = 4096;

/// Parsed source identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceUri {
    Pattern { name: String, size: Size },
    Raw { path: PathBuf, size: Size },
}

/// Why an identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    #[error("unknown scheme `{0}`")]
    UnknownScheme(String),

    #[error("missing `@WxH` geometry")]
    MissingGeometry,

    #[error("bad geometry `{0}`")]
    BadGeometry(String),

    #[error("empty source name")]
    EmptyName,

    #[error("frame size {0}x{1} out of range")]
    OutOfRange(u32, u32),
}

impl From<UriError> for OpenFailure {
    fn from(err: UriError) -> Self {
        match err {
            UriError::UnknownScheme(_) => Self::Unsupported,
            UriError::OutOfRange(w, h) => Self::InvalidGeometry(w, h),
            other => Self::Malformed(other.to_string()),
        }
    }
}

impl SourceUri {
    pub fn parse(source_id: &str) -> Result<Self, UriError> {
        let (scheme, rest) = source_id
            .split_once(':')
            .ok_or_else(|| UriError::UnknownScheme(source_id.into()))?;
        let (body, geometry) = rest.rsplit_once('@').ok_or(UriError::MissingGeometry)?;
        if body.is_empty() {
            return Err(UriError::EmptyName);
        }
        let size = parse_geometry(geometry)?;

        match scheme {
            "pattern" => Ok(Self::Pattern {
                name: body.into(),
                size,
            }),
            "raw" => Ok(Self::Raw {
                path: PathBuf::from(body),
                size,
            }),
            other => Err(UriError::UnknownScheme(other.into())),
        }
    }
}

fn parse_geometry(geometry: &str) -> Result<Size, UriError> {
    let bad = || UriError::BadGeometry(geometry.into());
    let (w, h) = geometry.split_once(['x', 'X']).ok_or_else(bad)?;
    let width: u32 = w.trim().parse().map_err(|_| bad())?;
    let height: u32 = h.trim().parse().map_err(|_| bad())?;

    if width == 0 || height == 0 || width > MAX_EDGE || height > MAX_EDGE {
        return Err(UriError::OutOfRange(width, height));
    }
    Ok(Size::new(width, height))
}
