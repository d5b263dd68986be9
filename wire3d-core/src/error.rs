/// Errors raised while building scenes
use thiserror::Error;

/// Error type for shape, viewport and preset construction.
///
/// Nothing in the per-frame pipeline can fail; these are all raised once,
/// at startup, when parameters are turned into geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{what} needs at least {min} segments, got {got}")]
    TooFewSegments {
        what: &'static str,
        min: usize,
        got: usize,
    },

    #[error("sphere needs at least one latitude step")]
    TooFewRings,

    #[error("{what} must be a positive finite number, got {value}")]
    InvalidDimension { what: &'static str, value: f64 },

    #[error("edge {index} references point {point}, but the shape only has {len} points")]
    EdgeOutOfRange {
        index: usize,
        point: usize,
        len: usize,
    },

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: u16, height: u16 },

    #[error("unknown shape `{0}` (expected coin, cube or sphere)")]
    UnknownShape(String),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn positive(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDimension { what, value })
    }
}
