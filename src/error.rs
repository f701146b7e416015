//! Error types for UPC-A encoding and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpcError {
    /// The input is not exactly twelve decimal digits. Carries the
    /// rejected input for diagnostics.
    #[error("invalid UPC {0:?}: expected exactly 12 decimal digits")]
    InvalidUpc(String),

    /// A digit outside 0-9 reached a table lookup. Unreachable for
    /// digits taken from a validated [`UpcA`](crate::UpcA).
    #[error("digit {0} is out of range 0-9")]
    DigitOutOfRange(u8),

    /// PNG encoding failure, propagated from the `image` crate.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
