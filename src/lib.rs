//! UPC-A linear barcode encoder.
//!
//! Validates a 12-digit identifier, assembles the 113-module bar sequence
//! mandated by the GS1 UPC-A symbology (quiet zones, guards and the
//! table-driven L/R digit codes) and rasterizes it to an in-memory PNG.
//!
//! ```
//! use upca::UpcA;
//!
//! let upc: UpcA = "036000291452".parse()?;
//! let png = upc.to_png(2)?; // 226x226 pixels, 2 per module
//! # assert!(!png.is_empty());
//! # Ok::<(), upca::UpcError>(())
//! ```
//!
//! The bar sequence itself is available as an iterator for callers that
//! bring their own raster:
//!
//! ```
//! # let upc: upca::UpcA = "036000291452".parse().unwrap();
//! let modules: Vec<bool> = upc.bits().collect();
//! assert_eq!(modules.len(), upca::SYMBOL_WIDTH);
//! ```
//!
//! With the `embedded-graphics` feature (on by default), a configured
//! render is also [`Drawable`](embedded_graphics::Drawable) onto any
//! binary-color target.

mod bits;
#[cfg(feature = "embedded-graphics")]
mod eg;
mod error;
mod render;
mod tables;
mod upc;

pub use bits::BitRun;
pub use error::UpcError;
pub use tables::{CENTER_GUARD, L_CODES, QUIET_ZONE, R_CODES, SIDE_GUARD, SYMBOL_WIDTH};
pub use upc::{left_code, right_code, Symbol, UpcA, UpcARender};
