//! Lossless raster codec boundary.
//!
//! Persists and loads [`RasterGrid`](imageify_frame::RasterGrid) values as
//! concrete image files. The only container shipped is PNG (RGBA, 8 bits per
//! channel), which round-trips every channel value exactly.

pub mod codec;
pub mod error;
pub mod png_codec;

pub use codec::RasterCodec;
pub use error::{RasterError, Result};
pub use png_codec::{CompressionLevel, PngCodec, PngConfig, PNG_SIGNATURE};
