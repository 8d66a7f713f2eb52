//! Store any file losslessly inside an RGBA PNG image.
//!
//! # Crate Structure
//!
//! - [`frame`]: length-prefixed framing, grid planning and pixel packing
//! - [`raster`]: the raster codec trait and its PNG implementation
//! - [`pipeline`]: file-to-image and image-to-file runs with error taxonomy
//!
//! ```
//! use imageify::pipeline::{decode_from_reader, encode_to_writer, PipelineConfig};
//! use imageify::raster::PngCodec;
//!
//! let codec = PngCodec::new();
//! let config = PipelineConfig::default();
//!
//! let mut image = Vec::new();
//! let layout = encode_to_writer(b"hello", &codec, &config, &mut image).unwrap();
//! assert_eq!((layout.dimensions.width, layout.dimensions.height), (2, 2));
//!
//! let decoded = decode_from_reader(&codec, &config, &mut image.as_slice()).unwrap();
//! assert_eq!(decoded.payload, b"hello");
//! ```

/// Re-export frame types.
pub mod frame {
    pub use imageify_frame::*;
}

/// Re-export raster codec types.
pub mod raster {
    pub use imageify_raster::*;
}

/// Re-export pipeline types.
pub mod pipeline {
    pub use imageify_pipeline::*;
}
