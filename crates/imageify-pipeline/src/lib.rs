//! Encode and decode pipelines for imageify.
//!
//! Encoding wraps a payload in a length-prefixed frame, plans a near-square
//! grid for it, pads the frame to fill the grid, packs it into pixels and
//! hands the grid to a [`RasterCodec`](imageify_raster::RasterCodec). Decoding
//! runs the same states backwards and trusts only the length header to find
//! where the payload ends.
//!
//! The `*_file` entry points validate paths up front and never leave a
//! partial output behind when a run fails.

mod config;
mod decode;
mod encode;
mod error;
mod report;
mod sink;
mod validate;

#[cfg(test)]
mod testutil;

pub use config::PipelineConfig;
pub use decode::{decode_file, decode_from_reader, DecodeOutcome, Decoded};
pub use encode::{encode_file, encode_grid, encode_to_writer, Encoded};
pub use error::{ErrorKind, PipelineError, Result, Stage};
pub use report::{Direction, Report};
pub use sink::OutputFile;
pub use validate::{check_readable, check_writable};
