//! Length-prefixed framing and RGBA pixel packing.
//!
//! This is the core of imageify. A payload is turned into a frame:
//! - A 4-byte little-endian payload length
//! - The payload bytes
//! - Zero padding up to the capacity of a near-square pixel grid
//!
//! The frame is then laid into a row-major grid of 4-channel pixels, one
//! frame byte per channel. Decoding walks the same steps in reverse and
//! rejects frames whose declared length does not fit the grid.

pub mod codec;
pub mod error;
pub mod grid;
pub mod pack;
pub mod planner;

pub use codec::{build_frame, pad_frame, parse_frame, FrameHeader, HEADER_SIZE, MAX_PAYLOAD};
pub use error::{FrameError, Result};
pub use grid::{Pixel, RasterGrid};
pub use pack::{pack, unpack};
pub use planner::{
    plan, FrameLayout, GridDimensions, CHANNELS_PER_PIXEL, MAX_FRAME_CAPACITY,
};
