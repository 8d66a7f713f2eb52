use std::io::{Read, Write};

use imageify_frame::RasterGrid;

use crate::error::Result;

/// Writes and loads pixel grids in a concrete, lossless image format.
///
/// Implementations must return exactly the channel values they were given,
/// with the same width and height.
pub trait RasterCodec {
    /// Short format name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Write `grid` to `dst`.
    fn encode(&self, grid: &RasterGrid, dst: &mut dyn Write) -> Result<()>;

    /// Load a grid from `src`, taking width and height from the image itself.
    fn decode(&self, src: &mut dyn Read) -> Result<RasterGrid>;
}
