use crate::error::{FrameError, Result};
use crate::grid::{Pixel, RasterGrid};
use crate::planner::{GridDimensions, CHANNELS_PER_PIXEL};

/// Lay a padded frame into a `width` x `height` grid, four bytes per pixel.
///
/// The frame must be exactly `width * height * 4` bytes; padding is the
/// caller's job.
pub fn pack(frame: &[u8], width: u32, height: u32) -> Result<RasterGrid> {
    let capacity = GridDimensions::new(width, height).checked_capacity()?;
    if frame.len() != capacity {
        return Err(FrameError::CapacityMismatch {
            len: frame.len(),
            width,
            height,
            capacity,
        });
    }

    let count = capacity / CHANNELS_PER_PIXEL;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|source| FrameError::Allocation {
            requested: capacity,
            source,
        })?;
    pixels.extend(
        frame
            .chunks_exact(CHANNELS_PER_PIXEL)
            .map(|c| Pixel::from_channels([c[0], c[1], c[2], c[3]])),
    );

    RasterGrid::from_pixels(width, height, pixels)
}

/// Flatten a grid back into frame bytes, row-major, RGBA order.
pub fn unpack(grid: &RasterGrid) -> Result<Vec<u8>> {
    let requested = grid.capacity();
    let mut frame = Vec::new();
    frame
        .try_reserve_exact(requested)
        .map_err(|source| FrameError::Allocation { requested, source })?;
    for pixel in grid.pixels() {
        frame.extend_from_slice(&pixel.channels());
    }
    Ok(frame)
}
