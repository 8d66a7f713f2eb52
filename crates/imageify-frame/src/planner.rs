use tracing::trace;

use crate::codec::{HEADER_SIZE, MAX_PAYLOAD};
use crate::error::{FrameError, Result};

/// Frame bytes stored per pixel: red, green, blue, alpha.
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Capacity in bytes of the grid planned for the largest representable payload.
pub const MAX_FRAME_CAPACITY: u64 = 4_295_098_368;

/// Width and height of a pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the grid.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of frame bytes the grid holds, or `None` if that does not fit in `usize`.
    pub fn capacity(&self) -> Option<usize> {
        usize::try_from(self.pixel_count())
            .ok()?
            .checked_mul(CHANNELS_PER_PIXEL)
    }

    pub(crate) fn checked_capacity(&self) -> Result<usize> {
        self.capacity().ok_or(FrameError::GridOverflow {
            width: self.width,
            height: self.height,
        })
    }
}

/// Plan the smallest near-square grid able to hold `total_bytes` frame bytes.
///
/// `total_bytes` includes the 4-byte header. The pixel count is rounded up to
/// an even number, the width is the ceiling square root of that count, and the
/// height is whatever remains to cover it.
///
/// ```
/// use imageify_frame::{plan, GridDimensions};
///
/// // An empty payload still gets a real grid.
/// assert_eq!(plan(4).unwrap(), GridDimensions::new(2, 1));
/// assert_eq!(plan(100).unwrap(), GridDimensions::new(6, 5));
/// ```
pub fn plan(total_bytes: u64) -> Result<GridDimensions> {
    if total_bytes < HEADER_SIZE as u64 {
        return Err(FrameError::TooShort { len: total_bytes });
    }
    let max_total = HEADER_SIZE as u64 + MAX_PAYLOAD as u64;
    if total_bytes > max_total {
        return Err(FrameError::PayloadTooLarge {
            size: total_bytes - HEADER_SIZE as u64,
            max: MAX_PAYLOAD as u64,
        });
    }

    let mut cells = total_bytes.div_ceil(CHANNELS_PER_PIXEL as u64);
    cells += cells % 2;

    let mut rows = cells.isqrt();
    if rows * rows < cells {
        rows += 1;
    }
    let cols = cells.div_ceil(rows);

    trace!(total_bytes, cells, rows, cols, "planned grid");

    // Bounded by the payload limit above: rows, cols <= 32769.
    Ok(GridDimensions::new(rows as u32, cols as u32))
}

/// How a payload sits inside a planned grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub dimensions: GridDimensions,
    pub payload_len: usize,
    pub capacity: usize,
}

impl FrameLayout {
    /// Plan the layout for encoding a payload of `payload_len` bytes.
    pub fn for_payload(payload_len: usize) -> Result<Self> {
        if payload_len > MAX_PAYLOAD {
            return Err(FrameError::PayloadTooLarge {
                size: payload_len as u64,
                max: MAX_PAYLOAD as u64,
            });
        }
        let dimensions = plan(HEADER_SIZE as u64 + payload_len as u64)?;
        Self::new(dimensions, payload_len)
    }

    /// Describe a payload found inside a grid of known dimensions.
    pub fn new(dimensions: GridDimensions, payload_len: usize) -> Result<Self> {
        let capacity = dimensions.checked_capacity()?;
        let available = capacity.saturating_sub(HEADER_SIZE);
        if capacity < HEADER_SIZE || payload_len > available {
            return Err(FrameError::DeclaredLengthExceedsCapacity {
                declared: payload_len,
                available,
            });
        }
        Ok(Self {
            dimensions,
            payload_len,
            capacity,
        })
    }

    /// Header plus payload, before padding.
    pub fn frame_len(&self) -> usize {
        HEADER_SIZE + self.payload_len
    }

    /// Zero bytes appended after the payload.
    pub fn padding(&self) -> usize {
        self.capacity - self.frame_len()
    }
}
