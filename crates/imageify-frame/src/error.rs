use std::collections::TryReserveError;

/// Errors that can occur while building, sizing, packing, or parsing frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload does not fit the 4-byte length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: u64, max: u64 },

    /// The byte count is smaller than the frame header.
    #[error("frame too short ({len} bytes, header needs 4)")]
    TooShort { len: u64 },

    /// The frame length disagrees with the capacity of the pixel grid.
    #[error("frame length {len} does not match {width}x{height} grid capacity ({capacity} bytes)")]
    CapacityMismatch {
        len: usize,
        width: u32,
        height: u32,
        capacity: usize,
    },

    /// A frame being padded is already longer than the grid it must fill.
    #[error("frame of {len} bytes does not fit grid capacity ({capacity} bytes)")]
    FrameExceedsCapacity { len: usize, capacity: usize },

    /// The length field claims more payload bytes than the frame holds.
    #[error("declared payload length {declared} exceeds frame capacity ({available} bytes available)")]
    DeclaredLengthExceedsCapacity { declared: usize, available: usize },

    /// A grid must have at least one pixel.
    #[error("grid has zero dimension ({width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    /// The grid is larger than this platform can address.
    #[error("grid {width}x{height} exceeds addressable memory")]
    GridOverflow { width: u32, height: u32 },

    /// A frame or pixel buffer could not be allocated.
    #[error("failed to allocate {requested} bytes: {source}")]
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
