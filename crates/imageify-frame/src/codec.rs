use bytes::{Buf, BufMut};

use crate::error::{FrameError, Result};
use crate::planner::GridDimensions;

/// Frame header: payload length (4B LE).
pub const HEADER_SIZE: usize = 4;

/// Largest payload the length field can describe.
pub const MAX_PAYLOAD: usize = u32::MAX as usize;

/// The length prefix at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Number of payload bytes that follow the header.
    pub payload_len: u32,
}

impl FrameHeader {
    /// Read the header from the first 4 bytes of a frame.
    pub fn read(frame: &[u8]) -> Result<Self> {
        if frame.len() < HEADER_SIZE {
            return Err(FrameError::TooShort {
                len: frame.len() as u64,
            });
        }
        let mut src = &frame[..HEADER_SIZE];
        Ok(Self {
            payload_len: src.get_u32_le(),
        })
    }

    pub fn write(&self, dst: &mut impl BufMut) {
        dst.put_u32_le(self.payload_len);
    }
}

/// Build an unpadded frame from a payload.
///
/// Frame format:
/// ```text
/// ┌──────────────┬─────────────────┬──────────────────────────┐
/// │ Length       │ Payload          │ Padding (added by caller) │
/// │ (4B LE)      │ (Length bytes)   │ zeros up to w*h*4         │
/// └──────────────┴─────────────────┴──────────────────────────┘
/// ```
pub fn build_frame(payload: &[u8], dst: &mut Vec<u8>) -> Result<()> {
    let payload_len = u32::try_from(payload.len()).map_err(|_| FrameError::PayloadTooLarge {
        size: payload.len() as u64,
        max: MAX_PAYLOAD as u64,
    })?;
    let requested = HEADER_SIZE + payload.len();
    dst.try_reserve_exact(requested)
        .map_err(|source| FrameError::Allocation { requested, source })?;

    FrameHeader { payload_len }.write(dst);
    dst.put_slice(payload);
    Ok(())
}

/// Zero-pad a frame up to exactly `capacity` bytes.
///
/// Fails if the frame is already longer than `capacity`.
pub fn pad_frame(frame: &mut Vec<u8>, capacity: usize) -> Result<()> {
    if frame.len() > capacity {
        return Err(FrameError::FrameExceedsCapacity {
            len: frame.len(),
            capacity,
        });
    }
    let requested = capacity - frame.len();
    frame
        .try_reserve_exact(requested)
        .map_err(|source| FrameError::Allocation { requested, source })?;
    frame.resize(capacity, 0);
    Ok(())
}

/// Extract the payload from a frame taken out of a `width` x `height` grid.
///
/// Trailing padding is ignored. A frame whose declared length runs past the
/// grid is rejected rather than truncated.
pub fn parse_frame(frame: &[u8], width: u32, height: u32) -> Result<&[u8]> {
    let capacity = GridDimensions::new(width, height).checked_capacity()?;
    if frame.len() != capacity {
        return Err(FrameError::CapacityMismatch {
            len: frame.len(),
            width,
            height,
            capacity,
        });
    }

    let header = FrameHeader::read(frame)?;
    let declared = header.payload_len as usize;
    let available = frame.len() - HEADER_SIZE;
    if declared > available {
        return Err(FrameError::DeclaredLengthExceedsCapacity {
            declared,
            available,
        });
    }

    Ok(&frame[HEADER_SIZE..HEADER_SIZE + declared])
}
