use std::io::{self, Cursor, Read, Write};

use imageify_frame::{pack, unpack, FrameError, RasterGrid, MAX_FRAME_CAPACITY};
use png::{AdaptiveFilterType, BitDepth, ColorType, Compression, Transformations};
use tracing::debug;

use crate::codec::RasterCodec;
use crate::error::{RasterError, Result};

/// The 8 bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// zlib effort used when writing PNG data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Compression::Fast,
            CompressionLevel::Default => Compression::Default,
            CompressionLevel::Best => Compression::Best,
        }
    }
}

/// Configuration for the PNG codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngConfig {
    /// Compression effort. Default: `CompressionLevel::Default`.
    pub compression: CompressionLevel,
    /// Pick a scanline filter per row. Default: true.
    pub adaptive_filter: bool,
    /// Largest decoded image accepted, in bytes. Default: the largest frame imageify writes.
    pub max_decoded_bytes: usize,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: CompressionLevel::Default,
            adaptive_filter: true,
            max_decoded_bytes: usize::try_from(MAX_FRAME_CAPACITY).unwrap_or(usize::MAX),
        }
    }
}

/// RGBA, 8-bit, non-interlaced PNG.
#[derive(Debug, Clone, Default)]
pub struct PngCodec {
    config: PngConfig,
}

impl PngCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PngConfig) -> Self {
        Self { config }
    }
}

impl RasterCodec for PngCodec {
    fn name(&self) -> &'static str {
        "png"
    }

    fn encode(&self, grid: &RasterGrid, dst: &mut dyn Write) -> Result<()> {
        let data = unpack(grid)?;

        let mut encoder = png::Encoder::new(dst, grid.width(), grid.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_compression(self.config.compression.into());
        encoder.set_adaptive_filter(if self.config.adaptive_filter {
            AdaptiveFilterType::Adaptive
        } else {
            AdaptiveFilterType::NonAdaptive
        });

        let mut writer = encoder.write_header().map_err(RasterError::Encode)?;
        writer
            .write_image_data(&data)
            .map_err(RasterError::Encode)?;
        writer.finish().map_err(RasterError::Encode)?;

        debug!(
            width = grid.width(),
            height = grid.height(),
            bytes = data.len(),
            "wrote png"
        );
        Ok(())
    }

    fn decode(&self, src: &mut dyn Read) -> Result<RasterGrid> {
        let mut signature = [0u8; 8];
        match src.read_exact(&mut signature) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(RasterError::NotPng)
            }
            Err(err) => return Err(RasterError::Io(err)),
        }
        if signature != PNG_SIGNATURE {
            return Err(RasterError::NotPng);
        }

        let mut limits = png::Limits::default();
        limits.bytes = self.config.max_decoded_bytes;
        let mut decoder = png::Decoder::new_with_limits(Cursor::new(signature).chain(src), limits);
        decoder.set_transformations(Transformations::IDENTITY);

        let mut reader = decoder.read_info().map_err(RasterError::Decode)?;
        let (color, depth) = reader.output_color_type();
        if color != ColorType::Rgba || depth != BitDepth::Eight {
            return Err(RasterError::UnsupportedLayout { color, depth });
        }

        let size = reader.output_buffer_size();
        let mut buf = Vec::new();
        buf.try_reserve_exact(size)
            .map_err(|source| FrameError::Allocation {
                requested: size,
                source,
            })?;
        buf.resize(size, 0);

        let info = reader.next_frame(&mut buf).map_err(RasterError::Decode)?;
        buf.truncate(info.buffer_size());

        debug!(
            width = info.width,
            height = info.height,
            bytes = buf.len(),
            "read png"
        );
        Ok(pack(&buf, info.width, info.height)?)
    }
}
