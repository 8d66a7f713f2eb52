/// Errors that can occur while writing or loading a raster image.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The input does not start with the PNG signature.
    #[error("not a PNG image (signature mismatch)")]
    NotPng,

    /// The image is a PNG, but not RGBA with 8 bits per channel.
    #[error("unsupported raster layout: color={color:?} depth={depth:?} (expected RGBA, 8-bit)")]
    UnsupportedLayout {
        color: png::ColorType,
        depth: png::BitDepth,
    },

    /// The PNG encoder failed.
    #[error("png encode failed: {0}")]
    Encode(#[source] png::EncodingError),

    /// The PNG data is structurally invalid or truncated.
    #[error("png decode failed: {0}")]
    Decode(#[source] png::DecodingError),

    /// An I/O error occurred outside the PNG encoder/decoder.
    #[error("raster I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoded pixels do not form a valid grid.
    #[error("pixel grid error: {0}")]
    Grid(#[from] imageify_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
