use crate::error::{FrameError, Result};
use crate::planner::GridDimensions;

/// One RGBA pixel. Each channel carries one frame byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build a pixel from channels in red, green, blue, alpha order.
    pub const fn from_channels(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    /// Channels in red, green, blue, alpha order.
    pub const fn channels(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// A row-major `width` x `height` grid of pixels in one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGrid {
    dimensions: GridDimensions,
    pixels: Vec<Pixel>,
}

impl RasterGrid {
    /// Create a grid with every channel set to zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let count = checked_pixel_count(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|source| FrameError::Allocation {
                requested: count * std::mem::size_of::<Pixel>(),
                source,
            })?;
        pixels.resize(count, Pixel::default());
        Ok(Self {
            dimensions: GridDimensions::new(width, height),
            pixels,
        })
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let count = checked_pixel_count(width, height)?;
        if pixels.len() != count {
            return Err(FrameError::CapacityMismatch {
                len: pixels.len() * 4,
                width,
                height,
                capacity: count * 4,
            });
        }
        Ok(Self {
            dimensions: GridDimensions::new(width, height),
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Number of frame bytes the grid holds.
    pub fn capacity(&self) -> usize {
        self.pixels.len() * 4
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The pixel at `row`, `col`, or `None` outside the grid.
    pub fn pixel_at(&self, row: u32, col: u32) -> Option<&Pixel> {
        let index = self.index_of(row, col)?;
        self.pixels.get(index)
    }

    /// Mutable access to the pixel at `row`, `col`.
    pub fn pixel_at_mut(&mut self, row: u32, col: u32) -> Option<&mut Pixel> {
        let index = self.index_of(row, col)?;
        self.pixels.get_mut(index)
    }

    fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.dimensions.height || col >= self.dimensions.width {
            return None;
        }
        Some(row as usize * self.dimensions.width as usize + col as usize)
    }
}

fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(FrameError::EmptyGrid { width, height });
    }
    let dimensions = GridDimensions::new(width, height);
    dimensions.checked_capacity()?;
    Ok(dimensions.pixel_count() as usize)
}
