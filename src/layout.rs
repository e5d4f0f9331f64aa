//! Fixed layout of an IS2 container.

use crate::error::{Is2Error, Result};

/// Length of the opaque header in bytes.
pub const HEADER_LEN: usize = 366;

/// Width of the pixel grid in samples.
pub const WIDTH: usize = 160;

/// Height of the pixel grid in samples.
pub const HEIGHT: usize = 120;

/// Size of a single sample on the wire.
pub const SAMPLE_BYTES: usize = 2;

/// Shape of a container: header length followed by a
/// `width` x `height` grid of big-endian `u16` samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerLayout {
    header_len: usize,
    width: usize,
    height: usize,
}

impl ContainerLayout {
    /// The only layout observed in the wild.
    pub const IS2: ContainerLayout = ContainerLayout {
        header_len: HEADER_LEN,
        width: WIDTH,
        height: HEIGHT,
    };

    pub fn new(header_len: usize, width: usize, height: usize) -> Result<Self> {
        if header_len == 0 || width == 0 || height == 0 {
            return Err(Is2Error::Layout(format!(
                "header length and dimensions must be positive: header_len = {}, {}x{}",
                header_len, width, height
            )));
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(SAMPLE_BYTES))
            .and_then(|n| n.checked_add(header_len))
            .ok_or_else(|| {
                Is2Error::Layout(format!("layout too large: {}x{}", width, height))
            })?;

        Ok(ContainerLayout {
            header_len,
            width,
            height,
        })
    }

    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, the shape of the pixel array.
    pub fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Size of the pixel payload on the wire.
    pub fn pixel_bytes(&self) -> usize {
        self.pixel_count() * SAMPLE_BYTES
    }

    /// Minimum length of a well-formed container.
    pub fn total_len(&self) -> usize {
        self.header_len + self.pixel_bytes()
    }
}

impl Default for ContainerLayout {
    fn default() -> Self {
        Self::IS2
    }
}
