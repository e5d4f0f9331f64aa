//! Dynamic range of a pixel grid.

use ndarray::Array2;
use serde_derive::*;

/// Minimum and maximum sample values of a grid, in host
/// byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Extrema {
    pub min: u16,
    pub max: u16,
}

impl Extrema {
    /// Width of the range. Zero for a flat image.
    pub fn range(&self) -> u16 {
        self.max.saturating_sub(self.min)
    }

    /// Whether every sample had the same value.
    pub fn is_flat(&self) -> bool {
        self.range() == 0
    }
}

/// Single pass over all samples.
///
/// Starts from `min = u16::MAX` and `max = 0`, so an empty
/// grid reports `min > max`; grids built from a
/// [`ContainerLayout`](crate::ContainerLayout) are never
/// empty.
pub fn scan(pixels: &Array2<u16>) -> Extrema {
    pixels.iter().fold(
        Extrema {
            min: u16::MAX,
            max: 0,
        },
        |acc, &val| Extrema {
            min: acc.min.min(val),
            max: acc.max.max(val),
        },
    )
}
