//! Stretch samples to the full 16-bit range.

use ndarray::Array2;
use tracing::{debug, warn};

use crate::extrema::Extrema;

const FULL_SCALE: u64 = u16::MAX as u64;

/// Map `range.min` to `0` and `range.max` to `65535`,
/// linearly in between.
///
/// Values are rounded to the nearest integer (halves round
/// up) and clamped to `[0, 65535]`; samples outside `range`
/// saturate at either end. A flat range (`min == max`)
/// yields an all-zero grid.
///
/// The grid is consumed and its storage reused for the
/// result.
pub fn normalize(mut pixels: Array2<u16>, range: Extrema) -> Array2<u16> {
    if range.is_flat() {
        warn!(value = range.min, "flat image, normalizing to zero");
        pixels.fill(0);
        return pixels;
    }

    debug!(min = range.min, max = range.max, "normalizing");
    pixels.mapv_inplace(|val| stretch(val, range));
    pixels
}

/// Stretch a single sample. `range` must not be flat.
#[inline]
pub fn stretch(val: u16, range: Extrema) -> u16 {
    let span = range.range() as u64;
    let offset = val.saturating_sub(range.min) as u64;
    let scaled = (offset * FULL_SCALE + span / 2) / span;
    scaled.min(FULL_SCALE) as u16
}

#[cfg(test)]
mod tests {
    use ndarray::{arr2, Array2};

    use super::*;
    use crate::extrema::scan;

    #[test]
    fn three_samples() {
        let pixels = arr2(&[[0x0010u16, 0x00f0, 0x0080]]);
        let range = scan(&pixels);
        let out = normalize(pixels, range);

        // (0x80 - 0x10) * 65535 / (0xf0 - 0x10) = 32767.5
        assert_eq!(out, arr2(&[[0x0000u16, 0xffff, 32768]]));
    }

    #[test]
    fn extrema_map_to_ends() {
        let pixels = Array2::from_shape_fn((120, 160), |(r, c)| (1000 + r * 13 + c * 3) as u16);
        let range = scan(&pixels);
        let out = normalize(pixels.clone(), range);

        for (src, dst) in pixels.iter().zip(out.iter()) {
            if *src == range.min {
                assert_eq!(*dst, 0);
            }
            if *src == range.max {
                assert_eq!(*dst, u16::MAX);
            }
        }
        assert_eq!(scan(&out), Extrema { min: 0, max: u16::MAX });
    }

    #[test]
    fn preserves_order() {
        let pixels = arr2(&[[5u16, 9, 7, 100, 6, 5]]);
        let range = scan(&pixels);
        let out = normalize(pixels, range);
        assert!(out[(0, 0)] < out[(0, 4)]);
        assert!(out[(0, 4)] < out[(0, 2)]);
        assert!(out[(0, 2)] < out[(0, 1)]);
        assert!(out[(0, 1)] < out[(0, 3)]);
        assert_eq!(out[(0, 0)], out[(0, 5)]);
    }

    #[test]
    fn flat_image_is_zeroed() {
        let pixels = Array2::from_elem((120, 160), 0x1234u16);
        let range = scan(&pixels);
        let out = normalize(pixels, range);
        assert_eq!(out.dim(), (120, 160));
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        let pixels = Array2::from_shape_fn((12, 16), |(r, c)| (r * 977 + c * 31 + 40) as u16);
        let once = normalize(pixels.clone(), scan(&pixels));
        let range = scan(&once);
        assert_eq!(range, Extrema { min: 0, max: u16::MAX });

        let twice = normalize(once.clone(), range);
        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_range_samples_saturate() {
        let range = Extrema { min: 100, max: 200 };
        assert_eq!(stretch(50, range), 0);
        assert_eq!(stretch(300, range), u16::MAX);
        assert_eq!(stretch(150, range), 32768);
    }

    #[test]
    fn full_input_range_is_identity() {
        let range = Extrema { min: 0, max: u16::MAX };
        for &v in &[0u16, 1, 2, 255, 32767, 32768, 65534, 65535] {
            assert_eq!(stretch(v, range), v);
        }
    }
}
