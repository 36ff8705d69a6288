// SPDX-License-Identifier: MIT
//! # Aspect-Ratio-Preserving Bounding-Box Fit
//!
//! Grounded in `original_source/resample.c`'s `fix_ratio()`: given an input
//! size and a bounding box, scale down the larger axis' ratio to find the
//! largest output size that preserves the input aspect ratio and fits inside
//! the box. This is a pure dimension calculation — it does not touch pixels —
//! so CLI/library callers run it before constructing a [`crate::scaler::Scaler`].

use crate::error::ScaleError;

/// Compute the largest `(out_w, out_h)` that preserves `in_w / in_h` and fits
/// within `box_w x box_h` (spec.md invariant 6: never exceeds either box
/// dimension; at least one matches it exactly unless rounding forces both
/// down by the same fraction of a pixel).
pub fn fit_ratio(in_w: u32, in_h: u32, box_w: u32, box_h: u32) -> Result<(u32, u32), ScaleError> {
    if in_w == 0 || in_h == 0 || box_w == 0 || box_h == 0 {
        return Err(ScaleError::BadArg);
    }

    let w_ratio = box_w as f64 / in_w as f64;
    let h_ratio = box_h as f64 / in_h as f64;
    let ratio = w_ratio.min(h_ratio);

    let out_w = (in_w as f64 * ratio).round();
    let out_h = (in_h as f64 * ratio).round();

    if !out_w.is_finite() || !out_h.is_finite() || out_w > u32::MAX as f64 || out_h > u32::MAX as f64 {
        return Err(ScaleError::Overflow);
    }

    Ok((out_w.max(1.0) as u32, out_h.max(1.0) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_into_square_box_is_letterboxed_by_width() {
        let (w, h) = fit_ratio(1000, 500, 200, 200).unwrap();
        assert_eq!(w, 200);
        assert_eq!(h, 100);
    }

    #[test]
    fn portrait_into_square_box_is_letterboxed_by_height() {
        let (w, h) = fit_ratio(500, 1000, 200, 200).unwrap();
        assert_eq!(w, 100);
        assert_eq!(h, 200);
    }

    #[test]
    fn never_exceeds_the_box_in_either_dimension() {
        for &(iw, ih, bw, bh) in &[(37u32, 511u32, 64u32, 64u32), (1, 1, 10, 3), (999, 3, 50, 50)] {
            let (w, h) = fit_ratio(iw, ih, bw, bh).unwrap();
            assert!(w <= bw);
            assert!(h <= bh);
            assert!(w >= 1 && h >= 1);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(fit_ratio(0, 10, 10, 10), Err(ScaleError::BadArg));
        assert_eq!(fit_ratio(10, 10, 0, 10), Err(ScaleError::BadArg));
    }

    #[test]
    fn upscaling_a_tiny_image_into_a_big_box_preserves_ratio() {
        let (w, h) = fit_ratio(1, 2, 100, 100).unwrap();
        assert_eq!(w, 50);
        assert_eq!(h, 100);
    }
}
