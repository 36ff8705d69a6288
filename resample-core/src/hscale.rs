// SPDX-License-Identifier: MIT
//! # Horizontal (X-Axis) Scaling Pass
//!
//! This module implements the first of the two resampling passes: decoding a
//! raw byte row into gamma-linear, premultiplied floats, then resampling that
//! row to the output width.
//!
//! ## Architecture Overview
//!
//! [`decode_row`] linearizes sRGB color channels through
//! [`crate::gamma::GammaTables`] and premultiplies color channels by alpha for
//! colorspaces that carry it, so interpolation near transparent edges does not
//! fringe. [`scale_row`] then walks [`crate::coeffs::CoeffPlan`]'s precomputed
//! per-output windows and accumulates a weighted sum per channel — the output
//! feeds directly into the vertical pass's ring buffer in
//! [`crate::scaler::Scaler::feed`].
//!
//! Grounded in `original_source/resample.c`'s `sample_generic`/`sample_rgba`/
//! `sample_rgbx` (the per-colorspace x-scale loops), restructured around
//! [`crate::coeffs::CoeffPlan`]'s precomputed windows instead of the C
//! original's chunked `xscaler` state machine.

use crate::colorspace::ColorSpace;
use crate::coeffs::CoeffPlan;
use crate::gamma::GammaTables;

/// Decode one raw row (`width * colorspace.components()` bytes) into linear,
/// premultiplied floats (`width * colorspace.components()` floats, same
/// layout). Color channels pass through the sRGB-to-linear table; alpha, grey,
/// and CMYK channels are scaled directly (spec.md §3 invariant 6). Channels
/// that carry alpha are premultiplied into the accompanying color channels so
/// interpolation near transparent edges does not fringe.
pub fn decode_row(colorspace: ColorSpace, gamma: &GammaTables, raw: &[u8], width: u32) -> Vec<f32> {
    let c = colorspace.components();
    let cc = colorspace.color_components();
    debug_assert_eq!(raw.len(), width as usize * c);

    let mut out = vec![0f32; raw.len()];
    for px in 0..width as usize {
        let base = px * c;
        let alpha = if colorspace.has_alpha() {
            raw[base + c - 1] as f32 / 255.0
        } else {
            1.0
        };
        for ch in 0..c {
            if colorspace == ColorSpace::Rgbx && ch == 3 {
                out[base + ch] = 0.0; // filler byte, never read back
                continue;
            }
            let mut v = if ch < cc {
                gamma.srgb_to_linear(raw[base + ch])
            } else {
                raw[base + ch] as f32 / 255.0
            };
            if colorspace.has_alpha() && ch < c - 1 {
                v *= alpha;
            }
            out[base + ch] = v;
        }
    }
    out
}

/// Resample one decoded row from `in_width` to `plan.output_len()` samples,
/// per channel, using the planned coefficient windows.
pub fn scale_row(plan: &CoeffPlan, channels: usize, row: &[f32]) -> Vec<f32> {
    let out_width = plan.output_len();
    let mut out = vec![0f32; out_width * channels];
    for p in 0..out_width {
        let window = plan.window(p);
        let out_base = p * channels;
        for &(src, k) in window {
            let in_base = src as usize * channels;
            for ch in 0..channels {
                out[out_base + ch] += row[in_base + ch] * k;
            }
        }
    }
    out
}
