// SPDX-License-Identifier: MIT
//! # Vertical (Y-Axis) Scaling Pass
//!
//! This module implements the second of the two resampling passes: weighted
//! summation of already horizontally-scaled rows held in the
//! [`crate::ring_buffer::RingBuffer`], followed by un-premultiplication and
//! gamma re-encoding back to sRGB bytes.
//!
//! ## Architecture Overview
//!
//! [`scale_column`] reads [`crate::coeffs::CoeffPlan::window`] for the output
//! row being produced and walks straight into the ring buffer by absolute row
//! index — no copying, no re-derivation of coefficients. [`encode_row`] then
//! turns the resulting linear, premultiplied floats back into wire bytes:
//! alpha-bearing color channels are divided back out of premultiplied form
//! (guarded against near-zero alpha) before the sRGB gamma curve is reapplied.
//!
//! Grounded in `original_source/resample.c`'s
//! `strip_scale_{g,rgb,rgbx,rgba,cmyk}` family — one function per colorspace in
//! the C original, unified here behind [`ColorSpace`] dispatch since the only
//! per-colorspace difference is which channels are gamma-encoded and which
//! carry alpha.
//!
//! ## Alpha Handling
//!
//! - Un-premultiplication divides each premultiplied color channel by alpha,
//!   clamped to `[0, 1]`.
//! - When alpha is at or below a small epsilon, the division is skipped
//!   entirely and the channel is written as `0` rather than dividing by zero.

use crate::colorspace::ColorSpace;
use crate::coeffs::CoeffPlan;
use crate::gamma::GammaTables;
use crate::ring_buffer::RingBuffer;

/// Produce one output row (linear, premultiplied floats) by weighted-summing
/// the rows in `rb` named by `plan.window(out_pos)`. `row_len` is
/// `out_width * colorspace.components()`.
pub fn scale_column(plan: &CoeffPlan, row_len: usize, rb: &RingBuffer, out_pos: usize) -> Vec<f32> {
    let mut out = vec![0f32; row_len];
    for &(src, k) in plan.window(out_pos) {
        let row = rb.get(src as u64);
        for (o, &v) in out.iter_mut().zip(row.iter()) {
            *o += v * k;
        }
    }
    out
}

/// Un-premultiply and gamma-encode one linear float row back to bytes
/// (spec.md §4.5's per-colorspace output table).
pub fn encode_row(colorspace: ColorSpace, gamma: &GammaTables, row: &[f32], width: u32) -> Vec<u8> {
    let c = colorspace.components();
    let cc = colorspace.color_components();
    debug_assert_eq!(row.len(), width as usize * c);

    let mut out = vec![0u8; row.len()];
    for px in 0..width as usize {
        let base = px * c;
        let alpha = if colorspace.has_alpha() {
            row[base + c - 1].clamp(0.0, 1.0)
        } else {
            1.0
        };
        for ch in 0..c {
            if colorspace == ColorSpace::Rgbx && ch == 3 {
                out[base + ch] = 0;
                continue;
            }
            let mut v = row[base + ch];
            if colorspace.has_alpha() && ch < c - 1 {
                v = if alpha > 1e-6 { (v / alpha).clamp(0.0, 1.0) } else { 0.0 };
            } else {
                v = v.clamp(0.0, 1.0);
            }
            out[base + ch] = if ch < cc {
                gamma.linear_to_srgb(v)
            } else {
                (v * 255.0).round().clamp(0.0, 255.0) as u8
            };
        }
    }
    out
}
