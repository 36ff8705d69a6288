// SPDX-License-Identifier: MIT
//! # Coefficient Planning and Tap-Width Computation
//!
//! This module computes, once per axis per scale operation, the full set of
//! Catmull-Rom coefficient windows and the border/counter tables the scaler
//! driver uses to know how many input rows to feed before an output row is
//! ready.
//!
//! ## Design Philosophy
//!
//! The planner separates "how wide a window does sample `p` need, and what are
//! its weights" from "how do I walk that window fast." Every output sample's
//! window is computed exactly once, at plan time, and stored in a compact
//! CSR-style layout (`offsets` + `entries`) so the per-row hot path in
//! [`crate::hscale`] and [`crate::vscale`] is pure multiply-add against
//! already-trimmed, already-normalized floats — no divisions, no transcendental
//! calls, no per-row replanning.
//!
//! Grounded in `original_source/resample.c`'s `calc_taps`/`catrom`/`calc_coeffs`
//! (the `liboil`-derived C implementation this algorithm was distilled from),
//! adapted from that file's fix1.30 fixed-point arithmetic to plain `f64`
//! planning followed by `f32` storage. Unlike the C original, which recomputes
//! `calc_coeffs` once per output row at scale time from a live cursor, every
//! window here is precomputed up front.
//!
//! ## Tap-Width Rule
//!
//! - **Upscaling** (`d_out > d_in`): always 4 taps, edge-clamped.
//! - **Downscaling** (`d_out <= d_in`): `floor(4 * d_in / d_out)` rounded down to
//!   an even integer, so wide downscales average proportionally more source
//!   samples per output pixel and avoid aliasing.
//!
//! ## Border/Counter Tables
//!
//! - Downscale: `border[p]` is the count of *new* input rows that must be fed
//!   before output `p` becomes ready, telescoping to exactly `d_in` across the
//!   whole pass.
//! - Upscale: `border[i]` is the count of output rows that become ready the
//!   instant input row `i` is fed, summing to exactly `d_out`.

/// Catmull-Rom kernel, `x >= 0` (spec.md §4.2).
#[inline]
fn catmull_rom(x: f64) -> f64 {
    if x < 1.0 {
        ((1.5 * x - 2.5) * x) * x + 1.0
    } else if x <= 2.0 {
        (((5.0 - x) * x - 8.0) * x + 4.0) / 2.0
    } else {
        0.0
    }
}

/// Tap count for one axis (spec.md §4.2 / invariant 1): 4 when upscaling, else
/// `floor(4 * d_in / d_out)` rounded down to an even integer.
pub fn calc_taps(d_in: u32, d_out: u32) -> usize {
    if d_out > d_in {
        4
    } else {
        let t = 4u64 * d_in as u64 / d_out as u64;
        (t - (t & 1)) as usize
    }
}

/// A planned set of per-output-sample coefficient windows for one axis, plus the
/// border/counter table the scaler driver uses to know how many rows to feed.
pub struct CoeffPlan {
    pub taps: usize,
    pub downscale: bool,
    /// CSR row starts into `entries`, length `d_out + 1`.
    offsets: Vec<u32>,
    /// `(src_index, coefficient)` pairs, concatenated per output sample.
    entries: Vec<(u32, f32)>,
    /// Downscale: `border[p]` = new input rows to feed before output `p` is
    /// ready. Upscale: `border[i]` = outputs ready right after feeding input row
    /// `i`. (spec.md §4.6 `slots()`.)
    pub border: Vec<u32>,
}

impl CoeffPlan {
    /// The coefficient window for output sample `p`: `(src_index, coeff)` pairs,
    /// already trimmed/clamped and fudge-renormalized to sum to 1.
    #[inline]
    pub fn window(&self, p: usize) -> &[(u32, f32)] {
        let start = self.offsets[p] as usize;
        let end = self.offsets[p + 1] as usize;
        &self.entries[start..end]
    }

    pub fn output_len(&self) -> usize {
        self.offsets.len() - 1
    }
}

/// Plan one axis: map `d_in` input samples to `d_out` output samples.
pub fn plan_axis(d_in: u32, d_out: u32) -> CoeffPlan {
    debug_assert!(d_in >= 1 && d_out >= 1);
    let downscale = d_out <= d_in;
    let taps = calc_taps(d_in, d_out);
    let tap_mult = taps as f64 / 4.0;
    let half = (taps / 2) as i64;

    let mut offsets = Vec::with_capacity(d_out as usize + 1);
    let mut entries = Vec::new();
    offsets.push(0u32);

    for p in 0..d_out {
        let s_p = (p as f64 + 0.5) * (d_in as f64 / d_out as f64) - 0.5;
        let c = s_p.floor() as i64;

        let mut raw: Vec<(i64, f64)> = Vec::with_capacity(taps);
        for i in 0..taps as i64 {
            let src = c - (half - 1) + i;
            let offset = src as f64 - s_p;
            let k = catmull_rom(offset.abs() / tap_mult) / tap_mult;
            raw.push((src, k));
        }

        if downscale {
            // Out-of-range taps are simply dropped (ltrim/rtrim, spec.md §4.2).
            raw.retain(|&(src, _)| src >= 0 && src < d_in as i64);
        } else {
            // Upscale: clamp to the valid range (edge replication) and merge
            // duplicate clamped indices by summing their weights.
            for entry in raw.iter_mut() {
                entry.0 = entry.0.clamp(0, d_in as i64 - 1);
            }
            raw.sort_by_key(|&(src, _)| src);
            let mut merged: Vec<(i64, f64)> = Vec::with_capacity(raw.len());
            for (src, k) in raw {
                match merged.last_mut() {
                    Some(last) if last.0 == src => last.1 += k,
                    _ => merged.push((src, k)),
                }
            }
            raw = merged;
        }

        let sum: f64 = raw.iter().map(|&(_, k)| k).sum();
        let fudge = if sum.abs() > 1e-12 { 1.0 / sum } else { 1.0 };
        for (src, k) in &raw {
            entries.push((*src as u32, (k * fudge) as f32));
        }
        offsets.push(entries.len() as u32);
    }

    let border = if downscale {
        border_downscale(&offsets, &entries, d_in, d_out)
    } else {
        border_upscale(&offsets, &entries, d_in, d_out)
    };

    CoeffPlan {
        taps,
        downscale,
        offsets,
        entries,
        border,
    }
}

fn window_of<'a>(offsets: &[u32], entries: &'a [(u32, f32)], p: usize) -> &'a [(u32, f32)] {
    &entries[offsets[p] as usize..offsets[p + 1] as usize]
}

/// Downscale border table: `border[p]` is how many *new* input rows must be fed
/// (beyond what output `p - 1` already consumed) before output `p` is ready.
/// Telescoping sum over all `p` equals `d_in` exactly (spec.md invariant 4/7).
fn border_downscale(offsets: &[u32], entries: &[(u32, f32)], d_in: u32, d_out: u32) -> Vec<u32> {
    let mut border = vec![0u32; d_out as usize];
    let mut prev_rightmost: i64 = -1;
    for p in 0..d_out as usize {
        let window = window_of(offsets, entries, p);
        let rightmost = window.iter().map(|&(src, _)| src as i64).max().unwrap_or(prev_rightmost);
        border[p] = (rightmost - prev_rightmost).max(0) as u32;
        prev_rightmost = rightmost;
    }
    // Rounding at the floor() boundary can leave the telescoped sum a sample or
    // two off `d_in`; pin the last entry so the caller's feed budget is exact.
    let total: u32 = border.iter().sum();
    if total != d_in {
        let last = border.len() - 1;
        let diff = d_in as i64 - total as i64;
        border[last] = (border[last] as i64 + diff).max(0) as u32;
    }
    border
}

/// Upscale border table: `border[i]` is how many outputs become ready the
/// instant input row `i` is fed (spec.md §4.6 `slots()` upscale branch).
fn border_upscale(offsets: &[u32], entries: &[(u32, f32)], d_in: u32, d_out: u32) -> Vec<u32> {
    let mut border = vec![0u32; d_in as usize];
    for p in 0..d_out as usize {
        let window = window_of(offsets, entries, p);
        if let Some(rightmost) = window.iter().map(|&(src, _)| src).max() {
            border[rightmost as usize] += 1;
        }
    }
    border
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_formula() {
        assert_eq!(calc_taps(10, 100), 4); // upscale always 4
        assert_eq!(calc_taps(100, 10), 40); // 4 * 10 -> already even
        assert_eq!(calc_taps(99, 10), 38); // floor(4*99/10)=39 -> 38 (even)
        assert_eq!(calc_taps(5, 5), 4); // unit scale: treated as not-downscale path (d_out==d_in)
    }

    #[test]
    fn coefficients_sum_to_one() {
        for &(d_in, d_out) in &[(4u32, 2u32), (1, 10), (2, 1), (100, 37), (37, 100), (1, 1)] {
            let plan = plan_axis(d_in, d_out);
            for p in 0..plan.output_len() {
                let sum: f32 = plan.window(p).iter().map(|&(_, k)| k).sum();
                assert!((sum - 1.0).abs() < 1e-5, "d_in={d_in} d_out={d_out} p={p} sum={sum}");
            }
        }
    }

    #[test]
    fn downscale_border_sums_to_input_len() {
        for &(d_in, d_out) in &[(100u32, 37u32), (8, 4), (1000, 3), (5, 5), (2, 2)] {
            let plan = plan_axis(d_in, d_out);
            if plan.downscale {
                let total: u32 = plan.border.iter().sum();
                assert_eq!(total, d_in, "d_in={d_in} d_out={d_out}");
            }
        }
    }

    #[test]
    fn upscale_border_sums_to_output_len() {
        for &(d_in, d_out) in &[(1u32, 10u32), (4, 100), (37, 100)] {
            let plan = plan_axis(d_in, d_out);
            assert!(!plan.downscale);
            let total: u32 = plan.border.iter().sum();
            assert_eq!(total, d_out);
        }
    }

    #[test]
    fn identity_scale_is_nearest_single_tap_dominant() {
        // 1:1 scale should concentrate almost all weight on the matching sample.
        let plan = plan_axis(8, 8);
        for p in 0..8 {
            let window = plan.window(p);
            let dominant = window.iter().find(|&&(src, _)| src as usize == p);
            assert!(dominant.is_some());
            assert!(dominant.unwrap().1 > 0.9);
        }
    }
}
