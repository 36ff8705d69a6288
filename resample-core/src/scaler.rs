// SPDX-License-Identifier: MIT
//! # Streaming Two-Pass Scaler Driver
//!
//! This module provides [`Scaler`], the stateful cooperative driver tying the
//! coefficient planner, ring buffer, and horizontal/vertical passes together
//! into a row-at-a-time streaming pipeline.
//!
//! ## Architecture Overview
//!
//! `Scaler::init` plans both axes up front: it builds the x/y coefficient
//! windows, allocates the vertical ring buffer sized to the y-axis tap count,
//! and initializes the feed/emit counters. The caller then drives a
//! cooperative `slots()` / `feed()` / `emit()` protocol one output row at a
//! time, grounded in `original_source/pngscale.c`'s
//! `png_noninterlaced`/`png_interlaced` read-scale-write loop:
//!
//! ```ignore
//! for p in 0..out_h {
//!     while scaler.slots() > 0 {
//!         scaler.feed(&next_input_row())?;
//!     }
//!     scaler.emit(&mut output_row)?;
//! }
//! ```
//!
//! [`Scaler::drive`] packages that loop as a convenience method for callers who
//! don't need to interleave other work between rows.
//!
//! ## Protocol Invariants
//!
//! - `feed()` with `slots() == 0`, or `emit()` with `slots() > 0`, is a caller
//!   protocol violation and returns [`ScaleError::ProtocolViolation`] rather
//!   than panicking or corrupting state.
//! - Exactly `in_h` feeds and `out_h` emits occur over one full pass,
//!   regardless of upscale or downscale direction.
//! - `restart()` rewinds all counters so the same `Scaler` can drive a second
//!   identical pass (e.g. over another frame of the same geometry) without
//!   re-planning coefficients.
//!
//! ## Performance Characteristics
//!
//! - No hot-path logging: `log` is only used in `init`, `restart`, and on
//!   protocol violations, never per row.
//! - No hot-path allocation beyond the ring buffer and per-row output buffers
//!   the caller already owns.

use crate::colorspace::ColorSpace;
use crate::coeffs::{plan_axis, CoeffPlan};
use crate::error::ScaleError;
use crate::gamma::{ensure_initialized, GammaTables};
use crate::hscale;
use crate::ring_buffer::RingBuffer;
use crate::vscale;

const MIN_DIM: u32 = 1;
const MAX_DIM: u32 = 1_000_000;

pub struct Scaler {
    colorspace: ColorSpace,
    channels: usize,
    in_w: u32,
    in_h: u32,
    out_w: u32,
    out_h: u32,
    x_plan: CoeffPlan,
    y_plan: CoeffPlan,
    gamma: &'static GammaTables,
    rb: RingBuffer,
    in_pos: u64,
    out_pos: usize,
    /// Downscale: rows still needed before the pending output row is ready.
    /// Upscale: unused (see `ready_count`).
    remaining: u32,
    /// Upscale: output rows ready to emit right now. Downscale: unused.
    ready_count: u32,
}

impl Scaler {
    pub fn init(colorspace: ColorSpace, in_w: u32, in_h: u32, out_w: u32, out_h: u32) -> Result<Self, ScaleError> {
        for d in [in_w, in_h, out_w, out_h] {
            if !(MIN_DIM..=MAX_DIM).contains(&d) {
                return Err(ScaleError::BadArg);
            }
        }

        let channels = colorspace.components();
        let x_plan = plan_axis(in_w, out_w);
        let y_plan = plan_axis(in_h, out_h);
        let rb = RingBuffer::new(y_plan.taps.max(1), out_w as usize * channels);

        let remaining = if y_plan.downscale { *y_plan.border.first().unwrap_or(&0) } else { 0 };

        log::debug!(
            "scaler init: {in_w}x{in_h} -> {out_w}x{out_h} {colorspace:?} (T_x={}, T_y={})",
            x_plan.taps,
            y_plan.taps
        );

        Ok(Self {
            colorspace,
            channels,
            in_w,
            in_h,
            out_w,
            out_h,
            x_plan,
            y_plan,
            gamma: ensure_initialized(),
            rb,
            in_pos: 0,
            out_pos: 0,
            remaining,
            ready_count: 0,
        })
    }

    pub fn in_dims(&self) -> (u32, u32) {
        (self.in_w, self.in_h)
    }

    pub fn out_dims(&self) -> (u32, u32) {
        (self.out_w, self.out_h)
    }

    /// Number of input rows the caller must feed before the next `emit` can
    /// succeed (spec.md §4.6).
    pub fn slots(&self) -> u32 {
        if self.out_pos as u32 >= self.out_h {
            return 0;
        }
        if self.y_plan.downscale {
            return self.remaining;
        }
        if self.ready_count > 0 {
            return 0;
        }
        let mut i = self.in_pos as usize;
        let mut count = 0u32;
        while i < self.in_h as usize {
            count += 1;
            if self.y_plan.border[i] > 0 {
                return count;
            }
            i += 1;
        }
        0
    }

    /// Ingest one raw row (`in_w * colorspace.components()` bytes): decode,
    /// horizontally scale, and push into the vertical ring buffer.
    pub fn feed(&mut self, raw: &[u8]) -> Result<(), ScaleError> {
        if raw.len() != self.in_w as usize * self.channels {
            return Err(ScaleError::BadArg);
        }
        if self.slots() == 0 {
            log::warn!("feed() called with slots() == 0 at in_pos={}", self.in_pos);
            return Err(ScaleError::ProtocolViolation);
        }

        let decoded = hscale::decode_row(self.colorspace, self.gamma, raw, self.in_w);
        let scaled = hscale::scale_row(&self.x_plan, self.channels, &decoded);
        self.rb.push(&scaled);

        let idx = self.in_pos as usize;
        self.in_pos += 1;

        if self.y_plan.downscale {
            self.remaining = self.remaining.saturating_sub(1);
        } else {
            self.ready_count += self.y_plan.border[idx];
        }
        Ok(())
    }

    /// Produce the next output row (`out_w * colorspace.components()` bytes)
    /// into `out`.
    pub fn emit(&mut self, out: &mut [u8]) -> Result<(), ScaleError> {
        if out.len() != self.out_w as usize * self.channels {
            return Err(ScaleError::BadArg);
        }
        if self.slots() != 0 || self.out_pos as u32 >= self.out_h {
            log::warn!("emit() called out of turn at out_pos={}", self.out_pos);
            return Err(ScaleError::ProtocolViolation);
        }

        let row_len = self.out_w as usize * self.channels;
        let linear = vscale::scale_column(&self.y_plan, row_len, &self.rb, self.out_pos);
        let encoded = vscale::encode_row(self.colorspace, self.gamma, &linear, self.out_w);
        out.copy_from_slice(&encoded);

        self.out_pos += 1;
        if self.y_plan.downscale {
            self.remaining = self.y_plan.border.get(self.out_pos).copied().unwrap_or(0);
        } else {
            self.ready_count = self.ready_count.saturating_sub(1);
        }
        Ok(())
    }

    /// Rewind to the start of a fresh pass over the same dimensions/colorspace
    /// (e.g. reusing one `Scaler` across frames of a video, or retrying after
    /// an aborted drive).
    pub fn restart(&mut self) {
        log::debug!("scaler restart: {}x{} -> {}x{}", self.in_w, self.in_h, self.out_w, self.out_h);
        self.rb.reset();
        self.in_pos = 0;
        self.out_pos = 0;
        self.remaining = if self.y_plan.downscale { *self.y_plan.border.first().unwrap_or(&0) } else { 0 };
        self.ready_count = 0;
    }

    /// Drive a full pass: pull input rows from `next_input_row` and hand
    /// finished output rows to `emit_output_row`, following the canonical
    /// `slots`/`feed`/`emit` loop.
    pub fn drive(
        &mut self,
        mut next_input_row: impl FnMut() -> Vec<u8>,
        mut emit_output_row: impl FnMut(&[u8]),
    ) -> Result<(), ScaleError> {
        let mut out = vec![0u8; self.out_w as usize * self.channels];
        for _ in 0..self.out_h {
            loop {
                let n = self.slots();
                if n == 0 {
                    break;
                }
                for _ in 0..n {
                    let row = next_input_row();
                    self.feed(&row)?;
                }
            }
            self.emit(&mut out)?;
            emit_output_row(&out);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_row(colorspace: ColorSpace, width: u32, value: u8) -> Vec<u8> {
        vec![value; width as usize * colorspace.components()]
    }

    #[test]
    fn downscale_drive_produces_expected_row_count() {
        let mut scaler = Scaler::init(ColorSpace::Rgb, 100, 100, 10, 10).unwrap();
        let mut produced = 0;
        let mut fed = 0;
        scaler
            .drive(
                || {
                    fed += 1;
                    solid_row(ColorSpace::Rgb, 100, 128)
                },
                |_row| produced += 1,
            )
            .unwrap();
        assert_eq!(produced, 10);
        assert_eq!(fed, 100);
    }

    #[test]
    fn upscale_drive_produces_expected_row_count() {
        let mut scaler = Scaler::init(ColorSpace::Rgba, 2, 2, 20, 20).unwrap();
        let mut produced = 0;
        let mut fed = 0;
        scaler
            .drive(
                || {
                    fed += 1;
                    solid_row(ColorSpace::Rgba, 2, 200)
                },
                |_row| produced += 1,
            )
            .unwrap();
        assert_eq!(produced, 20);
        assert_eq!(fed, 2);
    }

    #[test]
    fn feed_before_slots_available_is_a_protocol_violation() {
        let mut scaler = Scaler::init(ColorSpace::G, 10, 10, 10, 2).unwrap();
        // Fully satisfy slots() for the first output row.
        while scaler.slots() > 0 {
            scaler.feed(&solid_row(ColorSpace::G, 10, 10)).unwrap();
        }
        let mut out = vec![0u8; 10];
        scaler.emit(&mut out).unwrap();
        // Now slots() > 0 again (second output row pending); emit() must reject.
        assert!(scaler.slots() > 0);
        let err = scaler.emit(&mut out).unwrap_err();
        assert_eq!(err, ScaleError::ProtocolViolation);
    }

    #[test]
    fn out_of_range_dimension_is_rejected() {
        let err = Scaler::init(ColorSpace::Rgb, 0, 10, 10, 10).unwrap_err();
        assert_eq!(err, ScaleError::BadArg);
        let err = Scaler::init(ColorSpace::Rgb, 10, 10, 10, 2_000_000).unwrap_err();
        assert_eq!(err, ScaleError::BadArg);
    }

    #[test]
    fn restart_allows_a_second_identical_pass() {
        let mut scaler = Scaler::init(ColorSpace::Rgb, 8, 8, 4, 4).unwrap();
        let run = |s: &mut Scaler| {
            let mut rows = Vec::new();
            s.drive(|| solid_row(ColorSpace::Rgb, 8, 64), |row| rows.push(row.to_vec()))
                .unwrap();
            rows
        };
        let first = run(&mut scaler);
        scaler.restart();
        let second = run(&mut scaler);
        assert_eq!(first, second);
    }
}
