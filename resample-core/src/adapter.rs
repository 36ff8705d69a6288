// SPDX-License-Identifier: MIT
//! # Codec Adapter Seam
//!
//! This module defines the seam between the resampler core and external codec
//! adapters. PNG/JPEG decoding and encoding are genuinely external; what
//! belongs in the core is the minimal trait boundary a real adapter would
//! implement, grounded in the `pngscale.c` driver shape (`png_read_row` →
//! xscale → ring buffer → `png_write_row`).

use crate::colorspace::ColorSpace;

/// Supplies raw scanlines in row order and declares the source geometry.
pub trait DecoderRow {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn color_space(&self) -> ColorSpace;
    /// Read the next row (`width() * color_space().components()` bytes).
    /// Called exactly `height()` times over one full drive.
    fn next_row(&mut self) -> Vec<u8>;
}

/// Consumes emitted output rows in row order.
pub trait RowSink {
    fn write_row(&mut self, row: &[u8]);
}

/// An in-memory `DecoderRow`/`RowSink` pair over a flat `Vec<u8>`, used by
/// tests and the CLI demo path to exercise the full pipeline without a real
/// codec dependency. Not a production codec adapter.
pub struct RawFrame {
    width: u32,
    height: u32,
    color_space: ColorSpace,
    data: Vec<u8>,
    cursor: usize,
}

impl RawFrame {
    pub fn new(width: u32, height: u32, color_space: ColorSpace, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * color_space.components());
        Self {
            width,
            height,
            color_space,
            data,
            cursor: 0,
        }
    }

    /// An empty frame of the given geometry, rows appended via [`RowSink`].
    pub fn empty(width: u32, height: u32, color_space: ColorSpace) -> Self {
        Self {
            width,
            height,
            color_space,
            data: Vec::with_capacity(width as usize * height as usize * color_space.components()),
            cursor: 0,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl DecoderRow for RawFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    fn next_row(&mut self) -> Vec<u8> {
        let row_len = self.width as usize * self.color_space.components();
        let row = self.data[self.cursor..self.cursor + row_len].to_vec();
        self.cursor += row_len;
        row
    }
}

impl RowSink for RawFrame {
    fn write_row(&mut self, row: &[u8]) {
        self.data.extend_from_slice(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_frame_round_trips_rows_in_order() {
        let mut frame = RawFrame::new(2, 2, ColorSpace::G, vec![1, 2, 3, 4]);
        assert_eq!(frame.next_row(), vec![1, 2]);
        assert_eq!(frame.next_row(), vec![3, 4]);
    }

    #[test]
    fn raw_frame_sink_appends_in_order() {
        let mut frame = RawFrame::empty(2, 2, ColorSpace::G);
        frame.write_row(&[1, 2]);
        frame.write_row(&[3, 4]);
        assert_eq!(frame.into_bytes(), vec![1, 2, 3, 4]);
    }
}
