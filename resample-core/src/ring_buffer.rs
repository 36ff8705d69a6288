// SPDX-License-Identifier: MIT
//! # Ring Buffer Module
//!
//! This module provides a bounded ring buffer of horizontally-scaled float
//! rows, the working set the vertical pass reads back from.
//!
//! ## Overview
//!
//! Capacity is fixed at `taps` rows for the axis it serves: at most 4 for an
//! upscale, at most `4 * d_in / d_out` for a downscale — bounded regardless of
//! how many rows the source image actually has, so tall images never cost more
//! working memory than the resample ratio requires.
//!
//! A sibling crate in this pack's `cap-scale` workspace implements a ring
//! buffer as a multi-threaded producer/consumer queue over `memmap2::MmapMut`
//! with `AtomicUsize` head/tail cursors, for a capture pipeline running decode
//! and encode on separate threads. This scaler drives feed/emit from a single
//! cooperative caller, so neither the mmap backing nor the atomics have a job
//! to do here: a plain `Vec<f32>` addressed `buf[(idx % capacity) * row_len]`
//! is the whole mechanism.

pub struct RingBuffer {
    buf: Vec<f32>,
    row_len: usize,
    capacity: usize,
    pushed: u64,
}

impl RingBuffer {
    pub fn new(capacity: usize, row_len: usize) -> Self {
        Self {
            buf: vec![0.0; capacity * row_len],
            row_len,
            capacity,
            pushed: 0,
        }
    }

    /// Append one row, evicting the oldest if the buffer is full.
    pub fn push(&mut self, row: &[f32]) {
        debug_assert_eq!(row.len(), self.row_len);
        let slot = (self.pushed as usize) % self.capacity;
        let start = slot * self.row_len;
        self.buf[start..start + self.row_len].copy_from_slice(row);
        self.pushed += 1;
    }

    /// Fetch the row that was pushed at absolute index `idx`. Only valid while
    /// `idx` is still within the last `capacity` pushes — callers (the vertical
    /// scaler) only ever reach back that far because the coefficient planner's
    /// border table guarantees it (spec.md §4.2/§4.6).
    #[inline]
    pub fn get(&self, idx: u64) -> &[f32] {
        debug_assert!(idx < self.pushed);
        debug_assert!(self.pushed - idx <= self.capacity as u64);
        let slot = (idx as usize) % self.capacity;
        let start = slot * self.row_len;
        &self.buf[start..start + self.row_len]
    }

    /// Number of rows pushed so far (the scaler's `in_pos`).
    #[inline]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Reset to empty, ready for a new pass over the same image (spec.md §6
    /// `restart`). Contents are left as-is; only ever-increasing coefficients
    /// multiplying zeroed/overwritten slots are read before being written again.
    pub fn reset(&mut self) {
        self.pushed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_capacity() {
        let mut rb = RingBuffer::new(3, 2);
        rb.push(&[1.0, 2.0]);
        rb.push(&[3.0, 4.0]);
        rb.push(&[5.0, 6.0]);
        assert_eq!(rb.get(0), [1.0, 2.0]);
        assert_eq!(rb.get(1), [3.0, 4.0]);
        assert_eq!(rb.get(2), [5.0, 6.0]);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut rb = RingBuffer::new(2, 1);
        rb.push(&[1.0]);
        rb.push(&[2.0]);
        rb.push(&[3.0]);
        assert_eq!(rb.get(1), [2.0]);
        assert_eq!(rb.get(2), [3.0]);
    }

    #[test]
    fn reset_restarts_the_index() {
        let mut rb = RingBuffer::new(2, 1);
        rb.push(&[1.0]);
        rb.reset();
        assert_eq!(rb.pushed(), 0);
        rb.push(&[9.0]);
        assert_eq!(rb.get(0), [9.0]);
    }
}
