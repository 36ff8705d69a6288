// SPDX-License-Identifier: MIT
//! # sRGB ⇄ Linear Gamma Tables
//!
//! This module provides process-wide sRGB-to-linear and linear-to-sRGB lookup
//! tables, built once, lazily, behind a [`OnceLock`] and shared read-only by
//! every [`crate::scaler::Scaler`] in the process.
//!
//! ## Design Philosophy
//!
//! Gamma correction must happen before interpolation, not after: averaging
//! sRGB-encoded bytes directly produces visibly darker midtones than
//! averaging in linear light. The forward table is grounded in
//! `original_source/resample.c`'s `s2l_map`; the reverse direction is
//! generalized to a 256-entry table of right-edge linear thresholds plus
//! binary search, rather than the C original's polynomial fit, because a
//! threshold table's round-trip correctness is provable by construction.
//!
//! ## Correctness Requirement
//!
//! Both directions must round-trip exactly:
//! `linear_to_srgb(srgb_to_linear(v)) == v` for every byte value `v`.

use std::sync::OnceLock;

/// sRGB byte → linear float, and the reverse mapping via binary search.
pub struct GammaTables {
    to_linear: [f32; 256],
    /// `to_srgb_threshold[v]` is the largest linear value that still maps back to
    /// byte `v`. Built as the midpoint between `to_linear[v]` and `to_linear[v+1]`.
    to_srgb_threshold: [f32; 256],
}

impl GammaTables {
    fn build() -> Self {
        let mut to_linear = [0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            let u = v as f64 / 255.0;
            let linear = if u <= 0.040_448_236_277_105_97 {
                u / 12.92
            } else {
                ((u + 0.055) / 1.055).powf(2.4)
            };
            *slot = linear as f32;
        }

        let mut to_srgb_threshold = [0f32; 256];
        for v in 0..255 {
            to_srgb_threshold[v] = (to_linear[v] + to_linear[v + 1]) * 0.5;
        }
        to_srgb_threshold[255] = f32::INFINITY;

        Self {
            to_linear,
            to_srgb_threshold,
        }
    }

    /// Look up a linear float in `[0, 1]` for an sRGB byte.
    #[inline]
    pub fn srgb_to_linear(&self, byte: u8) -> f32 {
        self.to_linear[byte as usize]
    }

    /// Quantize a linear float (not necessarily clamped) to the nearest sRGB byte.
    #[inline]
    pub fn linear_to_srgb(&self, x: f32) -> u8 {
        if x <= 0.0 {
            return 0;
        }
        self.to_srgb_threshold.partition_point(|&t| x > t) as u8
    }
}

static GAMMA_TABLES: OnceLock<GammaTables> = OnceLock::new();

/// Ensure the process-wide gamma tables are built. Idempotent and race-free:
/// safe to call from any number of threads before or during scaler construction.
pub fn ensure_initialized() -> &'static GammaTables {
    GAMMA_TABLES.get_or_init(GammaTables::build)
}
