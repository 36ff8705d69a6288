// SPDX-License-Identifier: MIT
//! # avatar-resample: CLI Driver for the Streaming Resampler Core
//!
//! This crate is CLI-facing glue around `resample-core`: request validation,
//! raw pixel file I/O, and logging setup. The resampler algorithm itself lives
//! entirely in `resample-core`; this crate mirrors this pack's `moreWax-cap`
//! workspace split between a thin root binary and its `cap-scale` path
//! dependency.
//!
//! ## Key Components
//!
//! - [`config`]: `ScaleRequest`/`ScalePlan`, request validation.

pub mod config;

pub use config::{ScalePlan, ScaleRequest};
