// SPDX-License-Identifier: MIT
//! # resample-core: Streaming Gamma-Correct Bicubic Image Resampler
//!
//! This crate provides a streaming, two-pass (horizontal then vertical) Catmull-Rom
//! bicubic resampler for raw pixel scanlines. It performs gamma-correct interpolation
//! in premultiplied-alpha linear space over a bounded ring buffer of intermediate
//! rows, so an arbitrarily tall image can be scaled with working memory bounded by
//! the resample ratio rather than the image height.
//!
//! ## Architecture Overview
//!
//! The crate is designed around three core principles:
//! 1. **Plan once, scale fast**: coefficients, tap counts, and feed/emit border
//!    tables are computed once at [`scaler::Scaler::init`] time so the per-row hot
//!    path is pure multiply-add with no divisions or transcendentals.
//! 2. **Bounded working set**: the vertical pass never holds more than `taps` rows
//!    of a source image at once, regardless of image height.
//! 3. **Codec-agnostic**: the core never touches a container format; [`adapter`]
//!    defines the trait seam a real PNG/JPEG decoder/encoder would implement.
//!
//! ## Key Components
//!
//! - [`colorspace`]: pixel layout tags (G/GA/RGB/RGBX/RGBA/CMYK).
//! - [`gamma`]: process-wide sRGB ⇄ linear lookup tables.
//! - [`coeffs`]: Catmull-Rom coefficient planner.
//! - [`ring_buffer`]: bounded row buffer between the two passes.
//! - [`hscale`] / [`vscale`]: the two resampling passes.
//! - [`aspect`]: aspect-ratio-preserving bounding-box fit.
//! - [`scaler`]: the `slots`/`feed`/`emit` driver tying it all together.
//! - [`error`]: failure modes.
//!
//! ## Performance Characteristics
//!
//! - **No hot-path logging**: `log` is only used at scaler-lifecycle boundaries
//!   (`init`, `restart`, protocol violations), never per-row or per-sample.
//! - **No hot-path allocation**: coefficient windows, border tables, and the ring
//!   buffer are all allocated once in `Scaler::init`.
//! - **Cache-friendly**: both passes walk rows/columns in increasing source order.

pub mod adapter;
pub mod aspect;
pub mod colorspace;
pub mod coeffs;
pub mod error;
pub mod gamma;
pub mod hscale;
pub mod ring_buffer;
pub mod scaler;
pub mod vscale;

pub use adapter::{DecoderRow, RawFrame, RowSink};
pub use aspect::fit_ratio;
pub use colorspace::ColorSpace;
pub use error::ScaleError;
pub use scaler::Scaler;

/// Drive a full pass from a [`DecoderRow`] source into a [`RowSink`],
/// computing the output geometry from the decoder's declared input size.
/// Convenience glue for callers who already have both adapters in hand.
pub fn resample(
    decoder: &mut dyn adapter::DecoderRow,
    out_w: u32,
    out_h: u32,
    sink: &mut dyn adapter::RowSink,
) -> Result<(), ScaleError> {
    let mut scaler = Scaler::init(decoder.color_space(), decoder.width(), decoder.height(), out_w, out_h)?;
    scaler.drive(|| decoder.next_row(), |row| sink.write_row(row))
}
