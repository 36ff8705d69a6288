// SPDX-License-Identifier: MIT
//! # CLI Request Configuration
//!
//! This module validates a requested bounding box and color space before
//! anything touches the resampler core.
//!
//! Mirrors this pack's `moreWax-cap` workspace's `CaptureConfig` split
//! (`config/config.rs`): a plain struct parsed from CLI flags and a
//! `validate()` pass that rejects bad input early with a descriptive message
//! and turns it into a [`ScalePlan`] holding only the values the core actually
//! needs.

use anyhow::{anyhow, bail, Result};
use resample_core::ColorSpace;

/// A raw scale request as parsed from CLI flags, before validation.
///
/// | Field | Meaning |
/// |---|---|
/// | `width`/`height` | declared dimensions of the input pixel buffer |
/// | `color_space` | one of `g`, `ga`, `rgb`, `rgbx`, `rgba`, `cmyk` |
/// | `box_width`/`box_height` | the bounding box to fit into, aspect-preserved |
#[derive(Debug, Clone)]
pub struct ScaleRequest {
    pub width: u32,
    pub height: u32,
    pub color_space: String,
    pub box_width: u32,
    pub box_height: u32,
}

/// A validated request, ready to drive the core.
pub struct ScalePlan {
    pub in_w: u32,
    pub in_h: u32,
    pub color_space: ColorSpace,
    pub out_w: u32,
    pub out_h: u32,
}

impl ScaleRequest {
    /// Parse and range-check every field, then compute the aspect-preserving
    /// output dimensions. Fails fast with a descriptive error rather than
    /// letting the core reject the request opaquely at `Scaler::init`.
    pub fn validate(&self) -> Result<ScalePlan> {
        const MAX_DIM: u32 = 1_000_000;
        if self.width == 0 || self.width > MAX_DIM {
            bail!("width {} out of range 1..={MAX_DIM}", self.width);
        }
        if self.height == 0 || self.height > MAX_DIM {
            bail!("height {} out of range 1..={MAX_DIM}", self.height);
        }
        if self.box_width == 0 || self.box_height == 0 {
            bail!("bounding box dimensions must be at least 1");
        }

        let color_space = parse_color_space(&self.color_space)?;
        let (out_w, out_h) = resample_core::fit_ratio(self.width, self.height, self.box_width, self.box_height)
            .map_err(|e| anyhow!("aspect fit failed: {e}"))?;

        Ok(ScalePlan {
            in_w: self.width,
            in_h: self.height,
            color_space,
            out_w,
            out_h,
        })
    }
}

fn parse_color_space(s: &str) -> Result<ColorSpace> {
    match s.to_ascii_lowercase().as_str() {
        "g" | "grey" | "gray" => Ok(ColorSpace::G),
        "ga" => Ok(ColorSpace::GA),
        "rgb" => Ok(ColorSpace::Rgb),
        "rgbx" => Ok(ColorSpace::Rgbx),
        "rgba" => Ok(ColorSpace::Rgba),
        "cmyk" => Ok(ColorSpace::Cmyk),
        other => bail!("unknown color space '{other}' (expected g, ga, rgb, rgbx, rgba, or cmyk)"),
    }
}
