// SPDX-License-Identifier: MIT
//! # CLI Entry Point
//!
//! Fits a raw pixel buffer into a bounding box and resamples it, writing the
//! result as a raw pixel buffer of the same color space.
//!
//! This operates on headerless raw pixel dumps, not PNG/JPEG — container
//! codecs are out of scope; a real deployment would plug a
//! `resample_core::DecoderRow`/`RowSink` pair backed by `png`/`jpeg-decoder` in
//! front of this same `resample_core::resample` call.

use anyhow::{Context, Result};
use clap::Parser;
use resample_core::adapter::RawFrame;
use std::fs;
use std::path::PathBuf;

use avatar_resample::ScaleRequest;

/// Resample a raw pixel buffer into a bounding box, preserving aspect ratio.
#[derive(Parser, Debug)]
#[command(name = "avatar-resample", version, about)]
struct Cli {
    /// Path to the raw input pixel buffer (no header: width*height*components bytes).
    #[arg(long)]
    input: PathBuf,

    /// Input width in pixels.
    #[arg(long)]
    width: u32,

    /// Input height in pixels.
    #[arg(long)]
    height: u32,

    /// Color space of the input/output buffer: g, ga, rgb, rgbx, rgba, or cmyk.
    #[arg(long, default_value = "rgba")]
    color_space: String,

    /// Bounding box width to fit into, preserving aspect ratio.
    #[arg(long)]
    box_width: u32,

    /// Bounding box height to fit into, preserving aspect ratio.
    #[arg(long)]
    box_height: u32,

    /// Path to write the resampled raw pixel buffer to.
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request = ScaleRequest {
        width: cli.width,
        height: cli.height,
        color_space: cli.color_space.clone(),
        box_width: cli.box_width,
        box_height: cli.box_height,
    };
    let plan = request.validate().context("invalid scale request")?;

    let raw = fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let expected_len = plan.in_w as usize * plan.in_h as usize * plan.color_space.components();
    anyhow::ensure!(
        raw.len() == expected_len,
        "input file is {} bytes, expected {expected_len} for {}x{} {:?}",
        raw.len(),
        plan.in_w,
        plan.in_h,
        plan.color_space
    );

    log::info!(
        "resampling {}x{} -> {}x{} ({:?})",
        plan.in_w,
        plan.in_h,
        plan.out_w,
        plan.out_h,
        plan.color_space
    );

    let mut src = RawFrame::new(plan.in_w, plan.in_h, plan.color_space, raw);
    let mut dst = RawFrame::empty(plan.out_w, plan.out_h, plan.color_space);
    resample_core::resample(&mut src, plan.out_w, plan.out_h, &mut dst)
        .map_err(|e| anyhow::anyhow!("resample failed: {e}"))?;

    fs::write(&cli.output, dst.into_bytes()).with_context(|| format!("writing {}", cli.output.display()))?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}
