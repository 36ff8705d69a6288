//! The six named end-to-end scenarios from spec.md §8, each with explicit
//! inputs and expected behavior.

use resample_core::adapter::{DecoderRow, RawFrame, RowSink};
use resample_core::{fit_ratio, resample, ColorSpace};

fn run(width: u32, height: u32, cs: ColorSpace, data: Vec<u8>, out_w: u32, out_h: u32) -> Vec<u8> {
    let mut src = RawFrame::new(width, height, cs, data);
    let mut dst = RawFrame::empty(out_w, out_h, cs);
    resample(&mut src, out_w, out_h, &mut dst).unwrap();
    dst.into_bytes()
}

#[test]
fn scenario_1_greyscale_downscale_halves() {
    let row = vec![0u8, 64, 128, 192];
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&row);
    }
    let out = run(4, 4, ColorSpace::G, data, 2, 2);
    assert_eq!(out.len(), 4);
    // Every output row equal (input rows were identical).
    assert_eq!(&out[0..2], &out[2..4]);
    // Left output sample weighted toward the darker half, right toward the
    // brighter half.
    assert!(out[0] < out[1]);
    assert!(out[0] < 128);
    assert!(out[1] > 64);
}

#[test]
fn scenario_2_tiny_upscale_preserves_solid_color() {
    let out = run(1, 1, ColorSpace::Rgb, vec![255, 0, 0], 10, 10);
    assert_eq!(out.len(), 300);
    for px in out.chunks(3) {
        assert_eq!(px, [255, 0, 0]);
    }
}

#[test]
fn scenario_3_rgba_downscale_unpremultiplies_correctly() {
    let data = vec![
        255, 0, 0, 255, // opaque red
        0, 255, 0, 255, // opaque green
        0, 0, 255, 255, // opaque blue
        255, 255, 255, 0, // transparent white
    ];
    let out = run(2, 2, ColorSpace::Rgba, data, 1, 1);
    assert_eq!(out.len(), 4);
    assert_eq!(out[3], 191, "alpha = round(avg(255,255,255,0))");
    // By symmetry, equal contribution from each channel's source pixel.
    let (r, g, b) = (out[0] as i16, out[1] as i16, out[2] as i16);
    assert!((r - g).abs() <= 1);
    assert!((g - b).abs() <= 1);
    assert!(r > 0 && r < 255);
}

#[test]
fn scenario_4_gradient_downscale_stays_monotonic() {
    let mut data = Vec::new();
    for _j in 0..8u32 {
        for i in 0..8u32 {
            data.push(((i * 32) & 0xFF) as u8);
        }
    }
    let out = run(8, 8, ColorSpace::G, data, 4, 4);
    for row in out.chunks(4) {
        for w in row.windows(2) {
            assert!(w[0] <= w[1], "row not monotonic: {row:?}");
        }
    }
}

#[test]
fn scenario_5_aspect_fit_examples() {
    assert_eq!(fit_ratio(1000, 500, 300, 300).unwrap(), (300, 150));
    assert_eq!(fit_ratio(500, 1000, 300, 300).unwrap(), (150, 300));
    assert_eq!(fit_ratio(3, 2, 2, 2).unwrap(), (2, 1));
}

#[test]
fn scenario_6_identity_scale_round_trips_every_srgb_byte() {
    for b in [0u8, 1, 50, 128, 200, 254, 255] {
        let out = run(1, 1, ColorSpace::Rgb, vec![b, b, b], 1, 1);
        assert_eq!(out, vec![b, b, b], "byte {b} did not round-trip through identity scale");
    }
}
