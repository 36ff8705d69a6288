// SPDX-License-Identifier: MIT
//! # Color Space Tags
//!
//! This module defines the pixel layouts the resampler understands and their
//! component/alpha/gamma metadata.

/// Tagged pixel layout the resampler understands.
///
/// | Tag | Components | Alpha | sRGB gamma |
/// |---|---|---|---|
/// | G | 1 | no | no |
/// | GA | 2 | yes (premul) | no |
/// | RGB | 3 | no | yes |
/// | RGBX | 4 (last byte ignored) | no | yes |
/// | RGBA | 4 | yes (premul) | yes |
/// | CMYK | 4 | no | no |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    G,
    GA,
    Rgb,
    Rgbx,
    Rgba,
    Cmyk,
}

impl ColorSpace {
    /// Number of bytes per pixel on the wire.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            ColorSpace::G => 1,
            ColorSpace::GA => 2,
            ColorSpace::Rgb => 3,
            ColorSpace::Rgbx => 4,
            ColorSpace::Rgba => 4,
            ColorSpace::Cmyk => 4,
        }
    }

    /// Whether the last component is a premultiplied alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, ColorSpace::GA | ColorSpace::Rgba)
    }

    /// Whether color components carry sRGB gamma and must be linearized on input
    /// and re-encoded on output. Alpha, grey, and CMYK channels are always linear
    /// (spec.md §3 invariant 6).
    #[inline]
    pub const fn is_gamma_corrected(self) -> bool {
        matches!(self, ColorSpace::Rgb | ColorSpace::Rgbx | ColorSpace::Rgba)
    }

    /// Number of components that carry sRGB-gamma color data (as opposed to
    /// linear alpha/grey/CMYK channels).
    #[inline]
    pub const fn color_components(self) -> usize {
        match self {
            ColorSpace::G | ColorSpace::GA | ColorSpace::Cmyk => 0,
            ColorSpace::Rgb => 3,
            ColorSpace::Rgbx => 3,
            ColorSpace::Rgba => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_counts_match_spec_table() {
        assert_eq!(ColorSpace::G.components(), 1);
        assert_eq!(ColorSpace::GA.components(), 2);
        assert_eq!(ColorSpace::Rgb.components(), 3);
        assert_eq!(ColorSpace::Rgbx.components(), 4);
        assert_eq!(ColorSpace::Rgba.components(), 4);
        assert_eq!(ColorSpace::Cmyk.components(), 4);
    }

    #[test]
    fn alpha_flags_match_spec_table() {
        assert!(!ColorSpace::G.has_alpha());
        assert!(ColorSpace::GA.has_alpha());
        assert!(!ColorSpace::Rgb.has_alpha());
        assert!(!ColorSpace::Rgbx.has_alpha());
        assert!(ColorSpace::Rgba.has_alpha());
        assert!(!ColorSpace::Cmyk.has_alpha());
    }
}
