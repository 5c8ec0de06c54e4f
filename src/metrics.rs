// text2matrix/src/metrics.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Font-wide metrics, in design units and scaled to pixel sizes.

/// Various metrics that apply to the entire font, in font design units.
///
/// For OpenType fonts, these mostly come from the `hhea` and `OS/2` tables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// The number of font units per em.
    ///
    /// Font sizes are usually expressed in pixels per em; e.g. `12px` means
    /// 12 pixels per em.
    pub units_per_em: u32,

    /// The maximum amount the font rises above the baseline, in font units.
    pub ascent: f32,

    /// The maximum amount the font descends below the baseline, in font
    /// units.
    ///
    /// NB: This is typically a negative value to match the definition of
    /// `sTypoDescender` in the `OS/2` table in the OpenType specification.
    pub descent: f32,

    /// Distance between baselines, in font units.
    pub line_gap: f32,

    /// The approximate amount that uppercase letters rise above the
    /// baseline, in font units.
    pub cap_height: f32,

    /// The approximate amount that non-ascending lowercase letters rise
    /// above the baseline, in font units.
    pub x_height: f32,
}

/// The same metrics as [`Metrics`], scaled to a concrete pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledMetrics {
    /// Ascent in pixels (positive, above the baseline).
    pub ascent: f32,
    /// Descent in pixels (typically negative, below the baseline).
    pub descent: f32,
    /// Line gap in pixels.
    pub line_gap: f32,
    /// Cap height in pixels.
    pub cap_height: f32,
    /// X-height in pixels.
    pub x_height: f32,
}

impl Metrics {
    /// Scales every metric field from design units to the given pixel size.
    ///
    /// Each field is mapped as `value * size / units_per_em`, multiplying
    /// before dividing so that sizes that divide the em evenly stay exact.
    /// This is a pure function of `(self, size)`.
    pub fn at_size(&self, size: f32) -> ScaledMetrics {
        let upem = self.units_per_em as f32;
        ScaledMetrics {
            ascent: self.ascent * size / upem,
            descent: self.descent * size / upem,
            line_gap: self.line_gap * size / upem,
            cap_height: self.cap_height * size / upem,
            x_height: self.x_height * size / upem,
        }
    }
}

impl ScaledMetrics {
    /// The full vertical extent of the font at this size, from ascender to
    /// descender.
    #[inline]
    pub fn height(&self) -> f32 {
        (self.ascent - self.descent).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics {
            units_per_em: 1000,
            ascent: 800.0,
            descent: -200.0,
            line_gap: 200.0,
            cap_height: 700.0,
            x_height: 500.0,
        }
    }

    #[test]
    fn scales_linearly() {
        let scaled = metrics().at_size(12.0);
        assert_eq!(scaled.ascent, 9.6);
        assert_eq!(scaled.descent, -2.4);
        assert_eq!(scaled.cap_height, 8.4);
        assert_eq!(scaled.x_height, 6.0);
        assert_eq!(scaled.line_gap, 2.4);
        assert_eq!(scaled.height(), 12.0);
    }

    #[test]
    fn metric_ratios_are_scale_invariant() {
        let metrics = metrics();
        let small = metrics.at_size(8.0);
        let large = metrics.at_size(173.0);
        let ratio_small = small.cap_height / small.ascent;
        let ratio_large = large.cap_height / large.ascent;
        assert!((ratio_small - ratio_large).abs() < 1e-6);
    }
}
