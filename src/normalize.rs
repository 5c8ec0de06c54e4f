// text2matrix/src/normalize.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-font size calibration.
//!
//! Different fonts reach a given pixel height at different nominal sizes,
//! because their design metrics differ. [`SizeNormalizer`] is a linear map
//! from a requested nominal size to the font size that actually produces a
//! comparable visual height, fitted through two solver probes at load time.

use log::debug;

use crate::error::{FontLoadingError, RenderError};
use crate::loader::Loader;
use crate::solver;

/// The two anchor heights the calibration line is fitted through, in pixels.
const ANCHOR_X1: f32 = 8.0;
const ANCHOR_X2: f32 = 16.0;

/// A linear nominal-size-to-font-size mapping, `a * size + b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeNormalizer {
    a: f32,
    b: f32,
}

impl SizeNormalizer {
    /// The identity mapping. Used as a placeholder while a font is still
    /// being constructed.
    #[inline]
    pub fn identity() -> SizeNormalizer {
        SizeNormalizer { a: 1.0, b: 0.0 }
    }

    /// Fits the calibration line for `font`.
    ///
    /// Solves for the font sizes that render the probe string exactly
    /// [`ANCHOR_X1`] and [`ANCHOR_X2`] pixels tall, then takes the line
    /// through the two points. Run once per font, at construction.
    pub fn build<F>(font: &F) -> Result<SizeNormalizer, RenderError>
    where
        F: Loader,
    {
        let y1 = solver::estimate_font_size(font, ANCHOR_X1)?;
        let y2 = solver::estimate_font_size(font, ANCHOR_X2)?;

        // The anchors are fixed distinct constants, so the slope is only
        // degenerate if the solver itself returned garbage.
        let a = (y2 - y1) / (ANCHOR_X2 - ANCHOR_X1);
        let b = y1 - a * ANCHOR_X1;
        if !a.is_finite() || !b.is_finite() {
            return Err(RenderError::Loading(FontLoadingError::Calibration(
                format!("non-finite calibration line through ({}, {})", y1, y2),
            )));
        }

        debug!("calibrated size normalizer: a={} b={}", a, b);
        Ok(SizeNormalizer { a, b })
    }

    /// Maps a requested nominal size to the calibrated font size.
    #[inline]
    pub fn normalize(&self, size: f32) -> f32 {
        self.a * size + self.b
    }
}
