// text2matrix/src/loader.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the font backend that parses font data and
//! produces laid-out text outlines.
//!
//! The sizing and rasterization pipeline is written entirely against this
//! trait; [`crate::font::Font`] is the `ttf-parser`-backed implementation
//! this crate ships.

use pathfinder_geometry::vector::Vector2F;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::FontLoadingError;
use crate::metrics::Metrics;
use crate::normalize::SizeNormalizer;
use crate::outline::Outline;

/// A loaded font that the pipeline can measure and outline text with.
pub trait Loader: Sized {
    /// Loads a font from raw font data (the contents of a `.ttf`/`.otf`/etc.
    /// file).
    ///
    /// The returned font is fully ready: metrics are extracted and the size
    /// normalizer is calibrated before this function returns.
    fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Self, FontLoadingError>;

    /// Loads a font from the path to a `.ttf`/`.otf`/etc. file.
    fn from_path<P>(path: P) -> Result<Self, FontLoadingError>
    where
        P: AsRef<Path>,
    {
        let bytes = fs::read(path)?;
        Loader::from_bytes(Arc::new(bytes))
    }

    /// Returns the font-wide metrics, in design units.
    fn metrics(&self) -> &Metrics;

    /// Returns the size calibration computed for this font at load time.
    fn size_normalizer(&self) -> &SizeNormalizer;

    /// Lays out `text` left to right at `size` pixels per em and returns its
    /// outline in pixel coordinates.
    ///
    /// `origin` is the baseline position of the first glyph. `letter_spacing`
    /// is expressed in ems and added to every glyph advance. Characters the
    /// font has no glyph for fall back to the font's notdef glyph.
    fn text_outline(
        &self,
        text: &str,
        size: f32,
        origin: Vector2F,
        letter_spacing: Option<f32>,
    ) -> Result<Outline, FontLoadingError>;

    /// Maps a nominal font size through the font's size normalizer.
    #[inline]
    fn normalize_size(&self, size: f32) -> f32 {
        self.size_normalizer().normalize(size)
    }
}
