// text2matrix/src/font.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `ttf-parser`-backed font loader.
//!
//! `ttf_parser::Face` is a zero-copy view over the raw font bytes, so `Font`
//! keeps the bytes in an `Arc` and re-parses a view per operation; the parse
//! is validated once at load time. Metrics and the size normalizer are
//! computed during construction and never change afterwards.

use pathfinder_geometry::vector::Vector2F;
use std::sync::Arc;
use ttf_parser::{Face, FaceParsingError, GlyphId};

use crate::error::FontLoadingError;
use crate::loader::Loader;
use crate::metrics::Metrics;
use crate::normalize::SizeNormalizer;
use crate::outline::{Outline, OutlineBuilder};

/// A loaded TrueType/OpenType font.
#[derive(Debug)]
pub struct Font {
    data: Arc<Vec<u8>>,
    metrics: Metrics,
    normalizer: SizeNormalizer,
}

impl Font {
    /// Loads a font from raw `.ttf`/`.otf` data.
    pub fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Font, FontLoadingError> {
        let face = parse(&font_data)?;
        let metrics = Metrics {
            units_per_em: face.units_per_em() as u32,
            ascent: face.ascender() as f32,
            descent: face.descender() as f32,
            line_gap: face.line_gap() as f32,
            cap_height: face
                .capital_height()
                .ok_or(FontLoadingError::MissingMetrics("cap height"))?
                as f32,
            x_height: face
                .x_height()
                .ok_or(FontLoadingError::MissingMetrics("x-height"))?
                as f32,
        };
        drop(face);

        let mut font = Font {
            data: font_data,
            metrics,
            normalizer: SizeNormalizer::identity(),
        };
        font.normalizer = SizeNormalizer::build(&font)
            .map_err(|err| FontLoadingError::Calibration(err.to_string()))?;
        Ok(font)
    }

    /// The raw font data this font was loaded from.
    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }

    fn face(&self) -> Result<Face, FontLoadingError> {
        parse(&self.data)
    }
}

fn parse(data: &[u8]) -> Result<Face, FontLoadingError> {
    Face::parse(data, 0).map_err(|err| match err {
        FaceParsingError::UnknownMagic => FontLoadingError::UnknownFormat,
        err => FontLoadingError::Parse(err.to_string()),
    })
}

impl Loader for Font {
    fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Font, FontLoadingError> {
        Font::from_bytes(font_data)
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn size_normalizer(&self) -> &SizeNormalizer {
        &self.normalizer
    }

    fn text_outline(
        &self,
        text: &str,
        size: f32,
        origin: Vector2F,
        letter_spacing: Option<f32>,
    ) -> Result<Outline, FontLoadingError> {
        let face = self.face()?;
        let scale = size / self.metrics.units_per_em as f32;
        let spacing_units = letter_spacing.unwrap_or(0.0) * self.metrics.units_per_em as f32;

        let mut builder = OutlineBuilder::new(origin, scale);
        for ch in text.chars() {
            let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
            let _ = face.outline_glyph(glyph, &mut builder);
            let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
            builder.advance_by(advance + spacing_units);
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unrecognized_data() {
        let err = Font::from_bytes(Arc::new(vec![0xff; 64])).unwrap_err();
        assert_eq!(err, FontLoadingError::UnknownFormat);
    }

    #[test]
    fn rejects_truncated_data() {
        assert!(Font::from_bytes(Arc::new(Vec::new())).is_err());
        // A valid sfnt magic with nothing behind it.
        assert!(Font::from_bytes(Arc::new(vec![0x00, 0x01, 0x00, 0x00])).is_err());
    }
}
