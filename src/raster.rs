// text2matrix/src/raster.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rasterizes text into coverage matrices.
//!
//! The outline is measured once to size the surface, then rendered a second
//! time anchored for the chosen layout. Two layouts are supported:
//!
//! * [`Layout::BoundingBox`] sizes the output to the text's own tight
//!   bounding box, so different strings produce differently tall images.
//! * [`Layout::MetricAnchored`] fixes the output height to the font's
//!   ascender-to-descender band at the resolved size, so every string from
//!   the same font shares a baseline row; it also exposes a stable pivot for
//!   compositing.

use pathfinder_geometry::vector::{Vector2F, Vector2I};

use crate::canvas::{self, Canvas, Surface};
use crate::error::RenderError;
use crate::loader::Loader;
use crate::solver::{self, SolverMode};

/// How the output image is sized and the text anchored inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Size the output to the text's tight bounding box, baseline at the
    /// bottom edge.
    BoundingBox,
    /// Fix the output height to the font's ascender-to-descender extent and
    /// anchor the baseline to the ascender row.
    MetricAnchored,
}

impl Layout {
    /// The nominal font size used when the caller specifies neither
    /// `font_size` nor `max_height`. The two layouts historically shipped
    /// with different defaults.
    fn default_font_size(self) -> f32 {
        match self {
            Layout::BoundingBox => 11.0,
            Layout::MetricAnchored => 15.0,
        }
    }
}

impl Default for Layout {
    fn default() -> Layout {
        Layout::BoundingBox
    }
}

/// Options controlling sizing and layout of a rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// The nominal font size. Mutually exclusive with `max_height`.
    pub font_size: Option<f32>,
    /// A target pixel height for the font's probe string; the concrete font
    /// size is solved for. Mutually exclusive with `font_size`.
    pub max_height: Option<f32>,
    /// Whether `font_size` goes through the font's size normalizer so that
    /// the same nominal size looks comparable across fonts. On by default.
    pub normalize_size: bool,
    /// Extra advance between glyphs, in ems.
    pub letter_spacing: Option<f32>,
    /// The layout strategy.
    pub layout: Layout,
    /// The search strategy used when `max_height` is set.
    pub solver_mode: SolverMode,
}

impl Default for RasterOptions {
    fn default() -> RasterOptions {
        RasterOptions {
            font_size: None,
            max_height: None,
            normalize_size: true,
            letter_spacing: None,
            layout: Layout::default(),
            solver_mode: SolverMode::default(),
        }
    }
}

/// A rasterized string.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// A stable anchor for compositing: `(0, floor(ascent))`, the left end
    /// of the baseline. Only produced by [`Layout::MetricAnchored`].
    pub pivot: Option<Vector2I>,
    /// Row-major coverage values in `[0, 1]`; row 0 is the topmost visual
    /// row. Empty when the render has no extent.
    pub matrix: Vec<Vec<f32>>,
}

/// Resolves the concrete font size from the options' sizing request.
fn resolve_size<F>(font: &F, options: &RasterOptions) -> Result<f32, RenderError>
where
    F: Loader,
{
    match (options.font_size, options.max_height) {
        (Some(_), Some(_)) => Err(RenderError::SizeConflict),
        (None, Some(max_height)) => {
            solver::estimate_font_size_with(font, max_height, options.solver_mode)
        }
        (font_size, None) => {
            let size = font_size.unwrap_or_else(|| options.layout.default_font_size());
            if options.normalize_size {
                Ok(font.normalize_size(size))
            } else {
                Ok(size)
            }
        }
    }
}

/// Rasterizes `text` with `font` according to `options`.
pub fn rasterize<F>(text: &str, font: &F, options: &RasterOptions) -> Result<Raster, RenderError>
where
    F: Loader,
{
    let size = resolve_size(font, options)?;
    let spacing = options.letter_spacing;

    // First pass: measure the outline at the origin to size the surface.
    let measured = font.text_outline(text, size, Vector2F::zero(), spacing)?;
    let bounds = measured.bounding_box();

    let (width, height, pivot, origin) = match options.layout {
        Layout::BoundingBox => {
            let width = bounds.width().abs().ceil() as u32;
            let height = bounds.height().abs().round() as u32;
            let origin = Vector2F::new(0.0, height as f32);
            (width, height, None, origin)
        }
        Layout::MetricAnchored => {
            let scaled = font.metrics().at_size(size);
            let width = bounds.width().abs().ceil() as u32;
            let height = scaled.height().ceil() as u32;
            let pivot = Vector2I::new(0, scaled.ascent.floor() as i32);
            // Shift so the leftmost ink lands on x=0 and the baseline on
            // the ascender row.
            let origin = Vector2F::new(-bounds.origin().x(), scaled.ascent);
            (width, height, Some(pivot), origin)
        }
    };

    // Degenerate render (empty text, whitespace, zero-extent box): defined
    // as an empty matrix, never an error.
    let mut canvas = match Canvas::new(width, height) {
        Some(canvas) => canvas,
        None => {
            return Ok(Raster {
                width,
                height,
                pivot,
                matrix: Vec::new(),
            })
        }
    };

    // Second pass: render anchored for the layout.
    let outline = font.text_outline(text, size, origin, spacing)?;
    canvas.fill(&outline);

    Ok(Raster {
        width,
        height,
        pivot,
        matrix: canvas::coverage_matrix(&canvas),
    })
}
