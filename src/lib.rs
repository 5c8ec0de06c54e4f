// text2matrix/src/lib.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `text2matrix` renders a text string in a given font into a normalized
//! 2-D matrix of per-pixel ink-coverage values in `[0.0, 1.0]`, suitable as
//! a training image, a stencil, or a printable mask.
//!
//! The pipeline is font-metric-driven rather than bounding-box-driven:
//!
//! * a per-font size calibration makes glyphs of different fonts visually
//!   comparable in pixel height despite differing internal unit systems
//!   ([`normalize`]);
//! * an iterative solver finds the font size that renders a fixed probe
//!   string at an exact target pixel height ([`solver`]);
//! * rasterization anchors text to the font's ascender/descender band
//!   instead of naive glyph extents ([`raster`]).
//!
//! ```no_run
//! use std::sync::Arc;
//! use text2matrix::{text2matrix, FontCache, FontRef, Handle, RasterOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cache: FontCache = FontCache::new();
//! let bytes = std::fs::read("font.ttf")?;
//! let key = cache.add_font(&Handle::from_memory(Arc::new(bytes)), None)?;
//!
//! let matrix = text2matrix(
//!     "hello",
//!     FontRef::Key(&key),
//!     &cache,
//!     &RasterOptions::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod canvas;
pub mod error;
pub mod font;
pub mod handle;
pub mod loader;
pub mod metrics;
pub mod normalize;
pub mod outline;
pub mod raster;
pub mod solver;

mod utils;


pub use crate::cache::FontCache;
pub use crate::error::{FontLoadingError, RenderError, SelectionError};
pub use crate::font::Font;
pub use crate::handle::{FontRef, Handle};
pub use crate::loader::Loader;
pub use crate::metrics::{Metrics, ScaledMetrics};
pub use crate::normalize::SizeNormalizer;
pub use crate::raster::{rasterize, Layout, Raster, RasterOptions};
pub use crate::solver::{SolverMode, MAX_ITERATIONS, PROBE_STRING};

/// Rasterizes `text` and returns just the coverage matrix.
///
/// Row 0 is the topmost visual row; every value lies in `[0.0, 1.0]`; empty
/// or zero-extent text yields an empty matrix. See [`raster::rasterize`] for
/// the full result (dimensions and pivot).
pub fn text2matrix<'a, F, R>(
    text: &str,
    font: R,
    cache: &FontCache<F>,
    options: &RasterOptions,
) -> Result<Vec<Vec<f32>>, RenderError>
where
    F: Loader,
    R: Into<FontRef<'a, F>>,
    F: 'a,
{
    let font = font.into().resolve(cache)?;
    raster::rasterize(text, &*font, options).map(|raster| raster.matrix)
}

/// Finds the font size at which the font's probe string renders exactly
/// `max_height` pixels tall.
pub fn estimate_font_size<'a, F, R>(
    font: R,
    cache: &FontCache<F>,
    max_height: f32,
) -> Result<f32, RenderError>
where
    F: Loader,
    R: Into<FontRef<'a, F>>,
    F: 'a,
{
    let font = font.into().resolve(cache)?;
    solver::estimate_font_size(&*font, max_height)
}

/// Measures the rounded pixel height of the font's probe string at
/// `font_size`.
pub fn get_max_height<'a, F, R>(
    font: R,
    cache: &FontCache<F>,
    font_size: f32,
) -> Result<u32, RenderError>
where
    F: Loader,
    R: Into<FontRef<'a, F>>,
    F: 'a,
{
    let font = font.into().resolve(cache)?;
    solver::get_max_height(&*font, font_size)
}
