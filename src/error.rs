// text2matrix/src/error.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `text2matrix` can return.

use std::io;
use thiserror::Error;

/// Reasons why a font might fail to load.
///
/// This error is `Clone` because the font cache replays a failed load to
/// every caller that raced on the same key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FontLoadingError {
    /// The data was of a format the parser didn't recognize.
    #[error("unknown format")]
    UnknownFormat,

    /// Attempted to load a malformed or corrupted font.
    #[error("parse error: {0}")]
    Parse(String),

    /// The font lacks a metrics table field this crate requires (for
    /// example, an `OS/2` table without a cap-height).
    #[error("missing `{0}` in the font's metrics tables")]
    MissingMetrics(&'static str),

    /// The size calibration run at load time failed for this font.
    #[error("size calibration failed: {0}")]
    Calibration(String),

    /// A disk or similar I/O error occurred while attempting to load the
    /// font.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for FontLoadingError {
    fn from(error: io::Error) -> FontLoadingError {
        FontLoadingError::Io(error.to_string())
    }
}

/// Reasons why a cache lookup might fail to produce a font.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The key references a font that was never loaded (or was removed).
    #[error("font not loaded")]
    NotLoaded,
}

/// Reasons why sizing or rasterization might fail.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RenderError {
    /// `font_size` and `max_height` were both set; they are mutually
    /// exclusive.
    #[error("`font_size` and `max_height` are mutually exclusive")]
    SizeConflict,

    /// The size solver exhausted its iteration budget without landing on
    /// the target height.
    #[error("size solver did not converge after {0} iterations")]
    DidNotConverge(u32),

    /// The referenced font was not in the cache.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The font data could not be reinterpreted during rendering.
    #[error(transparent)]
    Loading(#[from] FontLoadingError),
}
