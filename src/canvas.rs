// text2matrix/src/canvas.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory pixel surfaces for text rasterization.
//!
//! The rasterizer is written against the [`Surface`] capability trait so the
//! drawing backend stays injectable at the boundary; [`Canvas`], backed by a
//! `tiny-skia` pixmap, is the implementation this crate ships.

use lazy_static::lazy_static;
use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use crate::outline::Outline;

lazy_static! {
    static ref ALPHA_TO_COVERAGE_LUT: [f32; 256] = {
        let mut lut = [0.0; 256];
        for (alpha, value) in lut.iter_mut().enumerate() {
            *value = alpha as f32 / 255.0;
        }
        lut
    };
}

/// A writable pixel surface that text outlines can be filled into.
pub trait Surface {
    /// The width of the surface, in pixels.
    fn width(&self) -> u32;

    /// The height of the surface, in pixels.
    fn height(&self) -> u32;

    /// Fills the outline with opaque ink, anti-aliased.
    fn fill(&mut self, outline: &Outline);

    /// The raw pixel data: RGBA per pixel, row-major, row 0 at the top.
    fn image_data(&self) -> &[u8];
}

/// An in-memory RGBA surface backed by a `tiny-skia` pixmap.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a new blank canvas with the given pixel size.
    ///
    /// The canvas is initialized with transparent black (all values 0).
    /// Returns `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Canvas> {
        Pixmap::new(width, height).map(|pixmap| Canvas { pixmap })
    }
}

impl Surface for Canvas {
    #[inline]
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill(&mut self, outline: &Outline) {
        let path = match outline.path() {
            None => return,
            Some(path) => path,
        };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        self.pixmap.fill_path(
            path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    #[inline]
    fn image_data(&self) -> &[u8] {
        self.pixmap.data()
    }
}

/// Reads back a surface's alpha channel as a row-major coverage matrix.
///
/// Row 0 is the topmost visual row; every value lies in `[0.0, 1.0]`.
pub fn coverage_matrix<S>(surface: &S) -> Vec<Vec<f32>>
where
    S: Surface,
{
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let data = surface.image_data();

    let mut matrix = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let alpha = data[(y * width + x) * 4 + 3];
            row.push(ALPHA_TO_COVERAGE_LUT[alpha as usize]);
        }
        matrix.push(row);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineBuilder;
    use pathfinder_geometry::vector::Vector2F;
    use ttf_parser::OutlineBuilder as _;

    fn square_outline() -> Outline {
        // A 2x2 pixel square covering the top-left corner. The builder's
        // baseline sits at y=2 so that design y=[0, 2] maps onto rows [0, 2).
        let mut builder = OutlineBuilder::new(Vector2F::new(0.0, 2.0), 1.0);
        builder.move_to(0.0, 0.0);
        builder.line_to(2.0, 0.0);
        builder.line_to(2.0, 2.0);
        builder.line_to(0.0, 2.0);
        builder.close();
        builder.finish()
    }

    #[test]
    fn zero_size_canvas_is_rejected() {
        assert!(Canvas::new(0, 4).is_none());
        assert!(Canvas::new(4, 0).is_none());
    }

    #[test]
    fn filled_square_has_full_coverage() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill(&square_outline());
        let matrix = coverage_matrix(&canvas);
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix[0].len(), 4);
        // Inside the square.
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[1][1], 1.0);
        // Outside the square.
        assert_eq!(matrix[3][3], 0.0);
        assert_eq!(matrix[0][3], 0.0);
        for row in &matrix {
            for &value in row {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn filling_an_empty_outline_is_a_no_op() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(&Outline::empty());
        let matrix = coverage_matrix(&canvas);
        assert!(matrix.iter().flatten().all(|&value| value == 0.0));
    }
}
