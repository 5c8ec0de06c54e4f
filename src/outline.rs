// text2matrix/src/outline.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Vector outlines for laid-out text.
//!
//! An [`Outline`] is the Bézier path of an entire string, already positioned
//! in pixel space: glyph outlines arrive in font design units (y-up, origin
//! at the baseline) and are transformed here into surface coordinates
//! (y-down, origin at the top left) as they are accumulated.

use pathfinder_geometry::rect::RectF;
use pathfinder_geometry::vector::Vector2F;
use tiny_skia::{Path, PathBuilder};

/// A laid-out text path in pixel coordinates.
#[derive(Clone)]
pub struct Outline {
    path: Option<Path>,
}

impl Outline {
    /// Creates an outline that contains no ink at all.
    #[inline]
    pub fn empty() -> Outline {
        Outline { path: None }
    }

    /// Returns true if this outline contains no path segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    /// Returns the bounding box of the outline, in pixel coordinates.
    ///
    /// The box is computed from the path's points (curve control points
    /// included), so it can be slightly looser than the exact curve
    /// extents. An empty outline has a zero bounding box.
    pub fn bounding_box(&self) -> RectF {
        match self.path {
            None => RectF::new(Vector2F::zero(), Vector2F::zero()),
            Some(ref path) => {
                let bounds = path.bounds();
                RectF::new(
                    Vector2F::new(bounds.x(), bounds.y()),
                    Vector2F::new(bounds.width(), bounds.height()),
                )
            }
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
}

/// Accumulates glyph outline segments into an [`Outline`].
///
/// The builder holds the pen state for a left-to-right layout pass: a fixed
/// `origin` (the baseline position of the first glyph, in pixels), a scale
/// from design units to pixels, and the running horizontal advance.
pub struct OutlineBuilder {
    builder: PathBuilder,
    origin: Vector2F,
    scale: f32,
    advance: f32,
}

impl OutlineBuilder {
    /// Creates a builder whose first glyph's baseline origin is `origin`,
    /// with `scale` pixels per design unit.
    pub fn new(origin: Vector2F, scale: f32) -> OutlineBuilder {
        OutlineBuilder {
            builder: PathBuilder::new(),
            origin,
            scale,
            advance: 0.0,
        }
    }

    /// Moves the pen right by `units` design units.
    #[inline]
    pub fn advance_by(&mut self, units: f32) {
        self.advance += units;
    }

    #[inline]
    fn x(&self, x: f32) -> f32 {
        self.origin.x() + (self.advance + x) * self.scale
    }

    #[inline]
    fn y(&self, y: f32) -> f32 {
        // Design units are y-up; the surface is y-down.
        self.origin.y() - y * self.scale
    }

    /// Finishes the outline. Returns an empty outline if nothing was drawn.
    pub fn finish(self) -> Outline {
        Outline {
            path: self.builder.finish(),
        }
    }
}

impl ttf_parser::OutlineBuilder for OutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x(x), self.y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x(x), self.y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x(x1), self.y(y1), self.x(x), self.y(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x(x1),
            self.y(y1),
            self.x(x2),
            self.y(y2),
            self.x(x),
            self.y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
