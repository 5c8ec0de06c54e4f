// text2matrix/src/solver.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The iterative font-size solver.
//!
//! Given a target pixel height, the solver searches for the font size at
//! which a fixed probe string renders exactly that tall. The measurement is
//! the rounded integer height of the probe's outline bounding box, so the
//! search terminates on exact integer equality.

use log::debug;
use pathfinder_geometry::vector::Vector2F;

use crate::error::RenderError;
use crate::loader::Loader;
use crate::utils;

/// The fixed probe text used for size calibration.
///
/// Deliberately constant so that calibration is stable across calls and
/// independent of caller-supplied text. The missing `X` is historical;
/// changing the string would change every calibrated size.
pub const PROBE_STRING: &str = "ABCDEFGHIJKLMNOPQRSTUVWYZ";

/// The iteration budget for either solver mode.
///
/// The legacy search can oscillate forever on unreachable targets; bounding
/// it turns that into a [`RenderError::DidNotConverge`].
pub const MAX_ITERATIONS: u32 = 256;

/// Which search strategy [`estimate_font_size_with`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverMode {
    /// Bracket the target geometrically, then bisect. Convergent for any
    /// monotonic measurement; this is the default.
    Bisection,
    /// The damped search earlier releases shipped: step by half the
    /// distance to a fixed zero anchor, never shrinking the step relative
    /// to prior probes. Kept for exact compatibility with the sizes those
    /// releases returned.
    Legacy,
}

impl Default for SolverMode {
    fn default() -> SolverMode {
        SolverMode::Bisection
    }
}

/// Measures the rounded pixel height of the probe string at `font_size`.
pub fn get_max_height<F>(font: &F, font_size: f32) -> Result<u32, RenderError>
where
    F: Loader,
{
    let outline = font.text_outline(PROBE_STRING, font_size, Vector2F::zero(), None)?;
    Ok(outline.bounding_box().height().abs().round() as u32)
}

/// Finds a font size at which the probe string renders exactly
/// `max_height` pixels tall, using the default solver mode.
pub fn estimate_font_size<F>(font: &F, max_height: f32) -> Result<f32, RenderError>
where
    F: Loader,
{
    estimate_font_size_with(font, max_height, SolverMode::default())
}

/// Finds a font size at which the probe string renders exactly
/// `max_height` pixels tall.
pub fn estimate_font_size_with<F>(
    font: &F,
    max_height: f32,
    mode: SolverMode,
) -> Result<f32, RenderError>
where
    F: Loader,
{
    let size = match mode {
        SolverMode::Bisection => solve_bisection(font, max_height),
        SolverMode::Legacy => solve_legacy(font, max_height),
    }?;
    debug!("solved size {} for target height {} ({:?})", size, max_height, mode);
    Ok(size)
}

/// Expands an upper bracket until the measurement reaches the target, then
/// bisects the bracket, returning as soon as the rounded measurement equals
/// the rounded target.
fn solve_bisection<F>(font: &F, max_height: f32) -> Result<f32, RenderError>
where
    F: Loader,
{
    let target = max_height.round() as u32;
    let mut iterations = 0;

    let mut lo = 0.0;
    let mut hi = max_height.max(1.0);
    while get_max_height(font, hi)? < target {
        lo = hi;
        hi *= 2.0;
        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            return Err(RenderError::DidNotConverge(iterations));
        }
    }

    while iterations < MAX_ITERATIONS {
        let mid = utils::lerp(lo, hi, 0.5);
        let height = get_max_height(font, mid)?;
        if height == target {
            return Ok(mid);
        }
        if height < target {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }
    Err(RenderError::DidNotConverge(MAX_ITERATIONS))
}

/// The historical search: `previous_size` stays anchored at zero, so each
/// step is half the current size rather than half a shrinking bracket.
/// Oscillates toward the target instead of bisecting; bounded by
/// [`MAX_ITERATIONS`] rather than trusted to converge.
fn solve_legacy<F>(font: &F, max_height: f32) -> Result<f32, RenderError>
where
    F: Loader,
{
    let previous_size = 0.0f32;
    let mut current_size = max_height;

    for _ in 0..MAX_ITERATIONS {
        let height = get_max_height(font, current_size)?;
        if height as f32 == max_height {
            return Ok(current_size);
        }
        let diff = (previous_size - current_size).abs();
        if (height as f32) < max_height {
            current_size += diff / 2.0;
        } else {
            current_size -= diff / 2.0;
        }
    }
    Err(RenderError::DidNotConverge(MAX_ITERATIONS))
}
