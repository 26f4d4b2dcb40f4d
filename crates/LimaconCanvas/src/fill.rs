//! # Fill Strategies
//!
//! Turns the closed-curve boundary point set into a filled appearance using
//! only line primitives; no polygon-fill primitive is assumed on the host
//! side. Two strategies exist and are selected by [`FillMode`] at Canvas
//! construction time:
//!
//! - [`CenterlineFill`]: one vertical chord per column, spanning the interior
//!   gap closest to the horizontal center line.
//! - [`QuadrantFill`]: radial fill toward the center line on the right half,
//!   full-gap spans on the left half, one color per quadrant.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CanvasStyle;
use crate::math;
use crate::render::{DrawCommand, RenderList};

/// Errors a fill strategy can hit. All of them are contained within a single
/// frame: the caller skips the fill and draws the outline only.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FillError {
    /// The surface has no drawable area.
    #[error("degenerate surface {width}x{height}")]
    DegenerateSurface { width: i32, height: i32 },
    /// The boundary crosses the horizontal center line fewer than two times,
    /// so no horizontal fill bounds exist.
    #[error("center-line fill needs at least 2 equator points, found {found}")]
    TooFewEquatorPoints { found: usize },
}

/// Selects which fill strategy the Canvas builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Center-line chord scan ([`CenterlineFill`]).
    #[default]
    Centerline,
    /// Per-quadrant scan ([`QuadrantFill`]).
    Quadrant,
}

/// A paint pass over the boundary point set, emitting fill-line commands.
///
/// Implementations never draw the boundary itself; the Canvas layers the
/// outline on top after the fill so it is never obscured.
pub trait FillStrategy {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Emits fill lines for `points` onto `out`.
    fn paint(
        &self,
        points: &[IVec2],
        width: i32,
        height: i32,
        style: &CanvasStyle,
        out: &mut RenderList,
    ) -> Result<(), FillError>;
}

/// Horizontal center-line scan.
///
/// The fill region is bounded by the equator points, the boundary pixels
/// lying exactly on `y == height / 2`. The rightmost equator hit is where the
/// closed curve re-crosses the center line at the outer lobe tip, so the
/// right bound is the *second*-to-maximum equator x. Within the bounds, each
/// column gets one vertical chord across the interior gap nearest the center
/// line.
pub struct CenterlineFill;

impl FillStrategy for CenterlineFill {
    fn name(&self) -> &'static str {
        "centerline"
    }

    fn paint(
        &self,
        points: &[IVec2],
        width: i32,
        height: i32,
        style: &CanvasStyle,
        out: &mut RenderList,
    ) -> Result<(), FillError> {
        if width <= 0 || height <= 0 {
            return Err(FillError::DegenerateSurface { width, height });
        }
        let center_y = height / 2;

        let mut equator: Vec<i32> = points
            .iter()
            .filter(|p| p.y == center_y)
            .map(|p| p.x)
            .collect();
        equator.sort_unstable();
        if equator.len() < 2 {
            return Err(FillError::TooFewEquatorPoints {
                found: equator.len(),
            });
        }
        let left = equator[0];
        let right = equator[equator.len() - 2];

        let columns = math::columns_by_x(points);
        for (&x, ys) in columns.range(left..=right) {
            // ys is ascending, so the halves split at the first y below the
            // center line. A column touching only one half has no gap to span.
            let split = ys.partition_point(|&y| y - center_y <= 0);
            if split == 0 || split == ys.len() {
                continue;
            }
            out.push(DrawCommand::Line {
                start: IVec2::new(x, ys[split - 1]),
                end: IVec2::new(x, ys[split]),
                color: style.accent_color,
                width: style.line_width,
            });
        }
        Ok(())
    }
}

/// Per-quadrant scan, one color per quadrant.
///
/// On the right half (quadrants I and IV) the curve is single-valued in x
/// near the axis, so every point gets a vertical line straight to the center
/// line. On the left half (quadrants II and III) columns span their full
/// local boundary gap instead, except near-degenerate columns (the pinched
/// lobe), which snap to the center line.
pub struct QuadrantFill {
    /// Columns with a vertical span under this many pixels count as pinched.
    pub min_lobe_span: i32,
}

impl FillStrategy for QuadrantFill {
    fn name(&self) -> &'static str {
        "quadrant"
    }

    fn paint(
        &self,
        points: &[IVec2],
        width: i32,
        height: i32,
        style: &CanvasStyle,
        out: &mut RenderList,
    ) -> Result<(), FillError> {
        if width <= 0 || height <= 0 {
            return Err(FillError::DegenerateSurface { width, height });
        }
        let center_x = width / 2;
        let center_y = height / 2;

        // Quadrant order matches `CanvasStyle::quadrant_colors`: I is the
        // top-right quadrant, then counter-clockwise.
        let mut quadrants: [Vec<IVec2>; 4] = Default::default();
        for p in points {
            let idx = match (p.x >= center_x, p.y < center_y) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            quadrants[idx].push(*p);
        }

        for (idx, quadrant) in quadrants.iter().enumerate() {
            if quadrant.is_empty() {
                continue;
            }
            let color = style.quadrant_colors[idx];
            if idx == 0 || idx == 3 {
                // Right half: radial fill toward the center line.
                for p in quadrant {
                    out.push(DrawCommand::Line {
                        start: *p,
                        end: IVec2::new(p.x, center_y),
                        color,
                        width: style.line_width,
                    });
                }
            } else {
                // Left half: span each column's boundary gap.
                for (&x, ys) in &math::columns_by_x(quadrant) {
                    let min_y = ys[0];
                    let max_y = ys[ys.len() - 1];
                    let end_y = if (max_y - min_y).abs() < self.min_lobe_span {
                        center_y
                    } else {
                        min_y
                    };
                    out.push(DrawCommand::Line {
                        start: IVec2::new(x, max_y),
                        end: IVec2::new(x, end_y),
                        color,
                        width: style.line_width,
                    });
                }
            }
        }
        Ok(())
    }
}
