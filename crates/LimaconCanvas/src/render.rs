//! # Rendering System
//!
//! Instead of drawing directly, the Canvas outputs a display list of `DrawCommand`s.
//! The host application (macroquad, SDL, a software framebuffer, ...) is responsible
//! for interpreting these commands and drawing pixels.

use glam::{IVec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Surface Space** (integer pixels, origin top-left).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A straight line segment. Fill chords are vertical instances of this.
    Line {
        /// Start point in surface pixels.
        start: IVec2,
        /// End point in surface pixels.
        end: IVec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// A set of individual pixels sharing one color, used for the curve outline.
    Points {
        /// Pixel positions in surface space.
        points: Vec<IVec2>,
        /// Point color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Side length of the dot drawn per point, in pixels.
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
