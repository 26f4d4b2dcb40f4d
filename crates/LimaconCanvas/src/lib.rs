//! # LimaconCanvas
//!
//! `limacon_canvas` is a headless renderer for the limaçon curve family. It
//! handles curve generation, rotation, and interior region fills, while
//! delegating windowing and pixel output to the host application.
//!
//! ## Core Architecture
//! - **Curve (`src/curve.rs`)**: traces the parametric boundary into
//!   deduplicated integer surface pixels.
//! - **Fill (`src/fill.rs`)**: approximates an interior fill from the
//!   boundary set, behind the `FillStrategy` seam.
//! - **Render (`src/render.rs`)**: outputs a list of `DrawCommand`s for the
//!   host to render.

pub mod config;
pub mod curve;
pub mod fill;
pub mod input;
pub mod interaction;
pub mod math;
pub mod render;

use curve::CurveDrawer;
use fill::FillStrategy;
use input::InputState;
use render::{DrawCommand, RenderList};

// Re-exports for convenience
pub use config::{CanvasConfig, CanvasStyle, KeyBindings};
pub use curve::CurveProfile;
pub use fill::{FillError, FillMode};
pub use interaction::LogicEvent;

/// The main entry point for the library.
///
/// The `Canvas` owns the drawer state and the configured fill strategy. It is
/// intended to be instantiated once at window-open time and driven by the
/// host's frame loop; nothing is cached between frames, so window resizes and
/// state switches need no invalidation.
pub struct Canvas {
    /// Configuration settings.
    pub config: CanvasConfig,
    /// Curve state: current profile and rotation angle.
    pub drawer: CurveDrawer,
    fill: Box<dyn FillStrategy>,
}

impl Canvas {
    /// Creates a Canvas with the fill strategy named by `config.fill_mode`.
    pub fn new(config: CanvasConfig) -> Self {
        let fill: Box<dyn FillStrategy> = match config.fill_mode {
            FillMode::Centerline => Box::new(fill::CenterlineFill),
            FillMode::Quadrant => Box::new(fill::QuadrantFill {
                min_lobe_span: config.min_lobe_span,
            }),
        };
        Self::with_strategy(config, fill)
    }

    /// Creates a Canvas with an explicit fill strategy, bypassing `fill_mode`.
    pub fn with_strategy(config: CanvasConfig, fill: Box<dyn FillStrategy>) -> Self {
        let drawer = CurveDrawer::new(
            CurveProfile::InnerLoop,
            config.sample_step,
            config.rotation_step,
        );
        Self {
            config,
            drawer,
            fill,
        }
    }

    /// The core update loop.
    ///
    /// Call once per frame. Applies this frame's input to the drawer,
    /// regenerates the boundary for the current surface size, paints the
    /// interior fill, and layers the outline on top. Fill failures on
    /// degenerate surfaces are contained here: the frame degrades to an
    /// outline-only render and the loop goes on.
    pub fn update(&mut self, input: &InputState) -> (RenderList, Vec<LogicEvent>) {
        let mut events = Vec::new();
        interaction::handle_input(&mut self.drawer, &self.config, input, &mut events);

        let width = input.screen_size.x.round() as i32;
        let height = input.screen_size.y.round() as i32;
        let points = self.drawer.trace(width, height);
        tracing::trace!(
            points = points.len(),
            profile = ?self.drawer.profile(),
            "traced boundary"
        );

        let mut draw_list = RenderList::new();
        if let Err(err) = self
            .fill
            .paint(&points, width, height, &self.config.style, &mut draw_list)
        {
            tracing::debug!(%err, strategy = self.fill.name(), "skipping interior fill");
            draw_list.clear();
        }
        draw_list.push(DrawCommand::Points {
            points,
            color: self.config.style.outline_color,
            size: self.config.style.point_size,
        });

        (draw_list, events)
    }
}
