//! # Configuration
//!
//! This module defines the configuration struct for the Canvas.

use serde::{Deserialize, Serialize};

use crate::fill::FillMode;
use crate::input::Key;

/// Configuration parameters for the Canvas.
///
/// These settings allow the host application to tune the geometry sampling,
/// the fill behavior and the key mapping without touching core code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Parameter increment for the curve sweep, in radians. Default: 0.001.
    pub sample_step: f64,
    /// Angle applied per rotate command, in radians. Default: PI / 60.
    pub rotation_step: f64,
    /// Which fill strategy to build at Canvas construction time.
    ///
    /// This is a per-run choice; changing it after construction has no effect.
    pub fill_mode: FillMode,
    /// Vertical span below which a left-half column is treated as a pinched
    /// lobe by the quadrant fill, in pixels. Default: 10.
    pub min_lobe_span: i32,
    /// Key-to-action mapping.
    #[serde(default)]
    pub bindings: KeyBindings,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: CanvasStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            sample_step: 0.001,
            rotation_step: std::f64::consts::PI / 60.0,
            fill_mode: FillMode::Centerline,
            min_lobe_span: 10,
            bindings: KeyBindings::default(),
            style: CanvasStyle::default(),
        }
    }
}

/// Maps keys to canvas actions.
///
/// Every action is optional: an unbound action stays reachable through the
/// drawer API but is simply not wired to any key. Only profile switching is
/// bound out of the box; rotation bindings are left to the host configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Advance to the next curve profile. Default: Space.
    pub switch_profile: Option<Key>,
    /// Rotate the curve counter-clockwise. Default: unbound.
    pub rotate_left: Option<Key>,
    /// Rotate the curve clockwise. Default: unbound.
    pub rotate_right: Option<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            switch_profile: Some(Key::Space),
            rotate_left: None,
            rotate_right: None,
        }
    }
}

/// Visual styling configuration for the Canvas.
///
/// Colors are `glam::Vec4` RGBA in 0.0 - 1.0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasStyle {
    /// Background color the host should clear with.
    pub background_color: glam::Vec4,
    /// Color of the curve boundary, drawn on top of any fill.
    pub outline_color: glam::Vec4,
    /// Fill chord color used by the center-line fill.
    pub accent_color: glam::Vec4,
    /// One fill color per quadrant (I, II, III, IV) for the quadrant fill.
    pub quadrant_colors: [glam::Vec4; 4],
    /// Thickness of fill lines in pixels.
    pub line_width: f32,
    /// Dot size for outline points in pixels.
    pub point_size: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background_color: glam::Vec4::new(0.0, 0.0, 0.0, 1.0),
            outline_color: glam::Vec4::new(1.0, 1.0, 1.0, 1.0),
            accent_color: glam::Vec4::new(1.0, 1.0, 0.0, 1.0),
            quadrant_colors: [
                glam::Vec4::new(0.9, 0.2, 0.2, 1.0),
                glam::Vec4::new(0.2, 0.8, 0.3, 1.0),
                glam::Vec4::new(0.3, 0.5, 1.0, 1.0),
                glam::Vec4::new(1.0, 0.6, 0.1, 1.0),
            ],
            line_width: 1.0,
            point_size: 1.0,
        }
    }
}
