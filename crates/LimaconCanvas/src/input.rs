//! # Input Protocol
//!
//! This module defines the input state that the host application must pass to the
//! Canvas every frame. The Canvas never talks to an input device itself; the host
//! maps whatever windowing events it receives into this frame snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keyboard keys the Canvas cares about.
///
/// What each key *does* is decided by [`crate::config::KeyBindings`], not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Left,
    Right,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Keys pressed *this frame* (edge-triggered, not held).
    pub pressed_keys: Vec<Key>,
    /// Size of the drawable surface in pixels.
    ///
    /// The curve is regenerated from this every frame, so resizing the window
    /// needs no extra plumbing.
    pub screen_size: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pressed_keys: Vec::new(),
            screen_size: Vec2::new(640.0, 480.0), // Sound default
        }
    }
}
