//! # Interaction
//!
//! Maps the frame's input snapshot onto drawer mutations, according to the
//! configured key bindings, and reports what changed as `LogicEvent`s.

use crate::config::CanvasConfig;
use crate::curve::{CurveDrawer, CurveProfile};
use crate::input::InputState;

/// Events emitted by the Canvas logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// The curve profile was switched; carries the new profile.
    ProfileSwitched(CurveProfile),
    /// The curve was rotated; carries the new absolute angle in radians.
    Rotated { angle: f64 },
}

/// Applies this frame's key presses to the drawer.
///
/// Unbound actions are unreachable from input but stay available on the
/// drawer API, so a host can still drive them directly.
pub fn handle_input(
    drawer: &mut CurveDrawer,
    config: &CanvasConfig,
    input: &InputState,
    events: &mut Vec<LogicEvent>,
) {
    let bindings = &config.bindings;
    for key in &input.pressed_keys {
        if bindings.switch_profile == Some(*key) {
            let profile = drawer.switch_profile();
            events.push(LogicEvent::ProfileSwitched(profile));
        } else if bindings.rotate_left == Some(*key) {
            drawer.rotate_left();
            events.push(LogicEvent::Rotated {
                angle: drawer.angle(),
            });
        } else if bindings.rotate_right == Some(*key) {
            drawer.rotate_right();
            events.push(LogicEvent::Rotated {
                angle: drawer.angle(),
            });
        }
    }
}
