use std::time::Duration;

use anyhow::Context;
use limacon_canvas::input::{InputState, Key};
use limacon_canvas::render::DrawCommand;
use limacon_canvas::{Canvas, CanvasConfig};
use macroquad::prelude as mq;
use serde::{Deserialize, Serialize};

/// Host-side settings layered on top of the canvas configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ViewerConfig {
    /// Fixed sleep between frames, in milliseconds.
    #[serde(default = "default_frame_sleep_ms")]
    frame_sleep_ms: u64,
    #[serde(default)]
    canvas: CanvasConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_sleep_ms: default_frame_sleep_ms(),
            canvas: CanvasConfig::default(),
        }
    }
}

fn default_frame_sleep_ms() -> u64 {
    10
}

/// Loads the viewer configuration from the JSON file given as the first
/// argument, or falls back to defaults when no path is given.
fn load_config() -> anyhow::Result<ViewerConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config file {path}"))
        }
        None => Ok(ViewerConfig::default()),
    }
}

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: "Pascal's Snail".to_string(),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

/// Maps this frame's macroquad key presses into the canvas input protocol.
fn gather_input() -> InputState {
    let mut pressed_keys = Vec::new();
    if mq::is_key_pressed(mq::KeyCode::Space) {
        pressed_keys.push(Key::Space);
    }
    if mq::is_key_pressed(mq::KeyCode::Left) {
        pressed_keys.push(Key::Left);
    }
    if mq::is_key_pressed(mq::KeyCode::Right) {
        pressed_keys.push(Key::Right);
    }
    InputState {
        pressed_keys,
        screen_size: glam::Vec2::new(mq::screen_width(), mq::screen_height()),
    }
}

fn to_mq_color(v: glam::Vec4) -> mq::Color {
    mq::Color::new(v.x, v.y, v.z, v.w)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e:?}");
            return;
        }
    };
    let frame_sleep = Duration::from_millis(config.frame_sleep_ms);
    let background = to_mq_color(config.canvas.style.background_color);
    let mut canvas = Canvas::new(config.canvas);

    // Quit is a flag checked at the top of each iteration, so teardown always
    // runs through the normal loop exit.
    mq::prevent_quit();
    loop {
        if mq::is_quit_requested() {
            break;
        }

        let input = gather_input();
        let (draw_list, events) = canvas.update(&input);
        for event in events {
            tracing::info!(?event, "canvas event");
        }

        mq::clear_background(background);
        for cmd in draw_list {
            match cmd {
                DrawCommand::Line {
                    start,
                    end,
                    color,
                    width,
                } => {
                    mq::draw_line(
                        start.x as f32,
                        start.y as f32,
                        end.x as f32,
                        end.y as f32,
                        width,
                        to_mq_color(color),
                    );
                }
                DrawCommand::Points {
                    points,
                    color,
                    size,
                } => {
                    let color = to_mq_color(color);
                    for p in points {
                        mq::draw_rectangle(p.x as f32, p.y as f32, size, size, color);
                    }
                }
            }
        }

        std::thread::sleep(frame_sleep);
        mq::next_frame().await
    }
}
