use glam::Vec2;
use limacon_canvas::input::{InputState, Key};
use limacon_canvas::render::DrawCommand;
use limacon_canvas::{Canvas, CanvasConfig};

fn main() {
    println!("=== LimaconCanvas Headless Demo ===");

    // 1. Initialize Canvas
    let config = CanvasConfig::default();
    let mut canvas = Canvas::new(config);

    // 2. Simulate a few frames on a virtual 640x480 surface, pressing Space
    //    once per frame to walk through every curve profile.
    for frame in 0..4 {
        let pressed = if frame == 0 { vec![] } else { vec![Key::Space] };
        let input = InputState {
            pressed_keys: pressed,
            screen_size: Vec2::new(640.0, 480.0),
        };

        let (draw_list, events) = canvas.update(&input);

        let mut lines = 0;
        let mut outline_points = 0;
        for cmd in &draw_list {
            match cmd {
                DrawCommand::Line { .. } => lines += 1,
                DrawCommand::Points { points, .. } => outline_points += points.len(),
            }
        }

        println!("\n--- Frame {} ---", frame);
        println!("profile:        {:?}", canvas.drawer.profile());
        println!("fill lines:     {}", lines);
        println!("outline pixels: {}", outline_points);
        for event in events {
            println!("event:          {:?}", event);
        }
    }

    println!("\nDone. Pipe these commands into any renderer that can draw lines.");
}
