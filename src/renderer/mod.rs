//! 2D rendering
//!
//! The playfield is redrawn from scratch every frame through the [`Surface`]
//! trait. On the web that is a canvas 2D context; headless runs and tests
//! use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};

use crate::sim::GameState;

/// Plane fill color
pub const PLANE_COLOR: &str = "blue";
/// Obstacle fill color
pub const OBSTACLE_COLOR: &str = "red";
/// Drawn plane body, centered on the plane position before rotation
pub const PLANE_BODY: [f32; 4] = [-10.0, -5.0, 20.0, 10.0];

/// Immediate-mode drawing primitives
pub trait Surface {
    /// Erase the area from the origin to (width, height)
    fn clear(&mut self, width: f32, height: f32);
    /// Push the current transform and fill style
    fn save(&mut self);
    /// Pop back to the last `save`
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate subsequent drawing by `angle` radians
    fn rotate(&mut self, angle: f32);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Draw the current state. Never mutates it.
pub fn draw<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let tuning = &state.tuning;
    surface.clear(tuning.width, tuning.height);

    // Plane: rotated body around its position
    let plane = &state.plane;
    let [x, y, w, h] = PLANE_BODY;
    surface.save();
    surface.translate(plane.pos.x, plane.pos.y);
    surface.rotate(plane.angle);
    surface.set_fill_color(PLANE_COLOR);
    surface.fill_rect(x, y, w, h);
    surface.restore();

    // Obstacles: unrotated, at their bounds
    surface.set_fill_color(OBSTACLE_COLOR);
    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.pos.x, obstacle.pos.y, obstacle.size.x, obstacle.size.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.plane.angle = 0.5;
        state.obstacles.push(Obstacle::new(400.0, 10.0, 50.0, 50.0));
        state.obstacles.push(Obstacle::new(600.0, 200.0, 50.0, 50.0));

        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear { width: 800.0, height: 600.0 },
                DrawCommand::Save,
                DrawCommand::Translate { x: 100.0, y: 300.0 },
                DrawCommand::Rotate { angle: 0.5 },
                DrawCommand::SetFillColor("blue".into()),
                DrawCommand::FillRect { x: -10.0, y: -5.0, width: 20.0, height: 10.0 },
                DrawCommand::Restore,
                DrawCommand::SetFillColor("red".into()),
                DrawCommand::FillRect { x: 400.0, y: 10.0, width: 50.0, height: 50.0 },
                DrawCommand::FillRect { x: 600.0, y: 200.0, width: 50.0, height: 50.0 },
            ]
        );
    }

    #[test]
    fn test_draw_is_read_only() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.spawn_obstacle();
        let before = (state.plane.clone(), state.obstacles.clone(), state.score);

        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        draw(&state, &mut surface);

        assert_eq!((state.plane.clone(), state.obstacles.clone(), state.score), before);
        assert_eq!(surface.fill_rect_count(), 4);
    }
}
