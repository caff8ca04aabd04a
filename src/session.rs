//! Loop driver
//!
//! A [`Session`] owns everything one run needs: the game state, the held
//! keys and the spawn clock. Platform callbacks borrow it; nothing lives in
//! closure captures.

use crate::input::InputState;
use crate::renderer::{Surface, draw};
use crate::sim::{GameState, SpawnTimer, tick};
use crate::tuning::Tuning;
use crate::ui::HudView;

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; only a restart leaves this state
    Stopped,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    pub input: InputState,
    spawn_timer: SpawnTimer,
    frames: u64,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Starting session with seed {}", seed);
        Self {
            spawn_timer: SpawnTimer::new(tuning.spawn_interval_ms),
            state: GameState::new(tuning, seed),
            input: InputState::new(),
            frames: 0,
        }
    }

    pub fn loop_state(&self) -> LoopState {
        if self.state.is_over() {
            LoopState::Stopped
        } else {
            LoopState::Running
        }
    }

    /// Frames simulated and drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Forget every held key. Key-ups missed while the page was hidden
    /// would otherwise leave controls stuck on.
    pub fn release_keys(&mut self) {
        self.input = InputState::new();
    }

    /// Run one frame: step, then draw.
    ///
    /// Returns the state after the frame. The caller schedules the next
    /// frame only on `Running`; once stopped this does nothing.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopState {
        if self.loop_state() == LoopState::Stopped {
            return LoopState::Stopped;
        }
        let input = self.input.snapshot();
        tick(&mut self.state, &input);
        draw(&self.state, surface);
        self.frames += 1;
        self.loop_state()
    }

    /// One fire of the spawn interval
    pub fn on_spawn_timer(&mut self) {
        self.state.spawn_obstacle();
    }

    /// Drive the spawn clock from elapsed wall-clock time instead of a
    /// platform interval. Returns the number of obstacles spawned.
    pub fn advance_spawn_clock(&mut self, elapsed_ms: u64) -> u64 {
        let fires = self.spawn_timer.advance(elapsed_ms);
        for _ in 0..fires {
            self.on_spawn_timer();
        }
        fires
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        self.spawn_timer.interval_ms()
    }

    /// Discard everything and start over with the same tuning
    pub fn restart(&mut self, seed: u64) {
        let tuning = self.state.tuning.clone();
        log::info!("Restarting (previous score {})", self.state.score);
        *self = Session::new(tuning, seed);
    }

    pub fn hud(&self) -> HudView {
        HudView::project(self.state.score, self.state.is_over())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::{EndCause, Obstacle};
    use glam::Vec2;

    #[test]
    fn test_frame_steps_then_draws() {
        let mut session = Session::new(Tuning::default(), 1);
        let mut surface = RecordingSurface::new();

        assert_eq!(session.frame(&mut surface), LoopState::Running);
        assert_eq!(session.state.score, 1);
        assert_eq!(surface.frame_count(), 1);
        // Drawn position is the post-step position
        assert!(surface.last_frame().iter().any(|c| matches!(
            c,
            crate::renderer::DrawCommand::Translate { y, .. } if *y > 300.0
        )));
    }

    #[test]
    fn test_held_key_reaches_step() {
        let mut session = Session::new(Tuning::default(), 1);
        let mut surface = RecordingSurface::new();
        session.key_down("ArrowUp");
        session.frame(&mut surface);
        assert!(session.state.plane.vel.x > 0.0);

        session.key_up("ArrowUp");
        let vx = session.state.plane.vel.x;
        session.frame(&mut surface);
        assert!(session.state.plane.vel.x < vx);
    }

    #[test]
    fn test_stops_on_game_over() {
        let mut session = Session::new(Tuning::default(), 1);
        let mut surface = RecordingSurface::new();
        session.state.plane.pos = Vec2::new(200.0, 200.0);
        session.state.obstacles.push(Obstacle::new(190.0, 190.0, 50.0, 50.0));

        assert_eq!(session.frame(&mut surface), LoopState::Stopped);
        assert_eq!(session.state.end_cause, Some(EndCause::Collision { obstacle: 0 }));
        // The terminating frame is still drawn
        assert_eq!(surface.frame_count(), 1);

        for _ in 0..5 {
            assert_eq!(session.frame(&mut surface), LoopState::Stopped);
        }
        assert_eq!(session.state.score, 1);
        assert_eq!(session.frames(), 1);
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn test_release_keys_keeps_the_run() {
        let mut session = Session::new(Tuning::default(), 1);
        let mut surface = RecordingSurface::new();
        session.key_down("ArrowUp");
        session.key_down("ArrowLeft");
        session.frame(&mut surface);
        session.advance_spawn_clock(2000);

        session.release_keys();
        assert_eq!(session.input.snapshot(), crate::sim::TickInput::default());
        assert_eq!(session.state.score, 1);
        assert_eq!(session.state.obstacles.len(), 1);

        let vx = session.state.plane.vel.x;
        assert_eq!(session.frame(&mut surface), LoopState::Running);
        assert!(session.state.plane.vel.x < vx);
        assert_eq!(session.state.score, 2);
    }

    #[test]
    fn test_spawn_clock() {
        let mut session = Session::new(Tuning::default(), 1);
        assert_eq!(session.advance_spawn_clock(1999), 0);
        assert_eq!(session.advance_spawn_clock(2001), 2);
        assert_eq!(session.state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawning_continues_after_game_over() {
        let mut session = Session::new(Tuning::default(), 1);
        session.state.end(EndCause::OutOfBounds);
        session.on_spawn_timer();
        assert_eq!(session.state.obstacles.len(), 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = Session::new(Tuning::default(), 1);
        let mut surface = RecordingSurface::new();
        session.key_down("ArrowDown");
        session.advance_spawn_clock(5000);
        session.state.plane.pos.y = 599.0;
        assert_eq!(session.frame(&mut surface), LoopState::Stopped);
        assert!(session.hud().show_overlay());

        session.restart(2);
        assert_eq!(session.loop_state(), LoopState::Running);
        assert_eq!(session.state.plane.pos, Vec2::new(100.0, 300.0));
        assert_eq!(session.state.plane.vel, Vec2::ZERO);
        assert_eq!(session.state.plane.angle, 0.0);
        assert!(session.state.obstacles.is_empty());
        assert_eq!(session.state.score, 0);
        assert!(!session.input.is_held("ArrowDown"));
        assert_eq!(session.hud(), HudView::project(0, false));
        // The spawn clock starts over too
        assert_eq!(session.advance_spawn_clock(1000), 0);

        assert_eq!(session.frame(&mut surface), LoopState::Running);
        assert_eq!(session.state.score, 1);
    }
}
