use glam::Vec2;

use plane_simulator::renderer::{DrawCommand, RecordingSurface};
use plane_simulator::sim::{EndCause, GamePhase, GameState, Obstacle, TickInput, tick};
use plane_simulator::ui::GameOverOverlay;
use plane_simulator::{LoopState, Session, Tuning};

/// Tuning where a resting plane stays exactly where it is put
fn weightless() -> Tuning {
    Tuning {
        gravity: 0.0,
        ..Tuning::default()
    }
}

fn state_at(y: f32) -> GameState {
    let mut state = GameState::new(weightless(), 1);
    state.plane.pos.y = y;
    state
}

#[test]
fn boundary_edges() {
    for (y, over) in [(-1.0, true), (0.0, false), (580.0, false), (581.0, true)] {
        let mut state = state_at(y);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.is_over(), over, "plane at y={}", y);
        if over {
            assert_eq!(state.end_cause, Some(EndCause::OutOfBounds));
        }
    }
}

#[test]
fn known_collision_pairs() {
    let mut state = GameState::new(weightless(), 1);
    state.plane.pos = Vec2::new(40.0, 40.0);
    // Obstacles move 2 left before the check
    state.obstacles.push(Obstacle::new(32.0, 30.0, 50.0, 50.0));
    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::GameOver);

    let mut state = GameState::new(weightless(), 1);
    state.plane.pos = Vec2::new(0.0, 0.0);
    state.obstacles.push(Obstacle::new(202.0, 200.0, 50.0, 50.0));
    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn obstacles_scroll_into_the_plane() {
    let mut session = Session::new(weightless(), 9);
    let mut surface = RecordingSurface::new();
    session.state.obstacles.push(Obstacle::new(800.0, 290.0, 50.0, 50.0));

    let mut frames = 0;
    while session.frame(&mut surface) == LoopState::Running {
        frames += 1;
        assert!(frames < 1000, "obstacle never reached the plane");
    }
    // Obstacle left edge must pass x = 120 (plane right edge): 800 - 2n < 120
    assert_eq!(session.state.score, 341);
    assert_eq!(session.state.end_cause, Some(EndCause::Collision { obstacle: 0 }));
    assert_eq!(
        session.hud().overlay,
        Some(GameOverOverlay { final_score: 341 })
    );
}

#[test]
fn loop_stops_and_restart_resumes() {
    let mut session = Session::new(Tuning::default(), 77);
    let mut surface = RecordingSurface::new();

    // Free fall until the floor
    let mut frames = 0;
    while session.frame(&mut surface) == LoopState::Running {
        frames += 1;
        session.advance_spawn_clock(16);
    }
    assert_eq!(session.state.end_cause, Some(EndCause::OutOfBounds));
    let final_score = session.state.score;
    assert_eq!(final_score, frames + 1);

    let drawn = surface.frame_count();
    for _ in 0..10 {
        assert_eq!(session.frame(&mut surface), LoopState::Stopped);
    }
    assert_eq!(session.state.score, final_score);
    assert_eq!(surface.frame_count(), drawn);

    session.restart(78);
    assert_eq!(session.state.plane.pos, Vec2::new(100.0, 300.0));
    assert_eq!(session.state.plane.vel, Vec2::ZERO);
    assert_eq!(session.state.plane.angle, 0.0);
    assert!(session.state.obstacles.is_empty());
    assert_eq!(session.state.score, 0);
    assert!(!session.state.is_over());
    assert!(!session.hud().show_overlay());

    assert_eq!(session.frame(&mut surface), LoopState::Running);
    assert_eq!(session.state.score, 1);
    assert_eq!(surface.frame_count(), drawn + 1);
}

#[test]
fn each_frame_draws_plane_then_obstacles() {
    let mut session = Session::new(Tuning::default(), 4);
    let mut surface = RecordingSurface::new();
    session.on_spawn_timer();
    session.on_spawn_timer();
    session.frame(&mut surface);

    let frame = surface.last_frame();
    let fills: Vec<&DrawCommand> = frame
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
        .collect();
    assert_eq!(fills.len(), 3);
    assert_eq!(
        fills[0],
        &DrawCommand::FillRect { x: -10.0, y: -5.0, width: 20.0, height: 10.0 }
    );
    for (fill, obstacle) in fills[1..].iter().zip(&session.state.obstacles) {
        assert_eq!(
            *fill,
            &DrawCommand::FillRect {
                x: obstacle.pos.x,
                y: obstacle.pos.y,
                width: 50.0,
                height: 50.0
            }
        );
    }
}
