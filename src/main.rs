//! Plane Simulator entry point
//!
//! The web build boots the canvas game. The native build flies a headless
//! autopilot session and reports how it went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = plane_simulator::platform::web::run() {
        log::error!("Plane Simulator failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Plane Simulator (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let (session, surface) = autopilot::fly(plane_simulator::Tuning::default(), seed);
    println!(
        "Autopilot finished: score {} after {} frames, {} draw calls, end: {:?}",
        session.state.score,
        session.frames(),
        surface.commands.len(),
        session.state.end_cause
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use std::f32::consts::FRAC_PI_2;

    use plane_simulator::input::Control;
    use plane_simulator::renderer::RecordingSurface;
    use plane_simulator::{LoopState, Session, Tuning};

    /// ~60 Hz display refresh
    const FRAME_MS: u64 = 16;
    /// Ten minutes of play
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Point the nose up and hover around mid-screen with bang-bang thrust
    pub fn fly(tuning: Tuning, seed: u64) -> (Session, RecordingSurface) {
        let target_y = tuning.height / 2.0;
        let mut session = Session::new(tuning, seed);
        let mut surface = RecordingSurface::new();

        for _ in 0..MAX_FRAMES {
            let plane = &session.state.plane;
            let turn_left = plane.angle > -FRAC_PI_2;
            let thrust = plane.pos.y > target_y || plane.vel.y > 1.0;

            press(&mut session, Control::TurnLeft, turn_left);
            press(&mut session, Control::Forward, thrust);

            session.advance_spawn_clock(FRAME_MS);
            // Keep only the latest frame around
            surface.clear_commands();
            if session.frame(&mut surface) == LoopState::Stopped {
                break;
            }
        }

        (session, surface)
    }

    fn press(session: &mut Session, control: Control, held: bool) {
        if held {
            session.key_down(control.key_code());
        } else {
            session.key_up(control.key_code());
        }
    }
}
