//! HUD projection
//!
//! The page chrome only ever shows the running score and, once the run is
//! over, an overlay with the final score and a restart button. This module
//! turns `(score, game_over)` into that view so the DOM code stays dumb.

use serde::Serialize;

/// Game-over overlay contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverOverlay {
    pub final_score: u64,
}

/// Everything the page shows outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudView {
    pub score: u64,
    /// Present only once the run has ended
    pub overlay: Option<GameOverOverlay>,
}

impl HudView {
    pub fn project(score: u64, game_over: bool) -> Self {
        Self {
            score,
            overlay: game_over.then_some(GameOverOverlay { final_score: score }),
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn show_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}
