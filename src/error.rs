use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while starting or configuring a game session.
///
/// Gameplay itself has no failure modes; running into an obstacle is
/// ordinary state (`GamePhase::GameOver`), not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// No window, document, canvas or 2D context to draw on. The session
    /// must not start.
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Tuning values that would make the simulation meaningless.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed.
    #[error(transparent)]
    TuningJson(#[from] serde_json::Error),

    /// A browser API call (listener or interval registration) failed.
    #[error("platform call failed: {0}")]
    Platform(String),
}
