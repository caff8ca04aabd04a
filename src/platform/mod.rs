//! Platform layer
//!
//! Listener and timer registrations are held as [`Registration`] guards.
//! Dropping a guard releases what it holds exactly once, so tearing a
//! session down (restart, page hide, or dropping the runtime) never leaves a
//! listener or interval behind.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Drop guard for a listener or timer registration
pub struct Registration {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now instead of on drop
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("Releasing {}", self.label);
            release();
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
