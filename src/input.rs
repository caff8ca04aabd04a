//! Held-key tracking
//!
//! Key events arrive asynchronously; the simulation reads a snapshot once
//! per step.

use std::collections::HashMap;

use crate::sim::TickInput;

/// Abstract controls and the `KeyboardEvent.code` that drives each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    Reverse,
    TurnLeft,
    TurnRight,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Forward,
        Control::Reverse,
        Control::TurnLeft,
        Control::TurnRight,
    ];

    pub fn key_code(&self) -> &'static str {
        match self {
            Control::Forward => "ArrowUp",
            Control::Reverse => "ArrowDown",
            Control::TurnLeft => "ArrowLeft",
            Control::TurnRight => "ArrowRight",
        }
    }

    pub fn from_key_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key_code() == code)
    }
}

/// Last known held/released flag for every key seen so far
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Any identifier is accepted.
    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    /// Record a key-up. Any identifier is accepted.
    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, held: bool) {
        match self.held.get_mut(key) {
            Some(flag) => *flag = held,
            None => {
                self.held.insert(key.to_owned(), held);
            }
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    pub fn control_held(&self, control: Control) -> bool {
        self.is_held(control.key_code())
    }

    /// Controls as seen by one simulation step
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            forward: self.control_held(Control::Forward),
            reverse: self.control_held(Control::Reverse),
            turn_left: self.control_held(Control::TurnLeft),
            turn_right: self.control_held(Control::TurnRight),
        }
    }
}
