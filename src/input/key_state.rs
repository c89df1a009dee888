use crossterm::event::KeyEventKind;
use std::collections::HashMap;

use crate::game::{Action, Controls};

/// Frames a key stays held after its last press when the terminal never
/// reports releases
pub const HOLD_FRAMES: u64 = 15;

/// Tracks which logical actions are currently held down
///
/// Terminals with keyboard enhancement report key releases, so a key is held
/// from press to release. Other terminals only send presses and auto-repeats;
/// there a key counts as held for [`HOLD_FRAMES`] frames after the last one.
#[derive(Debug)]
pub struct KeyStates {
    reports_release: bool,
    frame: u64,
    last_pressed: HashMap<Action, u64>,
}

impl KeyStates {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            frame: 0,
            last_pressed: HashMap::new(),
        }
    }

    /// Record a key event for an action
    pub fn apply(&mut self, action: Action, kind: KeyEventKind) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_pressed.insert(action, self.frame);
            }
            KeyEventKind::Release => {
                self.last_pressed.remove(&action);
            }
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        match self.last_pressed.get(&action) {
            Some(_) if self.reports_release => true,
            Some(&frame) => self.frame - frame < HOLD_FRAMES,
            None => false,
        }
    }

    /// The controls the simulation sees this frame
    pub fn snapshot(&self) -> Controls {
        Controls {
            steer_left: self.is_held(Action::SteerLeft),
            steer_right: self.is_held(Action::SteerRight),
            confirm: self.is_held(Action::Confirm),
        }
    }

    /// Advance the frame counter, forgetting keys whose hold has run out
    pub fn end_frame(&mut self) {
        self.frame += 1;
        if !self.reports_release {
            let frame = self.frame;
            self.last_pressed
                .retain(|_, pressed| frame - *pressed < HOLD_FRAMES);
        }
    }

    /// Drop every held key, e.g. when focus is lost
    pub fn clear(&mut self) {
        self.last_pressed.clear();
    }
}
