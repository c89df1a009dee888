/// Logical actions the player can trigger
///
/// The boundary layer maps whatever its input library reports onto this set,
/// so the simulation never depends on a key-code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SteerLeft,
    SteerRight,
    /// Start a new game
    Confirm,
    Quit,
}

/// Snapshot of the held controls for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub steer_left: bool,
    pub steer_right: bool,
    pub confirm: bool,
}

impl Controls {
    /// Controls steering in one direction and nothing else
    pub fn steering(left: bool, right: bool) -> Self {
        Self {
            steer_left: left,
            steer_right: right,
            confirm: false,
        }
    }

    /// Heading change for this frame. Holding both keys cancels out.
    pub fn heading_delta(&self, turn_rate: f32) -> f32 {
        let mut delta = 0.0;
        if self.steer_left {
            delta -= turn_rate;
        }
        if self.steer_right {
            delta += turn_rate;
        }
        delta
    }
}
