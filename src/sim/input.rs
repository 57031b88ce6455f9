//! Control flags set by the host's input layer
//!
//! The host maps raw key-down/key-up events onto these flags; the
//! simulation only ever reads them. Fire is edge-triggered through the
//! ship's `can_fire` latch, which re-arms only after the flag drops.

/// A single player control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

/// Current state of all player controls
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl Controls {
    /// Update one control flag on press/release
    pub fn set(&mut self, control: Control, active: bool) {
        match control {
            Control::TurnLeft => self.turn_left = active,
            Control::TurnRight => self.turn_right = active,
            Control::Thrust => self.thrust = active,
            Control::Fire => self.fire = active,
        }
    }
}
