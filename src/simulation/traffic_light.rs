//! Traffic light state machine
//!
//! A countdown-driven signal that cycles green -> yellow -> red forever.
//! Nothing external can force a transition; the cycle only moves when the
//! countdown for the current state runs out.

use serde::{Deserialize, Serialize};

/// Fast ticks spent in the green state.
pub const GREEN_DURATION: u32 = 60;
/// Fast ticks spent in the yellow state.
pub const YELLOW_DURATION: u32 = 20;
/// Fast ticks spent in the red state.
pub const RED_DURATION: u32 = 60;

/// Signal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

/// A traffic signal paired with a signal-bearing building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficLight {
    state: LightState,
    timer: u32,
}

impl TrafficLight {
    /// A new light starts green with a full countdown.
    pub fn new() -> Self {
        Self {
            state: LightState::Green,
            timer: GREEN_DURATION,
        }
    }

    /// Advance the countdown by one fast tick, switching state when it
    /// reaches zero.
    pub fn update(&mut self) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.switch_state();
        }
    }

    fn switch_state(&mut self) {
        match self.state {
            LightState::Green => {
                self.state = LightState::Yellow;
                self.timer = YELLOW_DURATION;
            }
            LightState::Yellow => {
                self.state = LightState::Red;
                self.timer = RED_DURATION;
            }
            LightState::Red => {
                self.state = LightState::Green;
                self.timer = GREEN_DURATION;
            }
        }
    }

    /// Vehicles must hold at a yellow or red signal.
    pub fn should_stop(&self) -> bool {
        matches!(self.state, LightState::Yellow | LightState::Red)
    }

    pub fn state(&self) -> LightState {
        self.state
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}
