//! Residents and their moods

use serde::{Deserialize, Serialize};

use super::types::GridPos;

/// Happiness a new resident moves in with.
pub const STARTING_HAPPINESS: i32 = 75;

/// Discretized happiness bucket, derived whenever happiness changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidentMood {
    Happy,
    Content,
    Neutral,
    Unhappy,
    Angry,
}

impl ResidentMood {
    /// Fixed thresholds mapping happiness to a mood tier.
    pub fn from_happiness(happiness: i32) -> Self {
        if happiness >= 80 {
            ResidentMood::Happy
        } else if happiness >= 60 {
            ResidentMood::Content
        } else if happiness >= 40 {
            ResidentMood::Neutral
        } else if happiness >= 20 {
            ResidentMood::Unhappy
        } else {
            ResidentMood::Angry
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResidentMood::Happy => "Happy",
            ResidentMood::Content => "Content",
            ResidentMood::Neutral => "Neutral",
            ResidentMood::Unhappy => "Unhappy",
            ResidentMood::Angry => "Angry",
        }
    }
}

/// A citizen tied to the residential tile they moved into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resident {
    pub x: i32,
    pub y: i32,
    happiness: i32,
    mood: ResidentMood,
    pub birth_year: i32,
    pub age: i32,
    pub asleep: bool,
}

impl Resident {
    pub fn new(x: i32, y: i32, birth_year: i32) -> Self {
        Self {
            x,
            y,
            happiness: STARTING_HAPPINESS,
            mood: ResidentMood::from_happiness(STARTING_HAPPINESS),
            birth_year,
            age: 0,
            asleep: false,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn mood(&self) -> ResidentMood {
        self.mood
    }

    /// Shift happiness by `amount`, clamped to [0, 100]; the mood tier is
    /// recomputed on every change.
    pub fn adjust_happiness(&mut self, amount: i32) {
        self.happiness = (self.happiness + amount).clamp(0, 100);
        self.update_mood();
    }

    /// Recompute the mood tier from current happiness.
    pub fn update_mood(&mut self) {
        self.mood = ResidentMood::from_happiness(self.happiness);
    }

    /// Age is derived from the calendar, not accumulated.
    pub fn update_age(&mut self, current_year: i32) {
        self.age = current_year - self.birth_year;
    }
}
