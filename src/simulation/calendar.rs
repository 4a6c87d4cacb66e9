//! Game calendar and time of day
//!
//! A simple counter calendar: 24-hour days, fixed 30-day months, 12-month
//! years. The hour maps onto five day periods that drive sleep and
//! traffic side effects.

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_MONTH: u32 = 30;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Period of the day derived from the clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour % HOURS_PER_DAY {
            0..=5 => TimeOfDay::Dawn,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Dawn counts as night for sleep and traffic purposes.
    pub fn is_night(&self) -> bool {
        matches!(self, TimeOfDay::Night | TimeOfDay::Dawn)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "Dawn",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

/// Calendar position of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
}

impl GameDate {
    /// A new city starts on the first of the month at 6 AM.
    pub fn new(start_year: i32) -> Self {
        Self {
            year: start_year,
            month: 1,
            day: 1,
            hour: 6,
        }
    }

    pub fn advance_hour(&mut self) {
        self.hour += 1;
        if self.hour >= HOURS_PER_DAY {
            self.hour = 0;
            self.advance_day();
        }
    }

    pub fn advance_day(&mut self) {
        self.day += 1;
        if self.day > DAYS_PER_MONTH {
            self.day = 1;
            self.advance_month();
        }
    }

    pub fn advance_month(&mut self) {
        self.month += 1;
        if self.month > MONTHS_PER_YEAR {
            self.month = 1;
            self.year += 1;
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour)
    }

    pub fn formatted(&self) -> String {
        format!(
            "{:02}/{:02}/{:04} {:02}:00",
            self.month, self.day, self.year, self.hour
        )
    }
}
