//! Vehicle movement logic
//!
//! Vehicles follow a queue of waypoints one unit step per fast tick. Each
//! axis steps independently, so a vehicle closes on a diagonal waypoint
//! diagonally rather than axis-locked.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::types::GridPos;

/// Types of vehicles that appear on the roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
    Taxi,
    Police,
    Ambulance,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Car,
        VehicleKind::Truck,
        VehicleKind::Bus,
        VehicleKind::Taxi,
        VehicleKind::Police,
        VehicleKind::Ambulance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Bus => "Bus",
            VehicleKind::Taxi => "Taxi",
            VehicleKind::Police => "Police Car",
            VehicleKind::Ambulance => "Ambulance",
        }
    }

    /// Advisory speed rating. Motion is one tile per tick regardless; the
    /// rating is carried for display and future pacing.
    pub fn speed(&self) -> u32 {
        match self {
            VehicleKind::Car | VehicleKind::Taxi => 2,
            VehicleKind::Truck | VehicleKind::Bus => 1,
            VehicleKind::Police | VehicleKind::Ambulance => 3,
        }
    }

    /// Display color for the view layer.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            VehicleKind::Car => (0, 0, 255),
            VehicleKind::Truck => (128, 128, 128),
            VehicleKind::Bus => (255, 200, 0),
            VehicleKind::Taxi => (255, 255, 0),
            VehicleKind::Police => (0, 0, 255),
            VehicleKind::Ambulance => (255, 0, 0),
        }
    }
}

/// A vehicle somewhere on (or just off) the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub x: i32,
    pub y: i32,
    pub kind: VehicleKind,
    /// Remaining waypoints, front first.
    pub path: VecDeque<GridPos>,
    pub stopped: bool,
}

impl Vehicle {
    pub fn new(x: i32, y: i32, kind: VehicleKind) -> Self {
        Self {
            x,
            y,
            kind,
            path: VecDeque::new(),
            stopped: false,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    /// One movement step toward the next waypoint. A stopped vehicle or
    /// one with an empty path does nothing this tick.
    pub fn step(&mut self) {
        if self.stopped {
            return;
        }
        let next = match self.path.front() {
            Some(next) => *next,
            None => return,
        };

        if self.x < next.x {
            self.x += 1;
        } else if self.x > next.x {
            self.x -= 1;
        }

        if self.y < next.y {
            self.y += 1;
        } else if self.y > next.y {
            self.y -= 1;
        }

        if self.x == next.x && self.y == next.y {
            self.path.pop_front();
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn resume(&mut self) {
        self.stopped = false;
    }
}
