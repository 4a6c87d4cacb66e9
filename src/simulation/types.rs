//! Core types for the city simulation
//!
//! Shared coordinate and terrain-level types that the rest of the
//! simulation builds on.

use serde::{Deserialize, Serialize};

/// The four cardinal neighbor offsets, in scan order.
pub const CARDINAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// How far past the map edge a vehicle may stray before it is despawned.
pub const OFF_MAP_DESPAWN_MARGIN: i32 = 5;

/// A tile coordinate on the city grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chessboard distance: the number of king moves between two tiles.
    pub fn chebyshev_distance(&self, other: &GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Taxicab distance along the grid axes.
    pub fn manhattan_distance(&self, other: &GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Ground cover of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    Grass,
    Water,
    Dirt,
    Sand,
}

/// Planning designation painted onto a tile, independent of whether a
/// building exists there yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    None,
    Residential,
    Commercial,
    Industrial,
}

/// A natural obstruction occupying an otherwise empty tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalFeature {
    Tree,
    Rock,
    Bush,
}

/// Traffic flow policy for a road tile.
///
/// `next` walks the seven values in declaration order and wraps, so a
/// road can be retoggled through every policy with repeated clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficDirection {
    North,
    South,
    East,
    West,
    NorthSouth,
    EastWest,
    AllDirections,
}

impl TrafficDirection {
    /// Whether a step of (dx, dy) may enter a tile with this policy.
    /// North is negative y, matching the grid's screen-style orientation.
    pub fn allows(&self, dx: i32, dy: i32) -> bool {
        match self {
            TrafficDirection::North => dy < 0,
            TrafficDirection::South => dy > 0,
            TrafficDirection::East => dx > 0,
            TrafficDirection::West => dx < 0,
            TrafficDirection::NorthSouth => dy != 0,
            TrafficDirection::EastWest => dx != 0,
            TrafficDirection::AllDirections => true,
        }
    }

    /// The next policy in the cycle.
    pub fn next(&self) -> TrafficDirection {
        match self {
            TrafficDirection::North => TrafficDirection::South,
            TrafficDirection::South => TrafficDirection::East,
            TrafficDirection::East => TrafficDirection::West,
            TrafficDirection::West => TrafficDirection::NorthSouth,
            TrafficDirection::NorthSouth => TrafficDirection::EastWest,
            TrafficDirection::EastWest => TrafficDirection::AllDirections,
            TrafficDirection::AllDirections => TrafficDirection::North,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            TrafficDirection::North => "^",
            TrafficDirection::South => "v",
            TrafficDirection::East => ">",
            TrafficDirection::West => "<",
            TrafficDirection::NorthSouth => "|",
            TrafficDirection::EastWest => "-",
            TrafficDirection::AllDirections => "+",
        }
    }
}

impl Default for TrafficDirection {
    fn default() -> Self {
        TrafficDirection::AllDirections
    }
}
