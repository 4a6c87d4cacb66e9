//! Per-cell tile state
//!
//! A tile owns at most one building and one natural feature. Its utility
//! flags are derived state: only the propagation engine in `utilities`
//! writes them, and they are skipped on serialization so a loaded save can
//! never carry stale coverage.

use serde::{Deserialize, Serialize};

use super::building::Building;
use super::types::{GridPos, NaturalFeature, TerrainKind, TrafficDirection, ZoneKind};

/// Terrain height bounds for raise/lower tools.
pub const MIN_TERRAIN_HEIGHT: i32 = -10;
pub const MAX_TERRAIN_HEIGHT: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    x: i32,
    y: i32,
    height: i32,
    pub terrain: TerrainKind,
    pub zone: ZoneKind,
    pub building: Option<Building>,
    pub feature: Option<NaturalFeature>,
    #[serde(skip)]
    pub has_electricity: bool,
    #[serde(skip)]
    pub has_water: bool,
    pub traffic_direction: TrafficDirection,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            height: 0,
            terrain: TerrainKind::Grass,
            zone: ZoneKind::None,
            building: None,
            feature: None,
            has_electricity: false,
            has_water: false,
            traffic_direction: TrafficDirection::AllDirections,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set terrain height, clamped to the legal range.
    pub fn set_height(&mut self, height: i32) {
        self.height = height.clamp(MIN_TERRAIN_HEIGHT, MAX_TERRAIN_HEIGHT);
    }

    pub fn raise_height(&mut self) {
        if self.height < MAX_TERRAIN_HEIGHT {
            self.height += 1;
        }
    }

    pub fn lower_height(&mut self) {
        if self.height > MIN_TERRAIN_HEIGHT {
            self.height -= 1;
        }
    }

    /// Whether vehicles may drive on this tile.
    pub fn is_road(&self) -> bool {
        self.building.as_ref().is_some_and(|b| b.kind.is_road())
    }

    /// Empty means buildable: no building, no natural feature, not water.
    pub fn is_empty(&self) -> bool {
        self.building.is_none() && self.feature.is_none() && self.terrain != TerrainKind::Water
    }

    /// Clear the tile back to unimproved ground. The building (and any
    /// signal riding inside it), natural feature, and zoning all go; the
    /// traffic policy resets to its default.
    pub fn demolish(&mut self) {
        self.building = None;
        self.feature = None;
        self.zone = ZoneKind::None;
        self.traffic_direction = TrafficDirection::AllDirections;
    }

    /// Advance the traffic policy to the next value in its cycle.
    pub fn cycle_traffic_direction(&mut self) {
        self.traffic_direction = self.traffic_direction.next();
    }
}
