//! Resource propagation engine
//!
//! Recomputes electricity and water coverage from scratch with a bounded
//! multi-source breadth-first search. Coverage spreads over 4-neighbors;
//! a reached tile is always marked, but the frontier only relays through
//! tiles that host a building, so raw terrain conducts a single hop past
//! the last structure and no further. Each source searches with its own
//! visited set and ranges overlap by union.

use std::collections::{HashSet, VecDeque};

use super::building::BuildingKind;
use super::map::CityMap;
use super::types::{GridPos, TerrainKind};

/// BFS depth electricity travels from a power plant.
pub const ELECTRICITY_RANGE: u32 = 20;
/// BFS depth water travels from a water tower or natural water tile.
pub const WATER_RANGE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Utility {
    Electricity,
    Water,
}

/// Recompute both coverages and mirror the result onto building state.
pub fn recompute(map: &mut CityMap) {
    update_electricity(map);
    update_water(map);
    mirror_to_buildings(map);
}

/// Recompute electricity coverage from every power plant.
pub fn update_electricity(map: &mut CityMap) {
    for tile in map.tiles_mut() {
        tile.has_electricity = false;
    }

    let sources: Vec<GridPos> = map
        .tiles()
        .filter(|t| {
            t.building
                .as_ref()
                .is_some_and(|b| b.kind == BuildingKind::PowerPlant)
        })
        .map(|t| t.pos())
        .collect();

    for source in sources {
        spread(map, source, ELECTRICITY_RANGE, Utility::Electricity);
    }
}

/// Recompute water coverage from every water tower and natural water tile.
pub fn update_water(map: &mut CityMap) {
    for tile in map.tiles_mut() {
        tile.has_water = false;
    }

    let sources: Vec<GridPos> = map
        .tiles()
        .filter(|t| {
            t.terrain == TerrainKind::Water
                || t.building
                    .as_ref()
                    .is_some_and(|b| b.kind == BuildingKind::WaterTower)
        })
        .map(|t| t.pos())
        .collect();

    for source in sources {
        spread(map, source, WATER_RANGE, Utility::Water);
    }
}

/// Bounded BFS from one source. Distance is graph depth, not Euclidean;
/// a tile exactly at `max_range` is covered but not expanded.
fn spread(map: &mut CityMap, source: GridPos, max_range: u32, utility: Utility) {
    let mut queue: VecDeque<(GridPos, u32)> = VecDeque::new();
    let mut visited: HashSet<GridPos> = HashSet::new();

    queue.push_back((source, 0));
    visited.insert(source);
    mark(map, source, utility);

    while let Some((current, dist)) = queue.pop_front() {
        if dist >= max_range {
            continue;
        }

        for next in map.neighbors4(current) {
            if !visited.insert(next) {
                continue;
            }

            mark(map, next, utility);

            // Only built tiles relay the frontier onward.
            let relays = map
                .tile(next.x, next.y)
                .is_some_and(|t| t.building.is_some());
            if relays {
                queue.push_back((next, dist + 1));
            }
        }
    }
}

fn mark(map: &mut CityMap, pos: GridPos, utility: Utility) {
    if let Some(tile) = map.tile_mut(pos.x, pos.y) {
        match utility {
            Utility::Electricity => tile.has_electricity = true,
            Utility::Water => tile.has_water = true,
        }
    }
}

/// Copy each tile's coverage onto the building standing on it.
fn mirror_to_buildings(map: &mut CityMap) {
    for tile in map.tiles_mut() {
        let (powered, watered) = (tile.has_electricity, tile.has_water);
        if let Some(building) = tile.building.as_mut() {
            building.powered = powered;
            building.watered = watered;
        }
    }
}
