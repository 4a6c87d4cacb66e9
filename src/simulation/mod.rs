//! Standalone city simulation module
//!
//! This module contains all the core city simulation logic. It runs
//! headless and can be exercised from the console or tests without any
//! rendering front end.

mod budget;
mod building;
mod calendar;
mod error;
mod map;
mod resident;
mod road_network;
mod tile;
mod traffic_light;
mod types;
mod utilities;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use budget::{CityBudget, MonthlyLedger};
#[allow(unused_imports)]
pub use building::{Building, BuildingKind, ExpenseCategory, IncomeCategory};
#[allow(unused_imports)]
pub use calendar::{GameDate, TimeOfDay, DAYS_PER_MONTH, HOURS_PER_DAY, MONTHS_PER_YEAR};
#[allow(unused_imports)]
pub use error::SimError;
#[allow(unused_imports)]
pub use map::CityMap;
#[allow(unused_imports)]
pub use resident::{Resident, ResidentMood, STARTING_HAPPINESS};
#[allow(unused_imports)]
pub use road_network::RoadNetwork;
#[allow(unused_imports)]
pub use tile::{Tile, MAX_TERRAIN_HEIGHT, MIN_TERRAIN_HEIGHT};
#[allow(unused_imports)]
pub use traffic_light::{
    LightState, TrafficLight, GREEN_DURATION, RED_DURATION, YELLOW_DURATION,
};
#[allow(unused_imports)]
pub use types::{
    GridPos, NaturalFeature, TerrainKind, TrafficDirection, ZoneKind, CARDINAL_DIRECTIONS,
    OFF_MAP_DESPAWN_MARGIN,
};
#[allow(unused_imports)]
pub use utilities::{update_electricity, update_water, ELECTRICITY_RANGE, WATER_RANGE};
#[allow(unused_imports)]
pub use vehicle::{Vehicle, VehicleKind};
pub use world::{
    CityWorld, DEFAULT_CITY_HAPPINESS, NIGHT_HAPPINESS_PENALTY, NIGHT_OWL_CHANCE, START_YEAR,
    STARTING_MONEY,
};
