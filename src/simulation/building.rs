//! Building catalog and per-instance state
//!
//! `BuildingKind` is the closed catalog: construction cost, monthly
//! economics, and residential capacity are immutable lookups on the kind,
//! which keeps the monthly budget pass a pure function of the grid.
//! `Building` carries the little state an individual structure has.

use serde::{Deserialize, Serialize};

use super::traffic_light::TrafficLight;

/// Income bucket a building's taxes land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeCategory {
    Residential,
    Commercial,
    Industrial,
}

/// Expense bucket a building's upkeep lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    Transportation,
    Health,
    Education,
    Safety,
    Utilities,
}

/// Every constructible structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Apartment,
    Condo,
    Shop,
    Mall,
    Restaurant,
    FastFood,
    Factory,
    Office,
    Warehouse,
    Road,
    Roundabout,
    TrafficLight,
    Hospital,
    Clinic,
    School,
    Library,
    PoliceStation,
    FireStation,
    PowerPlant,
    WaterTower,
    TownHall,
    Park,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 23] = [
        BuildingKind::House,
        BuildingKind::Apartment,
        BuildingKind::Condo,
        BuildingKind::Shop,
        BuildingKind::Mall,
        BuildingKind::Restaurant,
        BuildingKind::FastFood,
        BuildingKind::Factory,
        BuildingKind::Office,
        BuildingKind::Warehouse,
        BuildingKind::Road,
        BuildingKind::Roundabout,
        BuildingKind::TrafficLight,
        BuildingKind::Hospital,
        BuildingKind::Clinic,
        BuildingKind::School,
        BuildingKind::Library,
        BuildingKind::PoliceStation,
        BuildingKind::FireStation,
        BuildingKind::PowerPlant,
        BuildingKind::WaterTower,
        BuildingKind::TownHall,
        BuildingKind::Park,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuildingKind::House => "House",
            BuildingKind::Apartment => "Apartment",
            BuildingKind::Condo => "Condo",
            BuildingKind::Shop => "Shop",
            BuildingKind::Mall => "Mall",
            BuildingKind::Restaurant => "Restaurant",
            BuildingKind::FastFood => "Fast Food",
            BuildingKind::Factory => "Factory",
            BuildingKind::Office => "Office Building",
            BuildingKind::Warehouse => "Warehouse",
            BuildingKind::Road => "Road",
            BuildingKind::Roundabout => "Roundabout",
            BuildingKind::TrafficLight => "Traffic Light",
            BuildingKind::Hospital => "Hospital",
            BuildingKind::Clinic => "Clinic",
            BuildingKind::School => "School",
            BuildingKind::Library => "Library",
            BuildingKind::PoliceStation => "Police Station",
            BuildingKind::FireStation => "Fire Station",
            BuildingKind::PowerPlant => "Power Plant",
            BuildingKind::WaterTower => "Water Tower",
            BuildingKind::TownHall => "Town Hall",
            BuildingKind::Park => "Park",
        }
    }

    /// One-time construction cost.
    pub fn cost(&self) -> i64 {
        match self {
            BuildingKind::House => 500,
            BuildingKind::Apartment => 1200,
            BuildingKind::Condo => 2000,
            BuildingKind::Shop => 800,
            BuildingKind::Mall => 3000,
            BuildingKind::Restaurant => 1000,
            BuildingKind::FastFood => 600,
            BuildingKind::Factory => 3500,
            BuildingKind::Office => 2800,
            BuildingKind::Warehouse => 1500,
            BuildingKind::Road => 50,
            BuildingKind::Roundabout => 200,
            BuildingKind::TrafficLight => 150,
            BuildingKind::Hospital => 3000,
            BuildingKind::Clinic => 1200,
            BuildingKind::School => 2500,
            BuildingKind::Library => 1500,
            BuildingKind::PoliceStation => 2000,
            BuildingKind::FireStation => 1800,
            BuildingKind::PowerPlant => 4000,
            BuildingKind::WaterTower => 2500,
            BuildingKind::TownHall => 5000,
            BuildingKind::Park => 300,
        }
    }

    /// Tax revenue collected each monthly tick.
    pub fn monthly_income(&self) -> i64 {
        match self {
            BuildingKind::House => 50,
            BuildingKind::Apartment => 150,
            BuildingKind::Condo => 220,
            BuildingKind::Shop => 80,
            BuildingKind::Mall => 350,
            BuildingKind::Restaurant => 120,
            BuildingKind::FastFood => 90,
            BuildingKind::Factory => 400,
            BuildingKind::Office => 320,
            BuildingKind::Warehouse => 150,
            BuildingKind::TownHall => 100,
            _ => 0,
        }
    }

    /// Upkeep paid each monthly tick.
    pub fn monthly_expense(&self) -> i64 {
        match self {
            BuildingKind::Road => 5,
            BuildingKind::Roundabout => 10,
            BuildingKind::TrafficLight => 5,
            BuildingKind::Hospital => 200,
            BuildingKind::Clinic => 80,
            BuildingKind::School => 150,
            BuildingKind::Library => 60,
            BuildingKind::PoliceStation => 120,
            BuildingKind::FireStation => 110,
            BuildingKind::PowerPlant => 250,
            BuildingKind::WaterTower => 100,
            BuildingKind::TownHall => 50,
            BuildingKind::Park => 10,
            _ => 0,
        }
    }

    /// How many residents the structure can house. Zero for everything that
    /// is not residential.
    pub fn capacity(&self) -> u32 {
        match self {
            BuildingKind::House => 4,
            BuildingKind::Apartment => 12,
            BuildingKind::Condo => 16,
            _ => 0,
        }
    }

    /// Which income bucket this kind's taxes belong to. Town halls and
    /// parks stay unbucketed: they count toward the totals only.
    pub fn income_category(&self) -> Option<IncomeCategory> {
        match self {
            BuildingKind::House | BuildingKind::Apartment | BuildingKind::Condo => {
                Some(IncomeCategory::Residential)
            }
            BuildingKind::Shop
            | BuildingKind::Mall
            | BuildingKind::Restaurant
            | BuildingKind::FastFood => Some(IncomeCategory::Commercial),
            BuildingKind::Factory | BuildingKind::Office | BuildingKind::Warehouse => {
                Some(IncomeCategory::Industrial)
            }
            _ => None,
        }
    }

    /// Which expense bucket this kind's upkeep belongs to.
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        match self {
            BuildingKind::Road | BuildingKind::Roundabout | BuildingKind::TrafficLight => {
                Some(ExpenseCategory::Transportation)
            }
            BuildingKind::Hospital | BuildingKind::Clinic => Some(ExpenseCategory::Health),
            BuildingKind::School | BuildingKind::Library => Some(ExpenseCategory::Education),
            BuildingKind::PoliceStation | BuildingKind::FireStation => {
                Some(ExpenseCategory::Safety)
            }
            BuildingKind::PowerPlant | BuildingKind::WaterTower => {
                Some(ExpenseCategory::Utilities)
            }
            _ => None,
        }
    }

    /// Vehicles may drive on these.
    pub fn is_road(&self) -> bool {
        matches!(self, BuildingKind::Road | BuildingKind::Roundabout)
    }

    /// Kinds that carry a paired traffic signal.
    pub fn is_signal(&self) -> bool {
        matches!(self, BuildingKind::TrafficLight)
    }

    pub fn is_residential(&self) -> bool {
        self.capacity() > 0
    }
}

/// A constructed building on a tile.
///
/// `powered` / `watered` mirror the owning tile's utility flags after each
/// propagation pass. The signal payload exists only for signal-bearing
/// kinds, so demolishing the tile removes the signal with the building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
    pub powered: bool,
    pub watered: bool,
    pub signal: Option<TrafficLight>,
}

impl Building {
    pub fn new(kind: BuildingKind) -> Self {
        Self {
            kind,
            powered: false,
            watered: false,
            signal: kind.is_signal().then(TrafficLight::new),
        }
    }
}
