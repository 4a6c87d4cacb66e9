//! Main simulation world that ties everything together
//!
//! This is the entry point for driving the city simulation. An external
//! presentation layer calls the mutation operations and the two tick
//! cadences, and reads state back once per frame to render. The world is
//! single-threaded and every operation is a finite synchronous sweep; the
//! driver is responsible for not re-entering it.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::budget::{CityBudget, MonthlyLedger};
use super::building::{Building, BuildingKind, ExpenseCategory, IncomeCategory};
use super::calendar::{GameDate, TimeOfDay};
use super::error::SimError;
use super::map::CityMap;
use super::resident::Resident;
use super::road_network::RoadNetwork;
use super::types::{GridPos, NaturalFeature, TerrainKind, ZoneKind, OFF_MAP_DESPAWN_MARGIN};
use super::utilities;
use super::vehicle::{Vehicle, VehicleKind};

/// Cash a new city starts with.
pub const STARTING_MONEY: i64 = 50_000;
/// Calendar year a new city starts in.
pub const START_YEAR: i32 = 2000;
/// City happiness reported when there are no residents to average.
pub const DEFAULT_CITY_HAPPINESS: f64 = 75.0;
/// Chance a resident stays up through a night period instead of sleeping.
pub const NIGHT_OWL_CHANCE: f64 = 0.125;
/// Happiness lost by a resident who stays awake into the night.
pub const NIGHT_HAPPINESS_PENALTY: i32 = 2;

/// The main simulation world
#[derive(Serialize, Deserialize)]
pub struct CityWorld {
    /// The tile grid; sole owner of every tile.
    pub map: CityMap,

    /// All residents. They reference tiles by coordinate only.
    pub residents: Vec<Resident>,

    /// All vehicles, exclusively owned by the simulation.
    pub vehicles: Vec<Vehicle>,

    money: i64,
    population: u32,
    monthly_income: i64,
    monthly_expenses: i64,
    city_happiness: f64,
    budget: CityBudget,
    date: GameDate,
    time_of_day: TimeOfDay,

    /// Optional seeded RNG for reproducible simulations.
    #[serde(skip)]
    rng: Option<StdRng>,
}

impl CityWorld {
    fn new_internal(map: CityMap, rng: Option<StdRng>) -> Self {
        Self {
            map,
            residents: Vec::new(),
            vehicles: Vec::new(),
            money: STARTING_MONEY,
            population: 0,
            monthly_income: 0,
            monthly_expenses: 0,
            city_happiness: DEFAULT_CITY_HAPPINESS,
            budget: CityBudget::new(STARTING_MONEY),
            date: GameDate::new(START_YEAR),
            time_of_day: TimeOfDay::Morning,
            rng,
        }
    }

    /// A new city with generated terrain.
    pub fn new(width: i32, height: i32) -> Self {
        let map = CityMap::generate(width, height, &mut rand::rng());
        Self::new_internal(map, None)
    }

    /// A new city with a seeded RNG for reproducible terrain and spawns.
    pub fn new_with_seed(width: i32, height: i32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = CityMap::generate(width, height, &mut rng);
        Self::new_internal(map, Some(rng))
    }

    /// A new city on bare flat grass, for controlled scenarios.
    pub fn new_flat(width: i32, height: i32) -> Self {
        Self::new_internal(CityMap::flat(width, height), None)
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Roll a probability, using seeded RNG if available
    fn random_bool(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn set_money(&mut self, money: i64) {
        self.money = money;
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn city_happiness(&self) -> f64 {
        self.city_happiness
    }

    pub fn monthly_income(&self) -> i64 {
        self.monthly_income
    }

    pub fn monthly_expenses(&self) -> i64 {
        self.monthly_expenses
    }

    pub fn budget(&self) -> &CityBudget {
        &self.budget
    }

    pub fn date(&self) -> &GameDate {
        &self.date
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Construct a building, deducting its cost first. A failed placement
    /// leaves both the balance and the grid unchanged.
    pub fn place(&mut self, x: i32, y: i32, kind: BuildingKind) -> Result<(), SimError> {
        let tile = self.map.tile(x, y).ok_or(SimError::OutOfBounds { x, y })?;
        if !tile.is_empty() {
            return Err(SimError::TileOccupied { x, y });
        }

        let cost = kind.cost();
        if self.money < cost {
            return Err(SimError::InsufficientFunds {
                cost,
                balance: self.money,
            });
        }

        self.money -= cost;
        if let Some(tile) = self.map.tile_mut(x, y) {
            tile.building = Some(Building::new(kind));
        }
        debug!("placed {} at ({}, {})", kind.name(), x, y);
        Ok(())
    }

    /// Clear a tile: building (with any signal it carries), natural
    /// feature, zoning, and traffic policy all reset together.
    pub fn demolish(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        let tile = self
            .map
            .tile_mut(x, y)
            .ok_or(SimError::OutOfBounds { x, y })?;
        tile.demolish();
        debug!("demolished tile ({}, {})", x, y);
        Ok(())
    }

    /// Paint a planning zone. Only permitted on an empty tile.
    pub fn set_zone(&mut self, x: i32, y: i32, zone: ZoneKind) -> Result<(), SimError> {
        let tile = self
            .map
            .tile_mut(x, y)
            .ok_or(SimError::OutOfBounds { x, y })?;
        if !tile.is_empty() {
            return Err(SimError::TileOccupied { x, y });
        }
        tile.zone = zone;
        Ok(())
    }

    pub fn raise_height(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        let tile = self
            .map
            .tile_mut(x, y)
            .ok_or(SimError::OutOfBounds { x, y })?;
        tile.raise_height();
        Ok(())
    }

    pub fn lower_height(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        let tile = self
            .map
            .tile_mut(x, y)
            .ok_or(SimError::OutOfBounds { x, y })?;
        tile.lower_height();
        Ok(())
    }

    /// Advance a tile's traffic policy through its cycle. The policy is
    /// only consulted on road tiles but may be pre-set anywhere.
    pub fn cycle_traffic_direction(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        let tile = self
            .map
            .tile_mut(x, y)
            .ok_or(SimError::OutOfBounds { x, y })?;
        tile.cycle_traffic_direction();
        Ok(())
    }

    /// Re-run the propagation engine for both electricity and water.
    /// Call after any construction or demolition that could affect
    /// connectivity, and after loading persisted state.
    pub fn recompute_utilities(&mut self) {
        utilities::recompute(&mut self.map);
    }

    /// One fast tick: advance every signal, update each vehicle's stop/go
    /// state from nearby signals, move vehicles, and cull strays.
    pub fn tick_fast(&mut self) {
        // Advance signals and snapshot their stop state in grid scan order.
        let mut signals: Vec<(GridPos, bool)> = Vec::new();
        for tile in self.map.tiles_mut() {
            let pos = tile.pos();
            if let Some(light) = tile.building.as_mut().and_then(|b| b.signal.as_mut()) {
                light.update();
                signals.push((pos, light.should_stop()));
            }
        }

        for vehicle in &mut self.vehicles {
            // First signal within one king move wins; a vehicle with no
            // nearby signal never stays stopped.
            let vehicle_pos = vehicle.pos();
            let mut near_signal = false;
            for (signal_pos, stop) in &signals {
                if vehicle_pos.chebyshev_distance(signal_pos) <= 1 {
                    vehicle.stopped = *stop;
                    near_signal = true;
                    break;
                }
            }
            if !near_signal && vehicle.stopped {
                vehicle.resume();
            }

            vehicle.step();
        }

        let (width, height) = (self.map.width(), self.map.height());
        self.vehicles.retain(|v| {
            v.x >= -OFF_MAP_DESPAWN_MARGIN
                && v.x < width + OFF_MAP_DESPAWN_MARGIN
                && v.y >= -OFF_MAP_DESPAWN_MARGIN
                && v.y < height + OFF_MAP_DESPAWN_MARGIN
        });
    }

    /// Advance the clock by one hour and apply time-of-day side effects
    /// when the hour crosses a period boundary.
    pub fn tick_hour(&mut self) {
        self.date.advance_hour();
        let period = self.date.time_of_day();
        if period != self.time_of_day {
            self.time_of_day = period;
            self.apply_time_of_day();
        }
    }

    fn apply_time_of_day(&mut self) {
        let period = self.time_of_day;
        if period.is_night() {
            // Most residents turn in; the odd night owl stays up and pays
            // for it once full night falls.
            for i in 0..self.residents.len() {
                let awake = self.random_bool(NIGHT_OWL_CHANCE);
                let resident = &mut self.residents[i];
                resident.asleep = !awake;
                if awake && period == TimeOfDay::Night {
                    resident.adjust_happiness(-NIGHT_HAPPINESS_PENALTY);
                }
            }

            // Thin traffic to a night level: a one-shot cut, not a rate.
            let to_remove = self.vehicles.len() / 3;
            if to_remove > 0 {
                self.vehicles.drain(0..to_remove);
                debug!("night thinning removed {} vehicles", to_remove);
            }
        } else {
            for resident in &mut self.residents {
                resident.asleep = false;
            }
        }
    }

    /// The monthly pass: refresh utilities, grow population, aggregate the
    /// economy in one sweep over the grid, update residents, and advance
    /// the calendar by one month.
    pub fn tick_month(&mut self) {
        // Growth reads powered/watered state, so coverage must be fresh.
        self.recompute_utilities();
        self.grow_population();

        let mut ledger = MonthlyLedger::default();
        let mut income: i64 = 0;
        let mut expenses: i64 = 0;

        for tile in self.map.tiles() {
            let building = match tile.building.as_ref() {
                Some(b) => b,
                None => continue,
            };
            let kind = building.kind;

            income += kind.monthly_income();
            expenses += kind.monthly_expense();

            match kind.income_category() {
                Some(IncomeCategory::Residential) => {
                    ledger.residential_tax += kind.monthly_income()
                }
                Some(IncomeCategory::Commercial) => {
                    ledger.commercial_tax += kind.monthly_income()
                }
                Some(IncomeCategory::Industrial) => {
                    ledger.industrial_tax += kind.monthly_income()
                }
                None => {}
            }

            match kind.expense_category() {
                Some(ExpenseCategory::Transportation) => {
                    ledger.transportation_cost += kind.monthly_expense()
                }
                Some(ExpenseCategory::Health) => ledger.health_cost += kind.monthly_expense(),
                Some(ExpenseCategory::Education) => {
                    ledger.education_cost += kind.monthly_expense()
                }
                Some(ExpenseCategory::Safety) => ledger.safety_cost += kind.monthly_expense(),
                Some(ExpenseCategory::Utilities) => {
                    ledger.utilities_cost += kind.monthly_expense()
                }
                None => {}
            }
        }

        self.monthly_income = income;
        self.monthly_expenses = expenses;
        self.budget.record_month(&ledger);

        let net_income = income - expenses;
        self.money += net_income;
        self.budget.add_income(net_income);

        self.update_city_happiness();

        let current_year = self.date.year();
        for resident in &mut self.residents {
            resident.update_age(current_year);
            resident.update_mood();
        }

        self.date.advance_month();

        info!(
            "monthly pass: income {}, expenses {}, net {}, population {}",
            income, expenses, net_income, self.population
        );
    }

    /// Every powered and watered residential building with spare capacity
    /// gains one resident.
    fn grow_population(&mut self) {
        let birth_year = self.date.year();

        let mut occupancy: HashMap<GridPos, u32> = HashMap::new();
        for resident in &self.residents {
            *occupancy.entry(resident.pos()).or_insert(0) += 1;
        }

        let mut moving_in: Vec<GridPos> = Vec::new();
        for tile in self.map.tiles() {
            let building = match tile.building.as_ref() {
                Some(b) => b,
                None => continue,
            };
            let capacity = building.kind.capacity();
            if capacity == 0 || !building.powered || !building.watered {
                continue;
            }
            let occupied = occupancy.get(&tile.pos()).copied().unwrap_or(0);
            if occupied < capacity {
                moving_in.push(tile.pos());
            }
        }

        for pos in moving_in {
            self.residents.push(Resident::new(pos.x, pos.y, birth_year));
            self.population += 1;
        }
    }

    fn update_city_happiness(&mut self) {
        if self.residents.is_empty() {
            self.city_happiness = DEFAULT_CITY_HAPPINESS;
            return;
        }
        let total: i64 = self.residents.iter().map(|r| r.happiness() as i64).sum();
        self.city_happiness = total as f64 / self.residents.len() as f64;
    }

    /// Try `attempts` random coordinates; each that lands on a road or
    /// roundabout spawns a vehicle of a random kind there. When the road
    /// network can route it somewhere, the newcomer gets a path; otherwise
    /// it sits where it spawned until one is assigned.
    pub fn spawn_vehicles(&mut self, attempts: usize) {
        let network = RoadNetwork::from_map(&self.map);
        let road_tiles: Vec<GridPos> = network.road_positions().copied().collect();

        for _ in 0..attempts {
            let x = self.random_range(0..self.map.width());
            let y = self.random_range(0..self.map.height());

            let is_road = self.map.tile(x, y).is_some_and(|t| t.is_road());
            if !is_road {
                continue;
            }

            let kind = match self.choose_random(&VehicleKind::ALL) {
                Some(kind) => *kind,
                None => continue,
            };
            let mut vehicle = Vehicle::new(x, y, kind);

            if let Some(destination) = self.choose_random(&road_tiles).copied() {
                if destination != vehicle.pos() {
                    if let Some(path) = network.find_path(vehicle.pos(), destination) {
                        vehicle.path = path.into();
                    }
                }
            }

            debug!("spawned {} at ({}, {})", kind.name(), x, y);
            self.vehicles.push(vehicle);
        }
    }

    /// Create a small demo city on generated terrain.
    pub fn create_test_city() -> Self {
        Self::build_test_city(CityWorld::new(50, 50))
    }

    /// Create the demo city with a seeded RNG for reproducible runs.
    pub fn create_test_city_with_seed(seed: u64) -> Self {
        Self::build_test_city(CityWorld::new_with_seed(50, 50, seed))
    }

    /// Internal helper that lays out the demo city structure.
    pub fn build_test_city(mut world: CityWorld) -> Self {
        // A main street with a cross street through it.
        let mut road_sites: Vec<(i32, i32)> = (2..=12).map(|x| (x, 25)).collect();
        road_sites.extend((20..=30).map(|y| (7, y)));

        for (x, y) in road_sites {
            // Clear any tree on the right of way, then pave.
            let _ = world.demolish(x, y);
            let _ = world.place(x, y, BuildingKind::Road);
        }

        let buildings = [
            (8, 24, BuildingKind::TrafficLight),
            (13, 25, BuildingKind::Roundabout),
            (6, 23, BuildingKind::PowerPlant),
            (9, 23, BuildingKind::WaterTower),
            (3, 26, BuildingKind::House),
            (4, 26, BuildingKind::House),
            (5, 26, BuildingKind::Apartment),
            (10, 26, BuildingKind::Shop),
            (11, 26, BuildingKind::Park),
        ];
        for (x, y, kind) in buildings {
            let _ = world.demolish(x, y);
            let _ = world.place(x, y, kind);
        }

        let zones = [
            (3, 27, ZoneKind::Residential),
            (4, 27, ZoneKind::Residential),
            (10, 27, ZoneKind::Commercial),
        ];
        for (x, y, zone) in zones {
            let _ = world.set_zone(x, y, zone);
        }

        world.recompute_utilities();
        world.spawn_vehicles(10);
        world
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        let building_count = self.map.tiles().filter(|t| t.building.is_some()).count();
        let signal_count = self
            .map
            .tiles()
            .filter(|t| t.building.as_ref().is_some_and(|b| b.signal.is_some()))
            .count();

        println!("=== City Summary ===");
        println!(
            "Date: {} ({})",
            self.date.formatted(),
            self.time_of_day.name()
        );
        println!("Money: ${}", self.money);
        println!(
            "Population: {} (happiness {:.1})",
            self.population, self.city_happiness
        );
        println!(
            "Buildings: {}, Signals: {}, Vehicles: {}",
            building_count,
            signal_count,
            self.vehicles.len()
        );
        println!(
            "Monthly: income {}, expenses {}, net {}",
            self.monthly_income,
            self.monthly_expenses,
            self.monthly_income - self.monthly_expenses
        );
        println!(
            "Budget: balance {}, res/com/ind {}/{}/{}",
            self.budget.balance(),
            self.budget.residential_tax(),
            self.budget.commercial_tax(),
            self.budget.industrial_tax()
        );
    }

    /// Draw a character map of the city in the terminal
    pub fn draw_map(&self) {
        let vehicle_positions: HashSet<GridPos> =
            self.vehicles.iter().map(|v| v.pos()).collect();

        println!("=== City Map ===");
        println!("Legend: ~=Water ^=Tree #=Road o=Roundabout !=Signal P=Power T=WaterTower");
        println!("        H=Residential S=Commercial F=Industrial B=Other c=Vehicle");
        for y in 0..self.map.height() {
            let mut line = String::with_capacity(self.map.width() as usize);
            for x in 0..self.map.width() {
                let pos = GridPos::new(x, y);
                let tile = match self.map.tile(x, y) {
                    Some(t) => t,
                    None => continue,
                };
                let ch = if vehicle_positions.contains(&pos) {
                    'c'
                } else if let Some(building) = tile.building.as_ref() {
                    match building.kind {
                        BuildingKind::Road => '#',
                        BuildingKind::Roundabout => 'o',
                        BuildingKind::TrafficLight => '!',
                        BuildingKind::PowerPlant => 'P',
                        BuildingKind::WaterTower => 'T',
                        kind if kind.is_residential() => 'H',
                        kind if kind.income_category() == Some(IncomeCategory::Commercial) => 'S',
                        kind if kind.income_category() == Some(IncomeCategory::Industrial) => 'F',
                        _ => 'B',
                    }
                } else if tile.terrain == TerrainKind::Water {
                    '~'
                } else if tile.feature == Some(NaturalFeature::Tree) {
                    '^'
                } else {
                    '.'
                };
                line.push(ch);
            }
            println!("{}", line);
        }
        println!();
    }
}
