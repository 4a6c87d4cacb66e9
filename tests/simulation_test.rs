//! Simulation core validation tests
//!
//! Covers the propagation engine, the traffic light state machine, vehicle
//! motion and signal interaction, and the road network.

use city_sim::simulation::{
    BuildingKind, CityWorld, GridPos, LightState, Resident, RoadNetwork, TrafficLight, Vehicle,
    VehicleKind,
};

/// A lone power plant covers itself and its four neighbors: raw terrain
/// becomes lit one hop out but does not relay further.
#[test]
fn test_isolated_power_plant_coverage() {
    let mut world = CityWorld::new_flat(50, 50);
    world.place(10, 10, BuildingKind::PowerPlant).unwrap();
    world.recompute_utilities();

    let covered: Vec<GridPos> = world
        .map
        .tiles()
        .filter(|t| t.has_electricity)
        .map(|t| t.pos())
        .collect();

    assert_eq!(covered.len(), 5, "plant tile plus its four neighbors");
    for pos in [
        GridPos::new(10, 10),
        GridPos::new(9, 10),
        GridPos::new(11, 10),
        GridPos::new(10, 9),
        GridPos::new(10, 11),
    ] {
        assert!(covered.contains(&pos), "missing coverage at {:?}", pos);
    }

    // Two tiles out is beyond what unbuilt terrain conducts.
    assert!(!world.map.tile(12, 10).unwrap().has_electricity);
}

/// Built tiles relay coverage outward; each road extends the lit frontier.
#[test]
fn test_roads_relay_electricity() {
    let mut world = CityWorld::new_flat(50, 50);
    world.place(10, 10, BuildingKind::PowerPlant).unwrap();
    for y in 11..=15 {
        world.place(10, y, BuildingKind::Road).unwrap();
    }
    world.recompute_utilities();

    assert!(world.map.tile(10, 15).unwrap().has_electricity);
    // One hop past the last road is lit but conducts no further.
    assert!(world.map.tile(10, 16).unwrap().has_electricity);
    assert!(!world.map.tile(10, 17).unwrap().has_electricity);
    // Tiles flanking the roads are lit by the same relay.
    assert!(world.map.tile(9, 13).unwrap().has_electricity);
}

/// A tile exactly at the electricity range is covered; the next is not.
#[test]
fn test_electricity_range_limit() {
    let mut world = CityWorld::new_flat(1, 30);
    world.place(0, 0, BuildingKind::PowerPlant).unwrap();
    for y in 1..=25 {
        world.place(0, y, BuildingKind::Road).unwrap();
    }
    world.recompute_utilities();

    assert!(world.map.tile(0, 20).unwrap().has_electricity);
    assert!(!world.map.tile(0, 21).unwrap().has_electricity);
}

/// A tile exactly at the water range is covered; the next is not.
#[test]
fn test_water_range_limit() {
    let mut world = CityWorld::new_flat(1, 30);
    world.place(0, 0, BuildingKind::WaterTower).unwrap();
    for y in 1..=25 {
        world.place(0, y, BuildingKind::Road).unwrap();
    }
    world.recompute_utilities();

    assert!(world.map.tile(0, 15).unwrap().has_water);
    assert!(!world.map.tile(0, 16).unwrap().has_water);
}

/// River tiles are natural water sources.
#[test]
fn test_natural_water_is_a_source() {
    let mut world = CityWorld::new_with_seed(50, 50, 7);
    world.recompute_utilities();

    // Generated maps carry a river column at x = 15.
    assert!(world.map.tile(15, 0).unwrap().has_water);
    assert!(world.map.tile(14, 0).unwrap().has_water);
    // Unbuilt banks do not relay the coverage inland.
    assert!(!world.map.tile(13, 0).unwrap().has_water);
}

/// Overlapping sources union their coverage without interfering.
#[test]
fn test_overlapping_sources_union() {
    let mut world = CityWorld::new_flat(50, 50);
    world.place(10, 10, BuildingKind::PowerPlant).unwrap();
    world.place(14, 10, BuildingKind::PowerPlant).unwrap();
    world.recompute_utilities();

    assert!(world.map.tile(11, 10).unwrap().has_electricity);
    assert!(world.map.tile(13, 10).unwrap().has_electricity);
    // The midpoint is two unbuilt hops from either plant.
    assert!(!world.map.tile(12, 10).unwrap().has_electricity);
}

/// Two consecutive recomputes with no map change yield identical flags.
#[test]
fn test_recompute_is_idempotent() {
    let mut world = CityWorld::new_flat(30, 30);
    world.place(5, 5, BuildingKind::PowerPlant).unwrap();
    world.place(5, 6, BuildingKind::WaterTower).unwrap();
    for y in 7..=12 {
        world.place(5, y, BuildingKind::Road).unwrap();
    }

    world.recompute_utilities();
    let first: Vec<(bool, bool)> = world
        .map
        .tiles()
        .map(|t| (t.has_electricity, t.has_water))
        .collect();

    world.recompute_utilities();
    let second: Vec<(bool, bool)> = world
        .map
        .tiles()
        .map(|t| (t.has_electricity, t.has_water))
        .collect();

    assert_eq!(first, second);
}

/// The signal cycle is exactly green(60) -> yellow(20) -> red(60) -> green.
#[test]
fn test_traffic_light_cycle() {
    let mut light = TrafficLight::new();
    assert_eq!(light.state(), LightState::Green);
    assert!(!light.should_stop());

    for _ in 0..59 {
        light.update();
        assert_eq!(light.state(), LightState::Green);
        assert!(!light.should_stop());
    }

    light.update();
    assert_eq!(light.state(), LightState::Yellow);
    assert!(light.should_stop());

    for _ in 0..19 {
        light.update();
        assert_eq!(light.state(), LightState::Yellow);
    }

    light.update();
    assert_eq!(light.state(), LightState::Red);
    assert!(light.should_stop());

    for _ in 0..59 {
        light.update();
        assert_eq!(light.state(), LightState::Red);
    }

    light.update();
    assert_eq!(light.state(), LightState::Green);
    assert!(!light.should_stop());
}

/// Each axis steps independently, so approach to an offset waypoint is
/// diagonal; the waypoint pops when reached.
#[test]
fn test_vehicle_moves_diagonally() {
    let mut vehicle = Vehicle::new(0, 0, VehicleKind::Car);
    vehicle.path.push_back(GridPos::new(3, 2));

    vehicle.step();
    assert_eq!((vehicle.x, vehicle.y), (1, 1));
    vehicle.step();
    assert_eq!((vehicle.x, vehicle.y), (2, 2));
    vehicle.step();
    assert_eq!((vehicle.x, vehicle.y), (3, 2));
    assert!(vehicle.path.is_empty(), "waypoint should pop on arrival");

    // Nothing left to follow.
    vehicle.step();
    assert_eq!((vehicle.x, vehicle.y), (3, 2));
}

#[test]
fn test_stopped_vehicle_does_not_move() {
    let mut vehicle = Vehicle::new(0, 0, VehicleKind::Bus);
    vehicle.path.push_back(GridPos::new(5, 5));
    vehicle.stopped = true;

    vehicle.step();
    assert_eq!((vehicle.x, vehicle.y), (0, 0));
}

/// A red signal one tile away stops a vehicle in place; green releases it.
#[test]
fn test_red_light_stops_adjacent_vehicle() {
    let mut world = CityWorld::new_flat(20, 20);
    world.place(10, 11, BuildingKind::TrafficLight).unwrap();

    // Run the signal into its red phase before the vehicle shows up.
    for _ in 0..80 {
        world.tick_fast();
    }

    world.vehicles.push(Vehicle::new(10, 10, VehicleKind::Taxi));
    world.tick_fast();

    let vehicle = &world.vehicles[0];
    assert!(vehicle.stopped);
    assert_eq!((vehicle.x, vehicle.y), (10, 10));

    // 59 more ticks exhaust the red countdown and the light goes green.
    for _ in 0..59 {
        world.tick_fast();
    }
    assert!(!world.vehicles[0].stopped);
}

/// A stopped vehicle with no signal nearby is resumed unconditionally.
#[test]
fn test_vehicle_resumes_without_nearby_signal() {
    let mut world = CityWorld::new_flat(20, 20);
    let mut vehicle = Vehicle::new(5, 5, VehicleKind::Car);
    vehicle.stopped = true;
    world.vehicles.push(vehicle);

    world.tick_fast();
    assert!(!world.vehicles[0].stopped);
}

/// Vehicles past the despawn margin are culled each fast tick; those
/// inside it survive.
#[test]
fn test_off_map_vehicles_are_culled() {
    let mut world = CityWorld::new_flat(10, 10);
    world.vehicles.push(Vehicle::new(20, 20, VehicleKind::Car));
    world.vehicles.push(Vehicle::new(-6, 0, VehicleKind::Car));
    world.vehicles.push(Vehicle::new(14, 14, VehicleKind::Car));
    world.vehicles.push(Vehicle::new(-5, 0, VehicleKind::Car));

    world.tick_fast();

    let remaining: Vec<(i32, i32)> = world.vehicles.iter().map(|v| (v.x, v.y)).collect();
    assert_eq!(remaining, vec![(14, 14), (-5, 0)]);
}

/// Entering a night period removes a third of active vehicles, once.
#[test]
fn test_night_thins_traffic() {
    let mut world = CityWorld::new_flat(10, 10);
    for _ in 0..9 {
        world.vehicles.push(Vehicle::new(0, 0, VehicleKind::Car));
    }

    // The clock starts at 6 AM. Noon and evening pass without thinning.
    for _ in 0..12 {
        world.tick_hour();
    }
    assert_eq!(world.vehicles.len(), 9);

    // Hour 21 crosses into night: floor(9 / 3) vehicles go.
    for _ in 0..3 {
        world.tick_hour();
    }
    assert_eq!(world.vehicles.len(), 6);
}

/// Night puts residents to sleep; the rare night owl stays up and loses a
/// little happiness. Morning wakes everyone.
#[test]
fn test_residents_sleep_through_the_night() {
    let mut world = CityWorld::new_flat(10, 10);
    for _ in 0..20 {
        world.residents.push(Resident::new(0, 0, 2000));
    }

    // 6 AM to 9 PM crosses into night.
    for _ in 0..15 {
        world.tick_hour();
    }
    for resident in &world.residents {
        assert!(
            resident.asleep || resident.happiness() == 73,
            "a resident awake at night takes the happiness penalty"
        );
    }

    // Round the clock to the next morning: everyone is up.
    for _ in 0..9 {
        world.tick_hour();
    }
    for resident in &world.residents {
        assert!(!resident.asleep);
    }
}

/// Spawns land only on road tiles and get a route when one exists.
#[test]
fn test_spawned_vehicles_sit_on_roads_with_routes() {
    let mut world = CityWorld::new_flat(10, 10);
    for y in 0..10 {
        for x in 0..10 {
            world.place(x, y, BuildingKind::Road).unwrap();
        }
    }

    world.spawn_vehicles(30);

    assert_eq!(world.vehicles.len(), 30, "every attempt lands on a road");
    for vehicle in &world.vehicles {
        assert!(world.map.tile(vehicle.x, vehicle.y).unwrap().is_road());
    }
    assert!(
        world.vehicles.iter().any(|v| !v.path.is_empty()),
        "a fully connected grid should route nearly every spawn"
    );
}

/// A one-way road is traversable with the flow and opaque against it.
#[test]
fn test_one_way_road_blocks_reverse_route() {
    let mut world = CityWorld::new_flat(5, 1);
    for x in 0..3 {
        world.place(x, 0, BuildingKind::Road).unwrap();
    }
    // AllDirections -> North -> South -> East
    for _ in 0..3 {
        world.cycle_traffic_direction(1, 0).unwrap();
    }

    let network = RoadNetwork::from_map(&world.map);
    assert_eq!(network.road_count(), 3);
    assert!(network
        .find_path(GridPos::new(0, 0), GridPos::new(2, 0))
        .is_some());
    assert!(network
        .find_path(GridPos::new(2, 0), GridPos::new(0, 0))
        .is_none());
}
