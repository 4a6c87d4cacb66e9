//! City Simulation Library
//!
//! A grid-based city simulation core that runs headless. Rendering and
//! save-file front ends are external: they mutate the city through
//! [`simulation::CityWorld`] and read its state back once per tick.

pub mod simulation;
