//! Road network graph for vehicle routing
//!
//! Derived view of the tile grid: nodes are road and roundabout tiles, and
//! a directed edge exists where the destination tile's traffic policy
//! allows entering it from the source. The grid stays the single source of
//! truth; the graph is rebuilt from it on demand rather than maintained
//! incrementally.

use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::map::CityMap;
use super::types::{GridPos, CARDINAL_DIRECTIONS};

#[derive(Default)]
pub struct RoadNetwork {
    graph: DiGraph<GridPos, u32>,
    nodes: HashMap<GridPos, NodeIndex>,
}

impl RoadNetwork {
    /// Build the routing graph for the map's current road layout.
    pub fn from_map(map: &CityMap) -> Self {
        let mut network = Self::default();

        for tile in map.tiles().filter(|t| t.is_road()) {
            let index = network.graph.add_node(tile.pos());
            network.nodes.insert(tile.pos(), index);
        }

        let positions: Vec<GridPos> = network.nodes.keys().copied().collect();
        for pos in positions {
            let node = network.nodes[&pos];
            for (dx, dy) in CARDINAL_DIRECTIONS {
                let next = GridPos::new(pos.x + dx, pos.y + dy);
                let next_node = match network.nodes.get(&next) {
                    Some(index) => *index,
                    None => continue,
                };
                let allowed = map
                    .tile(next.x, next.y)
                    .is_some_and(|t| t.traffic_direction.allows(dx, dy));
                if allowed {
                    network.graph.add_edge(node, next_node, 1);
                }
            }
        }

        network
    }

    /// Number of drivable tiles in the network.
    pub fn road_count(&self) -> usize {
        self.nodes.len()
    }

    /// All drivable tile positions.
    pub fn road_positions(&self) -> impl Iterator<Item = &GridPos> {
        self.nodes.keys()
    }

    /// Shortest waypoint path from `start` to `goal`, excluding the start
    /// tile itself. Uses A* with a Manhattan-distance heuristic.
    pub fn find_path(&self, start: GridPos, goal: GridPos) -> Option<Vec<GridPos>> {
        let start_node = *self.nodes.get(&start)?;
        let goal_node = *self.nodes.get(&goal)?;

        if start == goal {
            return Some(Vec::new());
        }

        let (_, node_path) = astar(
            &self.graph,
            start_node,
            |node| node == goal_node,
            |edge| *edge.weight(),
            |node| self.graph[node].manhattan_distance(&goal) as u32,
        )?;

        Some(
            node_path
                .into_iter()
                .skip(1)
                .map(|index| self.graph[index])
                .collect(),
        )
    }
}
