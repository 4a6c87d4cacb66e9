//! City map grid
//!
//! The map exclusively owns every tile for the lifetime of a session.
//! Residents and vehicles refer to tiles by coordinate and look them up
//! here, so nothing outside the grid can dangle after a demolition.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tile::Tile;
use super::types::{GridPos, NaturalFeature, TerrainKind, CARDINAL_DIRECTIONS};

/// Columns of the map that start as river water.
const RIVER_COLUMNS: [i32; 2] = [15, 35];
/// Corner coordinates of the lowered valley region (inclusive, exclusive).
const VALLEY_MIN: i32 = 20;
const VALLEY_MAX: i32 = 30;
/// Height assigned to every valley tile.
const VALLEY_HEIGHT: i32 = -2;
/// Chance that a non-water tile starts with a tree on it.
const TREE_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl CityMap {
    /// A map of bare grass at height zero. Useful as a blank slate for
    /// controlled scenarios.
    pub fn flat(width: i32, height: i32) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(x, y));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Generate starting terrain: gently rolling heights from a sinusoidal
    /// function of position, two river columns, a lowered valley, and a
    /// light scattering of trees.
    pub fn generate<R: Rng>(width: i32, height: i32, rng: &mut R) -> Self {
        let mut map = Self::flat(width, height);

        for tile in &mut map.tiles {
            let (x, y) = (tile.x(), tile.y());
            let noise = (x as f64 * 0.1).sin() * (y as f64 * 0.1).cos() * 2.0;
            tile.set_height(noise as i32);

            if RIVER_COLUMNS.contains(&x) {
                tile.terrain = TerrainKind::Water;
            }

            if tile.terrain != TerrainKind::Water && rng.random_bool(TREE_PROBABILITY) {
                tile.feature = Some(NaturalFeature::Tree);
            }
        }

        for y in VALLEY_MIN..VALLEY_MAX {
            for x in VALLEY_MIN..VALLEY_MAX {
                if let Some(tile) = map.tile_mut(x, y) {
                    tile.set_height(VALLEY_HEIGHT);
                }
            }
        }

        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pure range check; no tile access.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if !self.is_valid(x, y) {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize)
    }

    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if !self.is_valid(x, y) {
            return None;
        }
        self.tiles.get_mut((y * self.width + x) as usize)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// The valid 4-neighbors of a coordinate.
    pub fn neighbors4(&self, pos: GridPos) -> Vec<GridPos> {
        CARDINAL_DIRECTIONS
            .iter()
            .map(|(dx, dy)| GridPos::new(pos.x + dx, pos.y + dy))
            .filter(|p| self.is_valid(p.x, p.y))
            .collect()
    }
}
