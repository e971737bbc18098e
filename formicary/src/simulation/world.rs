use bincode_derive::{Decode, Encode};
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub enum Terrain {
    Empty,
    Food(u32),
}

#[derive(Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Tile {
    pub terrain: Terrain,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            terrain: Terrain::Empty,
        }
    }
}

/// The tile grid ants forage on.
pub struct World {
    pub width: u32,
    pub height: u32,
    tiles: Vec<Vec<Tile>>,
}

impl World {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::default(); width as usize]; height as usize],
        }
    }

    #[inline(always)]
    pub fn terrain_at(&self, x: usize, y: usize) -> Option<&Terrain> {
        if x < self.width as usize && y < self.height as usize {
            return Some(&self.tiles[y][x].terrain);
        }
        None
    }

    /// Drop `amount` units of food on a tile, stacking onto whatever is
    /// already there. Out-of-bounds placements are ignored.
    #[inline(always)]
    pub fn place_food_at(&mut self, x: usize, y: usize, amount: u32) {
        if x < self.width as usize && y < self.height as usize {
            let terrain = &mut self.tiles[y][x].terrain;
            *terrain = match *terrain {
                Terrain::Food(existing) => Terrain::Food(existing.saturating_add(amount)),
                Terrain::Empty => Terrain::Food(amount),
            };
        }
    }

    /// Take one unit of food from a tile. Returns true if a unit was taken.
    /// The tile reverts to empty when its last unit goes.
    pub fn take_food_at(&mut self, x: usize, y: usize) -> bool {
        if x < self.width as usize && y < self.height as usize {
            if let Terrain::Food(amount) = &mut self.tiles[y][x].terrain {
                if *amount > 1 {
                    *amount -= 1;
                } else {
                    self.tiles[y][x].terrain = Terrain::Empty;
                }
                return true;
            }
        }
        false
    }

    /// Center of the nearest food tile in the 3x3 neighborhood around `pos`,
    /// if any. Used as a cheap foraging bias.
    pub fn food_near(&self, pos: Vec2) -> Option<Vec2> {
        let cx = pos.x.floor() as isize;
        let cy = pos.y.floor() as isize;

        let mut best: Option<(f32, Vec2)> = None;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
                    continue;
                }
                if let Some(Terrain::Food(_)) = self.terrain_at(x as usize, y as usize) {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let dist_sq = center.distance_squared(pos);
                    if best.map_or(true, |(d, _)| dist_sq < d) {
                        best = Some((dist_sq, center));
                    }
                }
            }
        }
        best.map(|(_, center)| center)
    }

    /// Total food units still lying on the ground.
    pub fn remaining_food(&self) -> u64 {
        self.tiles
            .iter()
            .flatten()
            .map(|tile| match tile.terrain {
                Terrain::Food(amount) => amount as u64,
                Terrain::Empty => 0,
            })
            .sum()
    }

    pub fn tiles(&self) -> &Vec<Vec<Tile>> {
        &self.tiles
    }

    pub(crate) fn from_tiles(width: u32, height: u32, tiles: Vec<Vec<Tile>>) -> Self {
        Self {
            width,
            height,
            tiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_stacks_on_the_same_tile() {
        let mut world = World::new(8, 8);
        world.place_food_at(2, 3, 10);
        world.place_food_at(2, 3, 5);
        assert_eq!(world.terrain_at(2, 3), Some(&Terrain::Food(15)));
    }

    #[test]
    fn out_of_bounds_placement_is_ignored() {
        let mut world = World::new(4, 4);
        world.place_food_at(9, 9, 10);
        assert_eq!(world.remaining_food(), 0);
    }

    #[test]
    fn taking_the_last_unit_empties_the_tile() {
        let mut world = World::new(4, 4);
        world.place_food_at(1, 1, 2);

        assert!(world.take_food_at(1, 1));
        assert_eq!(world.terrain_at(1, 1), Some(&Terrain::Food(1)));
        assert!(world.take_food_at(1, 1));
        assert_eq!(world.terrain_at(1, 1), Some(&Terrain::Empty));
        assert!(!world.take_food_at(1, 1));
    }

    #[test]
    fn food_near_finds_an_adjacent_tile() {
        let mut world = World::new(8, 8);
        world.place_food_at(3, 4, 1);

        let hit = world.food_near(Vec2::new(2.5, 4.5));
        assert_eq!(hit, Some(Vec2::new(3.5, 4.5)));

        assert_eq!(world.food_near(Vec2::new(6.5, 1.5)), None);
    }
}
