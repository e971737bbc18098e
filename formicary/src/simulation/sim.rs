use bincode::{decode_from_slice, encode_to_vec};
use bincode_derive::{Decode, Encode};
use macroquad::prelude::{Vec2, vec2};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::nest::Nest;
use super::world::{Tile, World};
use crate::config::GameConfig;

/// Something that happened during a simulation step and may deserve a
/// visual reaction. The app layer decides what to do with these; the
/// simulation knows nothing about effects or rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    FoodDelivered { pos: Vec2 },
    AntSpawned { pos: Vec2 },
}

pub struct Simulation {
    pub tick: u64,
    pub world: World,
    pub nest: Nest,
    pub is_paused: bool,
    pub config: GameConfig,
}

/// On-disk snapshot of a game. Ants are not serialized individually; the
/// count is enough to rebuild an equivalent swarm at the nest.
#[derive(Encode, Decode)]
pub struct GameSave {
    width: u32,
    height: u32,
    tiles: Vec<Vec<Tile>>,
    nest_pos: (f32, f32),
    food_stored: u64,
    total_delivered: u64,
    ant_count: u32,
    tick: u64,
}

impl Simulation {
    pub fn new(config: &GameConfig) -> Self {
        let world = World::new(config.world_width, config.world_height);
        let nest_pos = vec2(
            config.world_width as f32 / 2.0,
            config.world_height as f32 / 2.0,
        );
        let nest = Nest::new(nest_pos, config.starting_ants, config.ant_food_cost);

        Self {
            tick: 0,
            world,
            nest,
            is_paused: false,
            config: config.clone(),
        }
    }

    /// Advance the simulation by dt. Returns the events of this step; an
    /// empty vec while paused.
    pub fn update(&mut self, dt: f32) -> Vec<SimEvent> {
        if self.is_paused {
            return Vec::new();
        }
        self.tick += 1;

        let mut events = Vec::new();
        self.nest.update(&mut self.world, dt, &mut events);
        events
    }

    /// Drop a helping of food on the tile under `world_pos`.
    pub fn place_food(&mut self, world_pos: Vec2) -> bool {
        let x = world_pos.x.floor();
        let y = world_pos.y.floor();
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.world.width as usize || y >= self.world.height as usize {
            return false;
        }
        self.world.place_food_at(x, y, self.config.food_per_drop);
        true
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    pub fn ant_count(&self) -> usize {
        self.nest.ant_count()
    }

    /// Rebuild the starting state with the current config.
    pub fn reset(&mut self) {
        *self = Simulation::new(&self.config.clone());
    }

    fn saves_dir(&self) -> &str {
        self.config.saves_dir.as_deref().unwrap_or("saves/")
    }

    /// Write the current game to `saves_dir/name`.
    pub fn save_game<P: AsRef<Path>>(&self, name: P) -> io::Result<()> {
        let dir = Path::new(self.saves_dir());
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let save = GameSave {
            width: self.world.width,
            height: self.world.height,
            tiles: self.world.tiles().clone(),
            nest_pos: (self.nest.pos.x, self.nest.pos.y),
            food_stored: self.nest.food_stored,
            total_delivered: self.nest.total_delivered,
            ant_count: self.nest.ant_count() as u32,
            tick: self.tick,
        };
        let data = encode_to_vec(&save, bincode::config::standard())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        let mut file = fs::File::create(dir.join(name.as_ref()))?;
        file.write_all(&data)?;
        Ok(())
    }

    /// Load a game previously written by `save_game`. The returned simulation
    /// starts paused so the player can look around first.
    pub fn load_game<P: AsRef<Path>>(name: P, config: &GameConfig) -> io::Result<Simulation> {
        let dir = config.saves_dir.as_deref().unwrap_or("saves/");
        let data = fs::read(Path::new(dir).join(name.as_ref()))?;
        let (save, _len): (GameSave, _) = decode_from_slice(&data, bincode::config::standard())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        let world = World::from_tiles(save.width, save.height, save.tiles);
        let nest_pos = vec2(save.nest_pos.0, save.nest_pos.1);
        let mut nest = Nest::new(nest_pos, save.ant_count, config.ant_food_cost);
        nest.food_stored = save.food_stored;
        nest.total_delivered = save.total_delivered;

        Ok(Simulation {
            tick: save.tick,
            world,
            nest,
            is_paused: true,
            config: config.clone(),
        })
    }

    /// List save files on disk, most basic form: file names in the saves dir.
    pub fn list_saves(config: &GameConfig) -> io::Result<Vec<String>> {
        let dir = Path::new(config.saves_dir.as_deref().unwrap_or("saves/"));
        if !dir.exists() {
            return Ok(vec![]);
        }
        let mut saves = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                saves.push(name.to_string());
            }
        }
        saves.sort();
        Ok(saves)
    }
}
