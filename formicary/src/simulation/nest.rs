use macroquad::prelude::Vec2;
use slotmap::SlotMap;

use super::ant::{Ant, AntKey, AntStep};
use super::{ANT_SPAWN_INTERVAL, SimEvent, Timer, World};

/// The colony's single nest: owns the ants and the food they bring home.
pub struct Nest {
    pub pos: Vec2,
    pub ants: SlotMap<AntKey, Ant>,
    pub food_stored: u64,
    pub total_delivered: u64,
    ant_food_cost: u32,
    spawn_timer: Timer,
}

impl Nest {
    pub fn new(pos: Vec2, starting_ants: u32, ant_food_cost: u32) -> Self {
        let mut nest = Self {
            pos,
            ants: SlotMap::with_capacity_and_key(starting_ants as usize),
            food_stored: 0,
            total_delivered: 0,
            ant_food_cost,
            spawn_timer: Timer::new(ANT_SPAWN_INTERVAL),
        };
        for _ in 0..starting_ants {
            nest.spawn_ant();
        }
        nest
    }

    pub fn spawn_ant(&mut self) {
        self.ants.insert(Ant::new(self.pos));
    }

    /// Step every ant, bank deliveries, and spend stored food on new ants.
    pub fn update(&mut self, world: &mut World, dt: f32, events: &mut Vec<SimEvent>) {
        let nest_pos = self.pos;

        for (_, ant) in self.ants.iter_mut() {
            match ant.update(nest_pos, world, dt) {
                AntStep::Delivered => {
                    self.food_stored += 1;
                    self.total_delivered += 1;
                    events.push(SimEvent::FoodDelivered { pos: nest_pos });
                }
                AntStep::PickedUp | AntStep::None => {}
            }
        }

        // Spawning is paced so a food windfall doesn't burst out a wall of
        // ants in a single frame.
        self.spawn_timer.advance(dt);
        while self.spawn_timer.is_done() && self.food_stored >= self.ant_food_cost as u64 {
            self.spawn_ant();
            self.food_stored -= self.ant_food_cost as u64;
            self.spawn_timer.elapsed -= self.spawn_timer.limit;
            events.push(SimEvent::AntSpawned { pos: nest_pos });
        }
        if self.spawn_timer.is_done() {
            self.spawn_timer.wrap();
        }
    }

    pub fn ant_count(&self) -> usize {
        self.ants.len()
    }
}
