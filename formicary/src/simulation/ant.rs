use macroquad::prelude::{Vec2, rand, vec2};
use slotmap::new_key_type;
use std::f32;

use super::{ANT_SPEED, CARRY_SLOWDOWN, NEST_RADIUS, Timer, WANDER_INTERVAL, WANDER_TURN};
use crate::simulation::{Terrain, World};
use crate::util::fast_sin_cos;

new_key_type! {
    /// Key for ant slotmap.
    pub struct AntKey;
}

/// What happened to an ant during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntStep {
    None,
    PickedUp,
    Delivered,
}

pub struct Ant {
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub carrying_food: bool,
    wander_timer: Timer,
}

impl Ant {
    pub fn new(pos: Vec2) -> Self {
        // Desync wander re-rolls across the swarm
        let mut wander_timer = Timer::new(WANDER_INTERVAL);
        wander_timer.elapsed = rand::gen_range(0.0, WANDER_INTERVAL);

        Self {
            pos,
            heading: rand::gen_range(0.0, f32::consts::TAU),
            speed: ANT_SPEED,
            carrying_food: false,
            wander_timer,
        }
    }

    /// Advance one step: forage or haul, then move and stay in bounds.
    pub fn update(&mut self, nest_pos: Vec2, world: &mut World, dt: f32) -> AntStep {
        let mut step = AntStep::None;

        if self.carrying_food {
            // Haul straight home.
            let to_nest = nest_pos - self.pos;
            self.heading = to_nest.y.atan2(to_nest.x);

            if to_nest.length() <= NEST_RADIUS {
                self.carrying_food = false;
                // Head back out in a fresh direction.
                self.heading = rand::gen_range(0.0, f32::consts::TAU);
                step = AntStep::Delivered;
            }
        } else {
            self.wander_timer.advance(dt);
            if self.wander_timer.is_done() {
                self.wander_timer.wrap();
                self.heading += rand::gen_range(-WANDER_TURN, WANDER_TURN);
            }

            // Bias toward food in the immediate neighborhood.
            if let Some(food_pos) = world.food_near(self.pos) {
                let to_food = food_pos - self.pos;
                self.heading = to_food.y.atan2(to_food.x);
            }

            let tile_x = self.pos.x.floor() as usize;
            let tile_y = self.pos.y.floor() as usize;
            if let Some(Terrain::Food(_)) = world.terrain_at(tile_x, tile_y) {
                if world.take_food_at(tile_x, tile_y) {
                    self.carrying_food = true;
                    step = AntStep::PickedUp;
                }
            }
        }

        let speed = if self.carrying_food {
            self.speed * CARRY_SLOWDOWN
        } else {
            self.speed
        };
        let (sin, cos) = fast_sin_cos(self.heading);
        self.pos += vec2(cos, sin) * speed * dt;

        self.keep_in_bounds(world);

        step
    }

    /// Clamp to the world rectangle, reflecting the heading off the edge hit.
    fn keep_in_bounds(&mut self, world: &World) {
        let max_x = world.width as f32;
        let max_y = world.height as f32;

        if self.pos.x < 0.0 || self.pos.x > max_x {
            self.pos.x = self.pos.x.clamp(0.0, max_x);
            self.heading = f32::consts::PI - self.heading;
        }
        if self.pos.y < 0.0 || self.pos.y > max_y {
            self.pos.y = self.pos.y.clamp(0.0, max_y);
            self.heading = -self.heading;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_up_food_from_its_tile() {
        let mut world = World::new(16, 16);
        world.place_food_at(8, 8, 1);

        let mut ant = Ant::new(vec2(8.5, 8.5));
        let step = ant.update(vec2(1.0, 1.0), &mut world, 0.05);

        assert_eq!(step, AntStep::PickedUp);
        assert!(ant.carrying_food);
        assert_eq!(world.remaining_food(), 0);
    }

    #[test]
    fn delivers_when_reaching_the_nest() {
        let mut world = World::new(16, 16);
        let nest = vec2(8.0, 8.0);

        let mut ant = Ant::new(vec2(8.2, 8.2));
        ant.carrying_food = true;

        let step = ant.update(nest, &mut world, 0.05);
        assert_eq!(step, AntStep::Delivered);
        assert!(!ant.carrying_food);
    }

    #[test]
    fn carrying_ant_heads_toward_the_nest() {
        let mut world = World::new(32, 32);
        let nest = vec2(4.0, 4.0);

        let mut ant = Ant::new(vec2(20.0, 20.0));
        ant.carrying_food = true;

        let before = ant.pos.distance(nest);
        for _ in 0..10 {
            ant.update(nest, &mut world, 0.1);
        }
        assert!(ant.pos.distance(nest) < before);
    }

    #[test]
    fn never_leaves_the_world() {
        let mut world = World::new(8, 8);
        let nest = vec2(4.0, 4.0);

        let mut ant = Ant::new(vec2(0.1, 0.1));
        ant.heading = f32::consts::PI * 1.25; // aimed at the corner

        for _ in 0..200 {
            ant.update(nest, &mut world, 0.1);
            assert!(ant.pos.x >= 0.0 && ant.pos.x <= 8.0);
            assert!(ant.pos.y >= 0.0 && ant.pos.y <= 8.0);
        }
    }
}
