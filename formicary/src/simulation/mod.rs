pub mod ant;
mod nest;
mod sim;
mod timer;
mod world;

// Re-export key types for easier imports
pub use ant::AntKey;
pub use nest::Nest;
pub use sim::{SimEvent, Simulation};
pub use timer::Timer;
pub use world::{Terrain, Tile, World};

// World size defaults
pub const DEFAULT_WORLD_WIDTH: u32 = 240;
pub const DEFAULT_WORLD_HEIGHT: u32 = 135;

// Nest constants
pub const NEST_SIZE: f32 = 8.0;
pub const NEST_RADIUS: f32 = NEST_SIZE / 2.0;
pub const ANT_SPAWN_INTERVAL: f32 = 0.3;

// Ant behavior constants
pub const ANT_LENGTH: f32 = 1.0;
pub const ANT_SPEED: f32 = 4.0; // world units per second
pub const CARRY_SLOWDOWN: f32 = 0.9; // ants are 10% slower when hauling
pub const WANDER_INTERVAL: f32 = 0.4; // how often a wandering ant re-rolls its heading
pub const WANDER_TURN: f32 = 0.9; // max heading change per re-roll, radians

// Simulation stepping
pub const MAX_STEP: f32 = 0.1; // cap on a single update step, seconds
