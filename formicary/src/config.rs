use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::simulation::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};

// Window constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: u32,
    pub world_height: u32,
    pub starting_ants: u32,
    /// Stored food spent per new ant.
    pub ant_food_cost: u32,
    /// Food units dropped per placement click.
    pub food_per_drop: u32,
    pub saves_dir: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            starting_ants: 12,
            ant_food_cost: 5,
            food_per_drop: 25,
            saves_dir: Some("saves/".to_string()),
        }
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: "Formicary".to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH as i32,
        window_height: DEFAULT_WINDOW_HEIGHT as i32,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GameConfig = toml::from_str("starting_ants = 50").unwrap();
        assert_eq!(config.starting_ants, 50);
        assert_eq!(config.ant_food_cost, GameConfig::default().ant_food_cost);
        assert_eq!(config.world_width, DEFAULT_WORLD_WIDTH);
    }
}
