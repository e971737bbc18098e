use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::effects::{CanvasScene, EffectKind, EffectManager};
use crate::engine::Renderer;
use crate::simulation::{MAX_STEP, SimEvent, Simulation};
use crate::ui::UIManager;
use crate::ui::components::DialogPopup;
use crate::ui::events::AppAction;

const FOOD_RIPPLE_COLOR: Color = Color::new(0.55, 0.9, 0.45, 0.9);
const NEST_PULSE_COLOR: Color = Color::new(0.95, 0.8, 0.4, 0.9);

/// Screen-space distance under which a press-release pair counts as a click
/// rather than a camera drag.
const CLICK_MAX_DIST: f32 = 4.0;

/// Main application structure for Formicary.
pub struct App {
    ui: UIManager,
    renderer: Renderer,
    simulation: Simulation,
    effects: EffectManager,
    scene: CanvasScene,
    press_screen_pos: Option<Vec2>,
    last_screen_size: (f32, f32),
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let simulation = Simulation::new(&config);
        let renderer = Renderer::new(simulation.world.width, simulation.world.height);

        Self {
            ui: UIManager::new(),
            renderer,
            simulation,
            effects: EffectManager::new(),
            scene: CanvasScene::new(),
            press_screen_pos: None,
            last_screen_size: (screen_width(), screen_height()),
        }
    }

    /// Runs the main application loop.
    pub async fn run(&mut self) {
        let mut last_time = get_time(); // wall-clock seconds

        loop {
            let now = get_time();
            let dt = (now - last_time) as f32;
            last_time = now;

            let screen = (screen_width(), screen_height());
            if screen != self.last_screen_size {
                self.renderer.game_camera.handle_resize();
                self.last_screen_size = screen;
            }

            self.update_ui();

            // Step the simulation in capped slices so a long frame cannot
            // teleport ants across the world.
            let mut sim_dt = dt;
            while sim_dt > 0.0 {
                let step = sim_dt.min(MAX_STEP);
                let events = self.simulation.update(step);
                self.apply_sim_events(&events);
                sim_dt -= step;
            }

            // Effects animate on real frame time, pause or not.
            self.effects.tick(dt, &mut self.scene);

            self.render();

            // Yield back to Macroquad (swap buffers, poll events, vsync)
            next_frame().await;
        }
    }

    /// Map simulation events to the effects that visualize them.
    fn apply_sim_events(&mut self, events: &[SimEvent]) {
        for event in events {
            match *event {
                SimEvent::FoodDelivered { pos } => {
                    self.effects.spawn(
                        EffectKind::Pulse {
                            color: NEST_PULSE_COLOR,
                        },
                        pos,
                        &mut self.scene,
                    );
                }
                SimEvent::AntSpawned { .. } => {}
            }
        }
    }

    /// Updates the UI state and handles input.
    fn update_ui(&mut self) {
        let shortcut_handled = self.handle_global_shortcuts();

        let (app_action, ui_consumed_input) = self.ui.update(&self.simulation);
        self.handle_app_actions(app_action);

        if !shortcut_handled && !ui_consumed_input {
            self.handle_world_input();
        }
    }

    /// Handles mouse input aimed at the game world.
    fn handle_world_input(&mut self) {
        if mouse_wheel().1 != 0.0 {
            self.renderer.process_mouse_wheel_zoom();
        }
        self.renderer.process_mouse_drag_pan();

        // A short, stationary press places food; a longer one was a pan.
        if is_mouse_button_pressed(MouseButton::Left) {
            self.press_screen_pos = Some(Vec2::from(mouse_position()));
        }
        if is_mouse_button_released(MouseButton::Left) {
            if let Some(press_pos) = self.press_screen_pos.take() {
                let release_pos = Vec2::from(mouse_position());
                if press_pos.distance(release_pos) <= CLICK_MAX_DIST {
                    let world_pos = self.renderer.game_camera.get_mouse_world_pos();
                    if self.simulation.place_food(world_pos) {
                        self.effects.spawn(
                            EffectKind::Ripple {
                                color: FOOD_RIPPLE_COLOR,
                            },
                            world_pos,
                            &mut self.scene,
                        );
                    }
                }
            }
        }
    }

    /// Handles global keyboard shortcuts.
    fn handle_global_shortcuts(&mut self) -> bool {
        if self.ui.dialog_popup.is_some() {
            if is_key_pressed(KeyCode::Escape) {
                self.ui.close_dialog();
                return true;
            }
            return false;
        }

        if is_key_pressed(KeyCode::P) || is_key_pressed(KeyCode::Space) {
            self.handle_app_actions(Some(AppAction::TogglePause));
            return true;
        } else if is_key_pressed(KeyCode::R) {
            self.handle_app_actions(Some(AppAction::RequestReset));
            return true;
        } else if is_key_pressed(KeyCode::S) {
            self.handle_app_actions(Some(AppAction::RequestSave(String::new())));
            return true;
        } else if is_key_pressed(KeyCode::L) {
            self.handle_app_actions(Some(AppAction::RequestLoad(String::new())));
            return true;
        }

        false
    }

    /// Processes application-level actions triggered by UI or shortcuts.
    fn handle_app_actions(&mut self, action: Option<AppAction>) {
        if let Some(action) = action {
            match action {
                AppAction::TogglePause => self.simulation.toggle_pause(),
                AppAction::RequestReset => self.reset(),
                AppAction::RequestSave(name) => self.handle_save_request(name),
                AppAction::RequestLoad(name) => self.handle_load_request(name),
            }
        }
    }

    fn handle_save_request(&mut self, name: String) {
        if name.is_empty() {
            self.ui
                .show_dialog(DialogPopup::new_save_input("colony.save"));
            return;
        }
        match self.simulation.save_game(&name) {
            Ok(()) => self
                .ui
                .show_dialog(DialogPopup::new_info("Game saved successfully.")),
            Err(e) => self
                .ui
                .show_dialog(DialogPopup::new_info(&format!("Failed to save game: {}", e))),
        }
    }

    fn handle_load_request(&mut self, name: String) {
        if name.is_empty() {
            match Simulation::list_saves(&self.simulation.config) {
                Ok(saves) if !saves.is_empty() => {
                    self.ui.show_dialog(DialogPopup::new_load_picker(saves));
                }
                Ok(_) => {
                    self.ui
                        .show_dialog(DialogPopup::new_info("No saves found."));
                }
                Err(e) => {
                    self.ui.show_dialog(DialogPopup::new_info(&format!(
                        "Failed to list saves: {}",
                        e
                    )));
                }
            }
            return;
        }

        match Simulation::load_game(&name, &self.simulation.config) {
            Ok(loaded) => {
                self.simulation = loaded;
                self.effects.clear(&mut self.scene);
                self.renderer
                    .reset(self.simulation.world.width, self.simulation.world.height);
                self.ui.show_dialog(DialogPopup::new_info("Game loaded."));
            }
            Err(e) => {
                self.ui
                    .show_dialog(DialogPopup::new_info(&format!("Failed to load game: {}", e)));
            }
        }
    }

    /// Renders the current game state and UI.
    fn render(&mut self) {
        self.renderer.render(&self.simulation, &self.scene);

        // Switch to default camera for UI rendering
        set_default_camera();
        self.ui.render();
    }

    /// Resets the application to a fresh colony.
    fn reset(&mut self) {
        self.simulation.reset();
        self.effects.clear(&mut self.scene);
        self.renderer
            .reset(self.simulation.world.width, self.simulation.world.height);
    }
}
