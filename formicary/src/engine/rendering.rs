use macroquad::prelude::*;

use super::GameCamera;
use crate::effects::CanvasScene;
use crate::simulation::{ANT_LENGTH, NEST_RADIUS, Simulation, Terrain};
use crate::util::fast_sin_cos;

/// Enum representing possible camera actions like dragging or zooming.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CameraAction {
    Drag,
    Zoom,
    None,
}

// Palette
const BACKGROUND_COLOR: u32 = 0x1d2021;
const GROUND_COLOR: u32 = 0x282828;
const FOOD_COLOR: Color = Color::new(0.42, 0.75, 0.35, 1.0);
const ANT_COLOR: Color = Color::new(0.85, 0.55, 0.25, 1.0);
const NEST_COLOR: Color = Color::new(0.55, 0.38, 0.22, 1.0);

/// Food amount at which a tile renders fully opaque.
const FOOD_FULL_INTENSITY: f32 = 25.0;

/// Draws the world, ants, nest, and the effect scene on top.
pub struct Renderer {
    pub game_camera: GameCamera,
    is_dragging: bool,
    drag_start_world_pos: Vec2,
}

impl Renderer {
    pub fn new(world_width: u32, world_height: u32) -> Self {
        Self {
            game_camera: GameCamera::new(world_width, world_height),
            is_dragging: false,
            drag_start_world_pos: Vec2::ZERO,
        }
    }

    /// Processes mouse wheel input for zooming the camera.
    pub fn process_mouse_wheel_zoom(&mut self) -> CameraAction {
        let wheel_movement = mouse_wheel().1;
        if wheel_movement != 0.0 {
            self.game_camera.adjust_zoom(-wheel_movement);
            return CameraAction::Zoom;
        }
        CameraAction::None
    }

    /// Processes mouse drag input for panning the camera.
    pub fn process_mouse_drag_pan(&mut self) -> CameraAction {
        let current_mouse_pos = Vec2::from(mouse_position());
        let mut drag_action_occurred = false;

        if is_mouse_button_pressed(MouseButton::Left) {
            self.is_dragging = true;
            self.drag_start_world_pos = self.game_camera.camera.screen_to_world(current_mouse_pos);
        }

        if self.is_dragging {
            if is_mouse_button_down(MouseButton::Left) {
                let current_world_pos =
                    self.game_camera.camera.screen_to_world(current_mouse_pos);
                let world_offset = current_world_pos - self.drag_start_world_pos;

                const DRAG_MOVEMENT_THRESHOLD_SQ: f32 = 0.01;
                if world_offset.length_squared() > DRAG_MOVEMENT_THRESHOLD_SQ {
                    self.game_camera.move_by(-world_offset);
                    drag_action_occurred = true;
                }
            }

            if is_mouse_button_released(MouseButton::Left) {
                self.is_dragging = false;
            }
        }

        if drag_action_occurred {
            CameraAction::Drag
        } else {
            CameraAction::None
        }
    }

    /// Main rendering function, draws the frame under the UI.
    pub fn render(&mut self, simulation: &Simulation, scene: &CanvasScene) {
        clear_background(Color::from_hex(BACKGROUND_COLOR));
        set_camera(&self.game_camera.camera);

        self.draw_ground(simulation);
        self.draw_food(simulation);
        self.draw_nest(simulation);
        self.draw_ants(simulation);

        // Transient effects go on top of everything in the world.
        scene.draw();
    }

    fn draw_ground(&self, simulation: &Simulation) {
        draw_rectangle(
            0.0,
            0.0,
            simulation.world.width as f32,
            simulation.world.height as f32,
            Color::from_hex(GROUND_COLOR),
        );
    }

    fn draw_food(&self, simulation: &Simulation) {
        let world = &simulation.world;
        for y in 0..world.height as usize {
            for x in 0..world.width as usize {
                if let Some(Terrain::Food(amount)) = world.terrain_at(x, y) {
                    if *amount > 0 {
                        let intensity = (*amount as f32 / FOOD_FULL_INTENSITY).clamp(0.0, 1.0);
                        let color = Color::new(
                            FOOD_COLOR.r,
                            FOOD_COLOR.g,
                            FOOD_COLOR.b,
                            0.25 + intensity * 0.75,
                        );
                        draw_rectangle(x as f32, y as f32, 1.0, 1.0, color);
                    }
                }
            }
        }
    }

    fn draw_nest(&self, simulation: &Simulation) {
        let nest = &simulation.nest;
        let outline = Color::new(
            NEST_COLOR.r * 0.5,
            NEST_COLOR.g * 0.5,
            NEST_COLOR.b * 0.5,
            1.0,
        );
        draw_circle(nest.pos.x, nest.pos.y, NEST_RADIUS, NEST_COLOR);
        draw_circle_lines(nest.pos.x, nest.pos.y, NEST_RADIUS, 0.2, outline);
    }

    /// Ants are oriented triangles; hauling ants get a brighter tint.
    fn draw_ants(&self, simulation: &Simulation) {
        for (_, ant) in simulation.nest.ants.iter() {
            let mut color = ANT_COLOR;
            if ant.carrying_food {
                color.r = (color.r + 0.15).min(1.0);
                color.g = (color.g + 0.15).min(1.0);
                color.b = (color.b + 0.15).min(1.0);
            }

            let (sin, cos) = fast_sin_cos(ant.heading);
            let forward = vec2(cos, sin) * (ANT_LENGTH * 0.6);
            let side = vec2(-sin, cos) * (ANT_LENGTH * 0.25);

            draw_triangle(
                ant.pos + forward,
                ant.pos - forward + side,
                ant.pos - forward - side,
                color,
            );
        }
    }

    /// Resets the renderer state, typically after loading or resetting.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.game_camera.world_width = width;
        self.game_camera.world_height = height;
        self.game_camera.reset();
        self.is_dragging = false;
    }
}
