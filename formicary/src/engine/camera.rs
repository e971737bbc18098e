use macroquad::prelude::*;

// Camera configuration constants
/// Minimum zoom level allowed (1.0 = full world view)
const MIN_ZOOM: f32 = 1.0;
/// Maximum zoom level allowed
const MAX_ZOOM: f32 = 40.0;
/// Speed multiplier for zoom operations
const ZOOM_SPEED: f32 = 0.1;

/// 2D world camera handling zooming toward the cursor and bounded panning.
pub struct GameCamera {
    /// Zoom level (minimum 1.0, higher values zoom in)
    zoom: f32,

    /// World dimensions
    pub world_width: u32,
    pub world_height: u32,

    /// The actual macroquad camera object
    pub camera: Camera2D,
}

impl GameCamera {
    pub fn new(world_width: u32, world_height: u32) -> Self {
        let mut camera = Self {
            zoom: 1.0,
            world_width,
            world_height,
            camera: Camera2D {
                target: vec2(world_width as f32 / 2.0, world_height as f32 / 2.0),
                ..Default::default()
            },
        };
        camera.update_camera_zoom();
        camera
    }

    /// Zoom in or out, keeping the world point under the cursor fixed.
    pub fn adjust_zoom(&mut self, wheel_movement: f32) {
        let old_zoom = self.zoom;

        let mouse_screen_pos = Vec2::from(mouse_position());
        let mouse_world_pos = self.camera.screen_to_world(mouse_screen_pos);

        self.zoom = (self.zoom - wheel_movement * self.zoom * ZOOM_SPEED).clamp(MIN_ZOOM, MAX_ZOOM);

        if old_zoom != self.zoom {
            self.update_camera_zoom();

            // Re-anchor so the cursor still hovers the same world point.
            let new_mouse_world_pos = self.camera.screen_to_world(mouse_screen_pos);
            self.move_by(mouse_world_pos - new_mouse_world_pos);
        }
    }

    pub fn move_by(&mut self, movement: Vec2) {
        self.camera.target += movement;
        self.adjust_camera_bounds();
    }

    fn update_camera_zoom(&mut self) {
        let world_ratio = self.world_width as f32 / self.world_height as f32;
        let screen_ratio = screen_width() / screen_height();

        // Aspect ratio adjustments so the world is not distorted.
        let (horizontal_adjustment, vertical_adjustment) = if world_ratio >= screen_ratio {
            (world_ratio / screen_ratio, 1.0)
        } else {
            (1.0, screen_ratio / world_ratio)
        };

        self.camera.zoom = vec2(
            1.0 / self.world_width as f32 * 2.0 * self.zoom * horizontal_adjustment,
            1.0 / self.world_height as f32 * 2.0 * self.zoom * vertical_adjustment,
        );
    }

    fn adjust_camera_bounds(&mut self) {
        let world_ratio = self.world_width as f32 / self.world_height as f32;
        let screen_ratio = screen_width() / screen_height();

        let horizontal_view = if world_ratio >= screen_ratio {
            (self.world_width as f32 / self.zoom) * (screen_ratio / world_ratio)
        } else {
            self.world_width as f32 / self.zoom
        };
        let vertical_view = if world_ratio >= screen_ratio {
            self.world_height as f32 / self.zoom
        } else {
            (self.world_height as f32 / self.zoom) * (world_ratio / screen_ratio)
        };

        self.camera.target.x =
            clamp_axis(self.camera.target.x, horizontal_view, self.world_width as f32);
        self.camera.target.y =
            clamp_axis(self.camera.target.y, vertical_view, self.world_height as f32);
    }

    /// Converts the current mouse screen position to world coordinates
    pub fn get_mouse_world_pos(&self) -> Vec2 {
        self.camera.screen_to_world(Vec2::from(mouse_position()))
    }

    /// Resets the camera to its default position and zoom
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.camera.target = vec2(
            self.world_width as f32 / 2.0,
            self.world_height as f32 / 2.0,
        );
        self.update_camera_zoom();
        self.adjust_camera_bounds();
    }

    /// Handles window resize events.
    pub fn handle_resize(&mut self) {
        self.update_camera_zoom();
        self.adjust_camera_bounds();
    }
}

/// Clamp one axis of the camera target so the view stays on the world.
fn clamp_axis(value: f32, view_size: f32, world_size: f32) -> f32 {
    let min = view_size / 2.0;
    let max = world_size - min;

    if max < min {
        // View is larger than the world, center it.
        world_size / 2.0
    } else {
        value.clamp(min, max)
    }
}
