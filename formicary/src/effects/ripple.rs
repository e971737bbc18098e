use macroquad::prelude::*;

use super::{Effect, RIPPLE_RADIUS, RIPPLE_STROKE, Scene, SceneNodeId};
use crate::simulation::Timer;

/// Expanding, fading ring anchored where food was placed.
///
/// Visuals are a pure function of elapsed time: the ring scales as
/// `1 + 2 * elapsed` and fades linearly to fully transparent at the end of
/// its duration.
pub struct Ripple {
    pos: Vec2,
    color: Color,
    timer: Timer,
    node: Option<SceneNodeId>,
}

impl Ripple {
    pub fn new(pos: Vec2, color: Color, duration: f32) -> Self {
        Self {
            pos,
            color,
            timer: Timer::new(duration),
            node: None,
        }
    }
}

impl Effect for Ripple {
    fn create(&mut self, scene: &mut dyn Scene) {
        self.node = Some(scene.insert_circle(self.pos, RIPPLE_RADIUS, RIPPLE_STROKE, self.color));
    }

    fn update(&mut self, scene: &mut dyn Scene, dt: f32) -> bool {
        self.timer.advance(dt);

        if let Some(node) = self.node {
            scene.set_scale(node, 1.0 + 2.0 * self.timer.elapsed);
            scene.set_alpha(node, (1.0 - self.timer.fraction()).max(0.0));
        }

        !self.timer.is_done()
    }

    fn node(&self) -> Option<SceneNodeId> {
        self.node
    }
}
