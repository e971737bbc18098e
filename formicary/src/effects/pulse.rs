use macroquad::prelude::*;

use super::{Effect, PULSE_DURATION, PULSE_RADIUS, PULSE_STROKE, Scene, SceneNodeId};
use crate::simulation::Timer;

/// Short ring flash at the nest when an ant delivers food.
pub struct Pulse {
    pos: Vec2,
    color: Color,
    timer: Timer,
    node: Option<SceneNodeId>,
}

impl Pulse {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            color,
            timer: Timer::new(PULSE_DURATION),
            node: None,
        }
    }
}

impl Effect for Pulse {
    fn create(&mut self, scene: &mut dyn Scene) {
        self.node = Some(scene.insert_circle(self.pos, PULSE_RADIUS, PULSE_STROKE, self.color));
    }

    fn update(&mut self, scene: &mut dyn Scene, dt: f32) -> bool {
        self.timer.advance(dt);
        let progress = self.timer.fraction().min(1.0);

        if let Some(node) = self.node {
            scene.set_scale(node, 1.0 + 0.5 * progress);
            scene.set_alpha(node, 1.0 - progress);
        }

        !self.timer.is_done()
    }

    fn node(&self) -> Option<SceneNodeId> {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::CanvasScene;

    #[test]
    fn fades_out_over_its_lifetime() {
        let mut scene = CanvasScene::new();
        let mut pulse = Pulse::new(vec2(0.0, 0.0), WHITE);
        pulse.create(&mut scene);

        assert!(pulse.update(&mut scene, PULSE_DURATION / 2.0));
        let node = scene.get(pulse.node().unwrap()).unwrap();
        assert!((node.alpha - 0.5).abs() < 1e-5);

        assert!(!pulse.update(&mut scene, PULSE_DURATION));
        let node = scene.get(pulse.node().unwrap()).unwrap();
        assert_eq!(node.alpha, 0.0);
    }
}
