mod pulse;
mod ripple;
mod scene;

pub use pulse::Pulse;
pub use ripple::Ripple;
pub use scene::{CanvasScene, CircleNode, Scene, SceneNodeId};

use macroquad::prelude::*;

/// Default lifetime of a ripple, in seconds.
pub const RIPPLE_DURATION: f32 = 1.0;
/// Base radius of the ripple ring, in world units.
pub const RIPPLE_RADIUS: f32 = 2.0;
pub const RIPPLE_STROKE: f32 = 0.25;

/// Lifetime of a nest pulse, in seconds.
pub const PULSE_DURATION: f32 = 0.4;
pub const PULSE_RADIUS: f32 = 1.2;
pub const PULSE_STROKE: f32 = 0.2;

/// A transient visual with a bounded lifetime.
///
/// Lifecycle: `create` is called exactly once right after construction and
/// allocates the effect's renderable node. `update` advances elapsed time and
/// recomputes the node's visuals; it returns `true` while the effect should
/// stay alive and `false` once its duration has elapsed. The effect never
/// removes its own node; the manager does that when `update` reports expiry.
pub trait Effect {
    fn create(&mut self, scene: &mut dyn Scene);
    fn update(&mut self, scene: &mut dyn Scene, dt: f32) -> bool;
    /// The node the manager must remove on expiry, if one was created.
    fn node(&self) -> Option<SceneNodeId>;
}

/// Tagged effect variant. Mapping a tag to a constructor here avoids an
/// inheritance chain; an invalid variant cannot be expressed.
#[derive(Debug, Clone, Copy)]
pub enum EffectKind {
    /// Expanding, fading ring shown where food is placed.
    Ripple { color: Color },
    /// Short ring flash at the nest when food is delivered.
    Pulse { color: Color },
}

impl EffectKind {
    pub fn build(self, pos: Vec2) -> Box<dyn Effect> {
        match self {
            EffectKind::Ripple { color } => Box::new(Ripple::new(pos, color, RIPPLE_DURATION)),
            EffectKind::Pulse { color } => Box::new(Pulse::new(pos, color)),
        }
    }
}

/// Owns the set of active effects, advances them each frame, and purges
/// finished ones. Effects are updated in spawn order.
pub struct EffectManager {
    active: Vec<Box<dyn Effect>>,
}

impl EffectManager {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Construct the requested variant at `pos`, insert its node into the
    /// scene, and add it to the active set.
    pub fn spawn(&mut self, kind: EffectKind, pos: Vec2, scene: &mut dyn Scene) {
        let mut effect = kind.build(pos);
        effect.create(scene);
        self.active.push(effect);
    }

    /// Advance every active effect by `dt`. Effects whose update reports
    /// completion get their node removed from the scene and are dropped.
    pub fn tick(&mut self, dt: f32, scene: &mut dyn Scene) {
        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].update(scene, dt) {
                i += 1;
            } else {
                let expired = self.active.remove(i);
                if let Some(node) = expired.node() {
                    scene.remove(node);
                }
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self, scene: &mut dyn Scene) {
        for effect in self.active.drain(..) {
            if let Some(node) = effect.node() {
                scene.remove(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ripple() -> EffectKind {
        EffectKind::Ripple { color: WHITE }
    }

    #[test]
    fn spawn_inserts_one_node_per_effect() {
        let mut scene = CanvasScene::new();
        let mut manager = EffectManager::new();

        manager.spawn(ripple(), vec2(1.0, 1.0), &mut scene);
        manager.spawn(ripple(), vec2(9.0, 9.0), &mut scene);

        assert_eq!(manager.active_count(), 2);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn expired_effect_node_is_removed_on_the_same_tick() {
        let mut scene = CanvasScene::new();
        let mut manager = EffectManager::new();
        manager.spawn(ripple(), vec2(0.0, 0.0), &mut scene);

        manager.tick(0.5, &mut scene);
        assert_eq!(manager.active_count(), 1);
        assert_eq!(scene.len(), 1);

        // Crossing the duration retires the effect and its node together.
        manager.tick(0.5, &mut scene);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn effects_keep_independent_node_state() {
        let mut scene = CanvasScene::new();
        let mut manager = EffectManager::new();

        manager.spawn(ripple(), vec2(0.0, 0.0), &mut scene);
        manager.tick(0.5, &mut scene);
        manager.spawn(ripple(), vec2(5.0, 5.0), &mut scene);
        manager.tick(0.25, &mut scene);

        // First ripple is at elapsed 0.75, second at 0.25; their nodes must
        // not share scale or alpha.
        assert_eq!(scene.len(), 2);
        let mut scales: Vec<f32> = scene.nodes().map(|(_, n)| n.scale).collect();
        scales.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((scales[0] - 1.5).abs() < 1e-5, "scale was {}", scales[0]);
        assert!((scales[1] - 2.5).abs() < 1e-5, "scale was {}", scales[1]);
    }

    #[test]
    fn later_spawn_does_not_share_elapsed_time() {
        let mut scene = CanvasScene::new();
        let mut manager = EffectManager::new();

        manager.spawn(ripple(), vec2(0.0, 0.0), &mut scene);
        manager.tick(0.9, &mut scene);
        manager.spawn(ripple(), vec2(5.0, 5.0), &mut scene);

        // First ripple expires, second keeps going.
        manager.tick(0.2, &mut scene);
        assert_eq!(manager.active_count(), 1);
        assert_eq!(scene.len(), 1);

        manager.tick(1.0, &mut scene);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(scene.len(), 0);
    }

    /// Scene wrapper that records which node each scale write targeted.
    struct RecordingScene {
        inner: CanvasScene,
        inserts: Vec<SceneNodeId>,
        scale_writes: Vec<SceneNodeId>,
    }

    impl RecordingScene {
        fn new() -> Self {
            Self {
                inner: CanvasScene::new(),
                inserts: Vec::new(),
                scale_writes: Vec::new(),
            }
        }
    }

    impl Scene for RecordingScene {
        fn insert_circle(
            &mut self,
            pos: Vec2,
            radius: f32,
            stroke: f32,
            color: Color,
        ) -> SceneNodeId {
            let id = self.inner.insert_circle(pos, radius, stroke, color);
            self.inserts.push(id);
            id
        }
        fn remove(&mut self, id: SceneNodeId) {
            self.inner.remove(id);
        }
        fn set_position(&mut self, id: SceneNodeId, pos: Vec2) {
            self.inner.set_position(id, pos);
        }
        fn set_scale(&mut self, id: SceneNodeId, scale: f32) {
            self.scale_writes.push(id);
            self.inner.set_scale(id, scale);
        }
        fn set_alpha(&mut self, id: SceneNodeId, alpha: f32) {
            self.inner.set_alpha(id, alpha);
        }
        fn get(&self, id: SceneNodeId) -> Option<&CircleNode> {
            self.inner.get(id)
        }
        fn contains(&self, id: SceneNodeId) -> bool {
            self.inner.contains(id)
        }
        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    #[test]
    fn effects_update_in_spawn_order() {
        let mut scene = RecordingScene::new();
        let mut manager = EffectManager::new();

        manager.spawn(ripple(), vec2(0.0, 0.0), &mut scene);
        manager.spawn(ripple(), vec2(1.0, 0.0), &mut scene);
        manager.spawn(ripple(), vec2(2.0, 0.0), &mut scene);

        scene.scale_writes.clear();
        manager.tick(0.1, &mut scene);

        // One write per effect, in the order the effects were spawned.
        assert_eq!(scene.scale_writes, scene.inserts);
    }

    #[test]
    fn clear_drops_all_effects_and_nodes() {
        let mut scene = CanvasScene::new();
        let mut manager = EffectManager::new();
        manager.spawn(ripple(), vec2(0.0, 0.0), &mut scene);
        manager.spawn(EffectKind::Pulse { color: WHITE }, vec2(1.0, 1.0), &mut scene);

        manager.clear(&mut scene);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(scene.len(), 0);
    }
}
