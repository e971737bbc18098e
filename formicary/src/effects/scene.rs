use macroquad::prelude::*;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Key for scene node slotmap.
    pub struct SceneNodeId;
}

/// A circular outline node owned by exactly one effect.
#[derive(Debug, Clone)]
pub struct CircleNode {
    pub pos: Vec2,
    pub radius: f32,
    pub stroke: f32,
    pub color: Color,
    pub scale: f32,
    pub alpha: f32,
}

/// Thin adapter over the renderable node container. Effects mutate nodes only
/// through this interface, which keeps the animation math testable without a
/// graphics backend.
pub trait Scene {
    fn insert_circle(&mut self, pos: Vec2, radius: f32, stroke: f32, color: Color) -> SceneNodeId;
    fn remove(&mut self, id: SceneNodeId);
    fn set_position(&mut self, id: SceneNodeId, pos: Vec2);
    fn set_scale(&mut self, id: SceneNodeId, scale: f32);
    fn set_alpha(&mut self, id: SceneNodeId, alpha: f32);
    fn get(&self, id: SceneNodeId) -> Option<&CircleNode>;
    fn contains(&self, id: SceneNodeId) -> bool;
    fn len(&self) -> usize;
}

/// Production scene container, drawn once per frame after the world pass.
pub struct CanvasScene {
    nodes: SlotMap<SceneNodeId, CircleNode>,
}

impl CanvasScene {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Iterate over live nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = (SceneNodeId, &CircleNode)> {
        self.nodes.iter()
    }

    /// Draw every live node. Node alpha multiplies the base color alpha.
    pub fn draw(&self) {
        for (_, node) in self.nodes.iter() {
            let color = Color::new(
                node.color.r,
                node.color.g,
                node.color.b,
                node.color.a * node.alpha.clamp(0.0, 1.0),
            );
            draw_circle_lines(
                node.pos.x,
                node.pos.y,
                node.radius * node.scale,
                node.stroke,
                color,
            );
        }
    }
}

impl Scene for CanvasScene {
    fn insert_circle(&mut self, pos: Vec2, radius: f32, stroke: f32, color: Color) -> SceneNodeId {
        self.nodes.insert(CircleNode {
            pos,
            radius,
            stroke,
            color,
            scale: 1.0,
            alpha: 1.0,
        })
    }

    fn remove(&mut self, id: SceneNodeId) {
        if self.nodes.remove(id).is_none() {
            eprintln!("Warning: tried to remove scene node {:?} twice.", id);
        }
    }

    fn set_position(&mut self, id: SceneNodeId, pos: Vec2) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.pos = pos;
        }
    }

    fn set_scale(&mut self, id: SceneNodeId, scale: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.scale = scale;
        }
    }

    fn set_alpha(&mut self, id: SceneNodeId, alpha: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.alpha = alpha;
        }
    }

    fn get(&self, id: SceneNodeId) -> Option<&CircleNode> {
        self.nodes.get(id)
    }

    fn contains(&self, id: SceneNodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_node_starts_at_identity() {
        let mut scene = CanvasScene::new();
        let id = scene.insert_circle(vec2(3.0, 4.0), 2.0, 0.3, WHITE);

        let node = scene.get(id).expect("node should exist after insert");
        assert_eq!(node.scale, 1.0);
        assert_eq!(node.alpha, 1.0);
        assert_eq!(node.pos, vec2(3.0, 4.0));
    }

    #[test]
    fn remove_drops_the_node() {
        let mut scene = CanvasScene::new();
        let id = scene.insert_circle(vec2(0.0, 0.0), 1.0, 0.2, WHITE);
        assert_eq!(scene.len(), 1);

        scene.remove(id);
        assert!(!scene.contains(id));
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn mutators_only_touch_their_node() {
        let mut scene = CanvasScene::new();
        let a = scene.insert_circle(vec2(0.0, 0.0), 1.0, 0.2, WHITE);
        let b = scene.insert_circle(vec2(5.0, 5.0), 1.0, 0.2, WHITE);

        scene.set_scale(a, 3.0);
        scene.set_alpha(a, 0.25);

        assert_eq!(scene.get(a).unwrap().scale, 3.0);
        assert_eq!(scene.get(a).unwrap().alpha, 0.25);
        assert_eq!(scene.get(b).unwrap().scale, 1.0);
        assert_eq!(scene.get(b).unwrap().alpha, 1.0);
    }
}
