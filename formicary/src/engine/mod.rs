mod camera;
mod rendering;

pub use camera::GameCamera;
pub use rendering::{CameraAction, Renderer};
