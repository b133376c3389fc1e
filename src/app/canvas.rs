//! The page's `<canvas>` as a drawing surface

use tracing::warn;
use web_sys::HtmlCanvasElement;

use crate::core::{Circle, DrawingSurface, NodeId, Oscillation, Rgb, Scene, Viewport};

/// Canvas element plus the render tree egui paints onto it
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    scene: Scene,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            scene: Scene::new(),
        }
    }

    /// Hand the populated render tree to the app
    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl DrawingSurface for CanvasSurface {
    fn set_size(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
        self.scene.set_size(viewport);
    }

    fn set_background(&mut self, color: Rgb) {
        let style = format!("background-color: {}", color.css());
        if let Err(e) = self.canvas.set_attribute("style", &style) {
            warn!(error = ?e, "Failed to set canvas background");
        }
        self.scene.set_background(color);
    }

    fn append(&mut self, circle: Circle) -> NodeId {
        self.scene.append(circle)
    }

    fn attach(&mut self, node: NodeId, oscillation: Oscillation) {
        self.scene.attach(node, oscillation);
    }
}
