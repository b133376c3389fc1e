//! Render tree and the drawing surface abstraction
//!
//! - DrawingSurface: what the renderer needs from a canvas
//! - Scene: in-memory render tree, painted by egui or exported by the CLI

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::oscillation::Oscillation;
use super::star::Viewport;

/// sRGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Star fill (SVG named colour "green")
    pub const FILL: Rgb = Rgb([0, 128, 0]);
    /// Canvas background
    pub const BACKGROUND: Rgb = Rgb([0, 0, 0]);

    /// CSS name where one exists, `#rrggbb` otherwise
    pub fn css(&self) -> String {
        match *self {
            Rgb::FILL => "green".to_string(),
            Rgb::BACKGROUND => "black".to_string(),
            Rgb([r, g, b]) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Handle to a node in the render tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Filled circle primitive
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: [f32; 2],
    pub radius: f32,
    pub fill: Rgb,
}

/// One primitive plus its (optional) looping animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub circle: Circle,
    pub animation: Option<Oscillation>,
}

impl SceneNode {
    /// Radius as painted at `now`
    pub fn radius_at(&self, now: f64) -> f32 {
        match &self.animation {
            Some(osc) => osc.radius_at(now),
            None => self.circle.radius,
        }
    }
}

/// A node evaluated at a point in time, ready to paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub center: [f32; 2],
    pub radius: f32,
    pub fill: Rgb,
}

/// Anything the renderer can draw stars onto
pub trait DrawingSurface {
    fn set_size(&mut self, viewport: Viewport);
    fn set_background(&mut self, color: Rgb);
    /// Insert a primitive into the render tree
    fn append(&mut self, circle: Circle) -> NodeId;
    /// Attach a looping animation to a previously appended primitive
    fn attach(&mut self, node: NodeId, oscillation: Oscillation);
}

/// In-memory render tree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Option<Viewport>,
    pub background: Option<Rgb>,
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes carrying an animation
    pub fn animated_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.animation.is_some()).count()
    }

    /// Evaluate every node at time `now`
    pub fn sample(&self, now: f64) -> impl Iterator<Item = Sample> + '_ {
        self.nodes.iter().map(move |n| Sample {
            center: n.circle.center,
            radius: n.radius_at(now),
            fill: n.circle.fill,
        })
    }
}

impl DrawingSurface for Scene {
    fn set_size(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "Scene resized");
        self.viewport = Some(viewport);
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
    }

    fn append(&mut self, circle: Circle) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            circle,
            animation: None,
        });
        id
    }

    fn attach(&mut self, node: NodeId, oscillation: Oscillation) {
        match self.nodes.get_mut(node.0) {
            Some(n) => n.animation = Some(oscillation),
            None => warn!(node = node.0, "Animation attached to unknown node, ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle {
            center: [x, y],
            radius: r,
            fill: Rgb::FILL,
        }
    }

    #[test]
    fn test_append_returns_sequential_ids() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let a = scene.append(circle(1.0, 2.0, 0.5));
        let b = scene.append(circle(3.0, 4.0, 0.7));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.node(b).map(|n| n.circle.center), Some([3.0, 4.0]));
        assert_eq!(scene.animated_count(), 0);
    }

    #[test]
    fn test_attach_and_sample() {
        let mut scene = Scene::new();
        let still = scene.append(circle(0.0, 0.0, 2.0));
        let blinking = scene.append(circle(5.0, 5.0, 4.0));
        scene.attach(blinking, Oscillation::new(4.0, 2.0, 0.0));

        assert_eq!(scene.animated_count(), 1);
        assert!(scene.node(still).unwrap().animation.is_none());

        // Half a period in: the blinking node is fully collapsed
        let samples: Vec<Sample> = scene.sample(1.0).collect();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].radius, 2.0);
        assert!(samples[1].radius.abs() < 1e-6);
        assert_eq!(samples[1].center, [5.0, 5.0]);
    }

    #[test]
    fn test_attach_unknown_node_is_ignored() {
        let mut scene = Scene::new();
        scene.append(circle(0.0, 0.0, 1.0));
        scene.attach(NodeId(7), Oscillation::new(1.0, 3.0, 0.0));
        assert_eq!(scene.animated_count(), 0);
    }

    #[test]
    fn test_surface_properties() {
        let mut scene = Scene::new();
        scene.set_size(Viewport::new(800.0, 600.0).unwrap());
        scene.set_background(Rgb::BACKGROUND);
        assert_eq!(scene.viewport.map(|v| v.width), Some(800.0));
        assert_eq!(scene.background, Some(Rgb::BACKGROUND));
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(Rgb::FILL.css(), "green");
        assert_eq!(Rgb::BACKGROUND.css(), "black");
        assert_eq!(Rgb([255, 16, 1]).css(), "#ff1001");
    }
}
