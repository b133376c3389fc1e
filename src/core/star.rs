//! Point lights and their bulk generation
//!
//! A point light is one blinking dot: a position, a base radius and the
//! period of its blink. Generation scales everything to the viewport.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::scene::NodeId;

/// Default number of stars in a field
pub const DEFAULT_COUNT: i64 = 10_000;

/// Minimum distance (px) from the top/left edge for a star centre
pub const EDGE_MARGIN: f32 = 10.0;

/// Radius bounds as a fraction of viewport width
pub const RADIUS_MIN_SCALE: f32 = 0.0001;
pub const RADIUS_MAX_SCALE: f32 = 0.0012;

/// Blink period bounds in seconds
pub const PERIOD_MIN: f32 = 3.0;
pub const PERIOD_MAX: f32 = 5.0;

/// Drawable area in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns None unless both dimensions are finite and positive.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// A single blinking dot
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    /// Base radius; the blink animates from here down to zero and back
    pub radius: f32,
    /// Seconds for one full blink (r -> 0 -> r)
    pub period: f32,
    /// Primitive created by `render::draw`, None until drawn
    pub handle: Option<NodeId>,
}

impl PointLight {
    pub fn new(x: f32, y: f32, radius: f32, period: f32) -> Self {
        Self {
            x,
            y,
            radius,
            period,
            handle: None,
        }
    }

    pub fn is_drawn(&self) -> bool {
        self.handle.is_some()
    }
}

/// Uniform value in `[lower, upper)`.
///
/// Written as `lower + U[0,1) * (upper - lower)` so that a degenerate or
/// inverted range never panics the way `gen_range` would.
pub fn random_num<R: Rng + ?Sized>(rng: &mut R, lower: f32, upper: f32) -> f32 {
    lower + rng.gen::<f32>() * (upper - lower)
}

/// Generate `count` point lights scattered over `viewport`.
///
/// A non-positive count yields an empty field.
pub fn generate<R: Rng + ?Sized>(count: i64, viewport: Viewport, rng: &mut R) -> Vec<PointLight> {
    let count = usize::try_from(count).unwrap_or(0);

    // Collapse the margin on viewports narrower than the margin itself
    let x_min = EDGE_MARGIN.min(viewport.width);
    let y_min = EDGE_MARGIN.min(viewport.height);
    let r_min = viewport.width * RADIUS_MIN_SCALE;
    let r_max = viewport.width * RADIUS_MAX_SCALE;

    let mut lights = Vec::with_capacity(count);
    for i in 0..count {
        let light = PointLight::new(
            random_num(rng, x_min, viewport.width),
            random_num(rng, y_min, viewport.height),
            random_num(rng, r_min, r_max),
            random_num(rng, PERIOD_MIN, PERIOD_MAX),
        );
        trace!(i, x = light.x, y = light.y, r = light.radius, "Generated star");
        lights.push(light);
    }

    debug!(count, width = viewport.width, height = viewport.height, "Generated starfield");
    lights
}
