//! One-shot starfield setup: size the surface, generate, draw

use rand::Rng;
use tracing::info;

use super::config::StarfieldConfig;
use super::render::draw;
use super::scene::{DrawingSurface, Rgb};
use super::star::{generate, PointLight};

/// Populate `surface` with a fresh starfield and return the drawn lights.
///
/// Runs once per view; nothing is re-laid out afterwards.
pub fn populate<S, R>(config: &StarfieldConfig, surface: &mut S, rng: &mut R, now: f64) -> Vec<PointLight>
where
    S: DrawingSurface + ?Sized,
    R: Rng + ?Sized,
{
    surface.set_size(config.viewport);
    surface.set_background(Rgb::BACKGROUND);

    let mut lights = generate(config.count, config.viewport, rng);
    for light in lights.iter_mut() {
        draw(light, surface, now);
    }

    info!(
        stars = lights.len(),
        width = config.viewport.width,
        height = config.viewport.height,
        "Starfield populated"
    );
    lights
}
