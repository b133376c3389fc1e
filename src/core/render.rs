//! Drawing a point light and attaching its blink

use tracing::trace;

use super::oscillation::Oscillation;
use super::scene::{Circle, DrawingSurface, Rgb};
use super::star::PointLight;

/// Draw `light` onto `surface` and start its blink at `now`.
///
/// The primitive handle is recorded on the light; the animation runs from
/// the surface's side from here on.
pub fn draw<S: DrawingSurface + ?Sized>(light: &mut PointLight, surface: &mut S, now: f64) {
    let node = surface.append(Circle {
        center: [light.x, light.y],
        radius: light.radius,
        fill: Rgb::FILL,
    });
    light.handle = Some(node);

    surface.attach(node, Oscillation::new(light.radius, light.period, now));
    trace!(node = node.0, period = light.period, "Star drawn");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{NodeId, Scene};

    #[test]
    fn test_draw_single_star() {
        let mut scene = Scene::new();
        let mut light = PointLight::new(100.0, 50.0, 5.0, 4.0);

        draw(&mut light, &mut scene, 0.0);

        assert_eq!(light.handle, Some(NodeId(0)));
        let node = scene.node(NodeId(0)).unwrap();
        assert_eq!(node.circle.center, [100.0, 50.0]);
        assert_eq!(node.circle.radius, 5.0);
        assert_eq!(node.circle.fill, Rgb::FILL);

        let osc = node.animation.expect("animation attached");
        assert_eq!(osc.keyframes(), [5.0, 0.0, 5.0]);
        assert_eq!(osc.period, 4.0);
        assert!((node.radius_at(0.0) - 5.0).abs() < 1e-6);
        assert!(node.radius_at(2.0).abs() < 1e-6);
        assert!((node.radius_at(4.0) - 5.0).abs() < 1e-6);
        assert!(node.radius_at(6.0).abs() < 1e-6);
    }

    #[test]
    fn test_each_star_starts_at_its_own_attach_time() {
        let mut scene = Scene::new();
        let mut a = PointLight::new(0.0, 0.0, 1.0, 4.0);
        let mut b = PointLight::new(0.0, 0.0, 1.0, 4.0);

        draw(&mut a, &mut scene, 0.0);
        draw(&mut b, &mut scene, 2.0);

        let at = |light: &PointLight, t| scene.node(light.handle.unwrap()).unwrap().radius_at(t);
        assert!(at(&a, 2.0).abs() < 1e-6);
        assert!((at(&b, 2.0) - 1.0).abs() < 1e-6);
    }
}
