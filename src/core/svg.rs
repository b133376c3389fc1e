//! Animated SVG export
//!
//! Writes the scene as an `<svg>` document where every star is a `<circle>`
//! carrying a SMIL `<animate>` on its `r` attribute, so the blink plays in any
//! browser without script.

use std::fmt::Write;

use super::scene::{Rgb, Scene};
use super::star::Viewport;

/// Render `scene` as a standalone SVG document
pub fn to_svg(scene: &Scene) -> String {
    let viewport = scene.viewport.unwrap_or_default();
    let background = scene.background.unwrap_or(Rgb::BACKGROUND);

    // ~160 bytes per animated circle
    let mut out = String::with_capacity(256 + scene.len() * 160);
    write_header(&mut out, viewport, background);

    for node in scene.nodes() {
        let c = &node.circle;
        let _ = write!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}""#,
            c.center[0],
            c.center[1],
            c.radius,
            c.fill.css()
        );
        match &node.animation {
            Some(osc) => {
                let [from, mid, to] = osc.keyframes();
                let _ = writeln!(
                    out,
                    r#"><animate attributeName="r" values="{}; {}; {}" dur="{}s" repeatCount="indefinite"/></circle>"#,
                    from, mid, to, osc.period
                );
            }
            None => out.push_str("/>\n"),
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_header(out: &mut String, viewport: Viewport, background: Rgb) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background-color: {}">"#,
        viewport.width,
        viewport.height,
        background.css()
    );
}
