//! Night-sky theme: black canvas, green stars, grey overlay text

use egui::Color32;

use crate::core::Rgb;

pub mod colors {
    use super::Color32;

    // === Canvas ===
    pub const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);          // #000000 - pure black

    // === Overlay text ===
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160); // #A0A0A0
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);        // #505050
}

/// Core colour to egui colour
pub fn color32(rgb: Rgb) -> Color32 {
    let Rgb([r, g, b]) = rgb;
    Color32::from_rgb(r, g, b)
}

/// Dark visuals with every fill forced to the canvas black
pub fn night_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.faint_bg_color = BACKGROUND;
    visuals.override_text_color = Some(TEXT_SECONDARY);

    // No shadows - nothing floats over the sky
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
