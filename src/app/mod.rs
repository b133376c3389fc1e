//! Browser starfield app
//!
//! Entry point samples the window once, populates the canvas render tree,
//! then hands it to eframe which paints every frame.

mod canvas;
mod overlay;

use eframe::egui;
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::{populate, Scene, StarfieldConfig, Viewport};
use crate::theme::{color32, colors, night_visuals};
use crate::time::now_seconds;

use canvas::CanvasSurface;
use overlay::FpsCounter;

/// Id of the `<canvas>` element the starfield mounts on
pub const CANVAS_ID: &str = "starfield";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().expect("no window");
    let viewport = read_viewport(&window).expect("window has no usable size");

    // Optional page override, e.g. window.__starfield_config = '{"count": 2000}'
    let mut config = js_sys::eval("window.__starfield_config")
        .ok()
        .and_then(|v| v.as_string())
        .and_then(|json| StarfieldConfig::from_json(&json))
        .unwrap_or_default();
    config.viewport = viewport;

    let canvas = window
        .document()
        .expect("no document")
        .get_element_by_id(CANVAS_ID)
        .expect("no canvas element")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("not a canvas element");

    let mut surface = CanvasSurface::new(canvas.clone());
    populate(&config, &mut surface, &mut rand::thread_rng(), now_seconds());
    let scene = surface.into_scene();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(StarfieldApp::new(cc, scene, &config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

/// Window inner size in CSS pixels
fn read_viewport(window: &web_sys::Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Viewport::new(width as f32, height as f32)
}

pub struct StarfieldApp {
    /// Render tree populated at startup, never re-laid out
    pub(crate) scene: Scene,
    pub(crate) show_stats: bool,
    pub(crate) fps_counter: FpsCounter,
}

impl StarfieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, scene: Scene, config: &StarfieldConfig) -> Self {
        cc.egui_ctx.set_visuals(night_visuals());
        info!(stars = scene.len(), show_stats = config.show_stats, "Starfield app created");

        Self {
            scene,
            show_stats: config.show_stats,
            fps_counter: FpsCounter::new(),
        }
    }

    /// Paint every star at its current blink radius
    fn paint_scene(&self, painter: &egui::Painter, origin: egui::Pos2, now: f64) {
        for sample in self.scene.sample(now) {
            if sample.radius <= 0.0 {
                continue;
            }
            painter.circle_filled(
                origin + egui::vec2(sample.center[0], sample.center[1]),
                sample.radius,
                color32(sample.fill),
            );
        }
    }
}

impl eframe::App for StarfieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Blinks are time-driven, keep frames coming
        ctx.request_repaint();

        let now = now_seconds();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                self.paint_scene(&painter, rect.min, now);

                if self.show_stats {
                    self.render_stats(&painter, rect);
                }
            });
    }
}
