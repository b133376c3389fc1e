//! Starfield - blinking dots on a full-window canvas
//!
//! Scatters a few thousand green dots over a black canvas; each one pulses
//! its radius down to zero and back on its own 3-5 second loop.
//!
//! - `core`: generation, render tree, animation, SVG export (no platform deps)
//! - `app`: eframe/egui front-end mounted on `<canvas id="starfield">` (WASM)

pub mod core;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use app::{StarfieldApp, CANVAS_ID};
