//! Platform-agnostic core module - shared between the WASM canvas and the CLI

pub mod config;
pub mod field;
pub mod oscillation;
pub mod render;
pub mod scene;
pub mod star;
pub mod svg;

pub use config::{OutputFormat, StarfieldConfig};
pub use field::populate;
pub use oscillation::Oscillation;
pub use render::draw;
pub use scene::{Circle, DrawingSurface, NodeId, Rgb, Sample, Scene, SceneNode};
pub use star::{generate, PointLight, Viewport, DEFAULT_COUNT};
pub use svg::to_svg;
