//! Passive stats overlay (fps / star count)

use eframe::egui;
use crate::theme::colors;
use crate::time::now_seconds;
use super::StarfieldApp;

impl StarfieldApp {
    pub(crate) fn render_stats(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        self.fps_counter.tick();

        let text = format!(
            "{:.0} fps / {} stars",
            self.fps_counter.fps(),
            self.scene.len()
        );
        painter.text(
            rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::monospace(11.0),
            colors::TEXT_SECONDARY,
        );
        if self.scene.animated_count() < self.scene.len() {
            painter.text(
                rect.left_top() + egui::vec2(8.0, 24.0),
                egui::Align2::LEFT_TOP,
                format!("{} static", self.scene.len() - self.scene.animated_count()),
                egui::FontId::monospace(11.0),
                colors::TEXT_MUTED,
            );
        }
    }
}

/// FPS counter over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        self.frames.push(now_seconds());
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
