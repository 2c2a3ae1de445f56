//! eframe/egui host for the fractal tree.
//!
//! This module defines [`Viewer`], which owns a [`Scene`] and implements
//! [`eframe::App`]. Every frame it samples the regenerate trigger (Space
//! or the toolbar button), asks the scene to render, and paints the
//! requested circles with an [`egui::Painter`].

use eframe::App;
use fractal_core::{
    config::Config,
    error::Result,
    renderer::DrawSink,
    scene::{FrameStats, Scene},
    types::Rgba,
};
use glam::Vec2;

/// Main application state for the viewer.
///
/// ### Fields
/// - `scene` - Genomes and root placement of the tree being drawn.
/// - `seed` - Seed the genomes were built from (shown in the status bar).
/// - `scale` - Screen pixels per world unit.
/// - `last_stats` - Primitive counts of the previous frame.
pub struct Viewer {
    scene: Scene,
    seed: u64,
    scale: f32,
    last_stats: FrameStats,
}

/// Maps world space (y up, origin at the canvas center) to screen space.
fn world_to_screen(p: Vec2, rect: egui::Rect, scale: f32) -> egui::Pos2 {
    let center = rect.center();
    egui::pos2(center.x + p.x * scale, center.y - p.y * scale)
}

/// Converts a core RGBA color to an egui color, clamping each channel.
fn to_color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// [`DrawSink`] painting circles into an egui canvas.
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    scale: f32,
}

impl DrawSink for PainterSink<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let p = world_to_screen(center, self.rect, self.scale);
        self.painter
            .circle_filled(p, radius * self.scale, to_color32(color));
    }
}

impl Viewer {
    /// Creates a viewer whose tree is seeded from `seed`.
    ///
    /// ### Errors
    /// Propagates genome construction errors from [`Scene::seeded`].
    pub fn new(seed: u64) -> Result<Self> {
        Ok(Self {
            scene: Scene::seeded(seed, Config::default())?,
            seed,
            scale: 1.0,
            last_stats: FrameStats::default(),
        })
    }

    /// Builds the top panel with the regenerate button.
    ///
    /// ### Returns
    /// `true` if the button was clicked this frame.
    fn ui_top_panel(&mut self, ctx: &egui::Context) -> bool {
        let mut clicked = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                clicked = ui.button("Regenerate").clicked();
                ui.label("or press Space");
            });
        });
        clicked
    }

    /// Builds the bottom status bar (seed, branch and circle counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("circles = {}", self.last_stats.circles));
                ui.label(format!("branches = {}", self.last_stats.branches));
                ui.separator();
                ui.label(format!("seed = {}", self.seed));
            });
        });
    }

    /// Builds the central canvas and renders the tree into it.
    fn ui_central_panel(&mut self, ctx: &egui::Context, regenerate: bool) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter_at(rect);

                let mut sink = PainterSink {
                    painter: &painter,
                    rect,
                    scale: self.scale,
                };
                self.last_stats = self.scene.render_frame(regenerate, &mut sink);
            });
    }
}

impl App for Viewer {
    /// eframe callback run once per frame.
    ///
    /// Input is polled first, then the tree is (optionally regenerated
    /// and) drawn, then the status bar reports the frame's counts.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key = ctx.input(|i| i.key_pressed(egui::Key::Space));
        let button = self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx, key || button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(1300.0, 1000.0))
    }

    #[test]
    fn world_origin_maps_to_canvas_center_with_y_flipped() {
        let rect = test_rect();

        assert_eq!(world_to_screen(Vec2::ZERO, rect, 1.0), egui::pos2(650.0, 500.0));
        assert_eq!(
            world_to_screen(Vec2::new(10.0, 20.0), rect, 1.0),
            egui::pos2(660.0, 480.0)
        );
        assert_eq!(
            world_to_screen(Vec2::new(-5.0, -300.0), rect, 2.0),
            egui::pos2(640.0, 1100.0)
        );
    }

    #[test]
    fn default_root_lands_near_the_bottom_of_the_window() {
        let rect = test_rect();
        let root = world_to_screen(Config::default().root_anchor, rect, 1.0);

        assert_eq!(root, egui::pos2(650.0, 800.0));
    }

    #[test]
    fn colors_are_clamped_and_scaled() {
        assert_eq!(
            to_color32(Rgba::new(1.0, 0.0, 0.5, 1.0)),
            egui::Color32::from_rgba_unmultiplied(255, 0, 128, 255)
        );
        assert_eq!(
            to_color32(Rgba::new(1.05, -0.2, 0.0, 0.1)),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 26)
        );
    }

    #[test]
    fn new_viewer_starts_with_empty_stats() {
        let viewer = Viewer::new(3).unwrap();

        assert_eq!(viewer.seed, 3);
        assert_eq!(viewer.last_stats, FrameStats::default());
        assert_eq!(viewer.scene.genomes().len(), fractal_core::config::GENERATIONS);
    }
}
