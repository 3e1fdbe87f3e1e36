//! Application style derived from the editor settings

use eframe::egui;

use crate::state::{CanvasSettings, EditorSettings};

/// Panel and highlight colors that frame the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChromeColors {
    panel_fill: egui::Color32,
    window_fill: egui::Color32,
    selection_bg: egui::Color32,
}

impl ChromeColors {
    /// Panels are a shade darker than the floor so the canvas stands out;
    /// the selection highlight is the canvas selection color, lightened
    fn from_canvas(canvas: &CanvasSettings) -> Self {
        let [r, g, b] = canvas.background_color;
        let shade = |c: u8| c.saturating_sub(10);
        let [sr, sg, sb] = canvas.selection_color;
        let tint = |c: u8| c + (255 - c) / 2;
        Self {
            panel_fill: egui::Color32::from_rgb(shade(r), shade(g), shade(b)),
            window_fill: egui::Color32::from_rgb(r, g, b),
            selection_bg: egui::Color32::from_rgb(tint(sr), tint(sg), tint(sb)),
        }
    }
}

/// Font size multipliers per text style
const TEXT_SCALES: [(egui::TextStyle, f32); 4] = [
    (egui::TextStyle::Body, 1.0),
    (egui::TextStyle::Button, 1.0),
    (egui::TextStyle::Small, 0.85),
    (egui::TextStyle::Heading, 1.3),
];

/// Apply the light theme, colors and font size from `settings`.
/// Called at startup and whenever the settings window changes something.
pub fn apply_styles(ctx: &egui::Context, settings: &EditorSettings) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let colors = ChromeColors::from_canvas(&settings.canvas);
    style.visuals.panel_fill = colors.panel_fill;
    style.visuals.window_fill = colors.window_fill;
    style.visuals.selection.bg_fill = colors.selection_bg;
    style.spacing.item_spacing = egui::vec2(6.0, 6.0);

    let font_size = settings.ui.font_size;
    for (text_style, scale) in TEXT_SCALES {
        style
            .text_styles
            .insert(text_style, egui::FontId::proportional(font_size * scale));
    }
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(font_size));

    ctx.set_style(style);
}
