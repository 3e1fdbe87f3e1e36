//! Main application module

mod fullscreen;
mod keyboard;
mod settings_window;
mod styles;

use eframe::egui;
use shared::Product;

pub use fullscreen::EguiFullscreen;

use crate::i18n;
use crate::state::{AppState, EditorSettings};
use crate::ui::{canvas_view, catalog_panel, status_bar, toolbar};

/// Main application
pub struct RoomApp {
    state: AppState,
    /// Last scene version seen, for change logging
    last_version: u64,
}

impl RoomApp {
    pub fn new(cc: &eframe::CreationContext<'_>, products: Vec<Product>) -> Self {
        let settings = EditorSettings::load();
        i18n::sync_with(settings.ui.language);

        styles::apply_styles(&cc.egui_ctx, &settings);

        let state = AppState::new(products, settings);
        tracing::info!("Editor started with {} catalog products", state.catalog.len());

        let last_version = state.canvas.version();

        Self {
            state,
            last_version,
        }
    }

    fn on_settings_changed(&mut self, ctx: &egui::Context) {
        self.state.apply_settings();
        i18n::sync_with(self.state.settings.ui.language);
        styles::apply_styles(ctx, &self.state.settings);
        if let Err(e) = self.state.settings.save() {
            tracing::warn!("{e}");
        }
    }
}

impl eframe::App for RoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Settings window ──────────────────────────────────
        if settings_window::settings_window(ctx, &mut self.state) {
            self.on_settings_changed(ctx);
        }

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        if self.state.panels.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Left panel: Catalog ──────────────────────────────
        if self.state.panels.catalog {
            egui::SidePanel::left("catalog")
                .default_width(220.0)
                .width_range(160.0..=360.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    catalog_panel::show(ui, &mut self.state);
                });
        }

        // ── Central panel: canvas ────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                canvas_view::show(ui, &mut self.state);
            });

        let version = self.state.canvas.version();
        if version != self.last_version {
            tracing::debug!(
                "Scene version {} ({} items)",
                version,
                self.state.canvas.items().len()
            );
            self.last_version = version;
        }
    }
}
