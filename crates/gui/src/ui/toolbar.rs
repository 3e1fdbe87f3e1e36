//! Canvas toolbar: zoom, lighting, fullscreen, clear and save

use egui::Ui;
use shared::LightMode;

use crate::app::EguiFullscreen;
use crate::canvas::CanvasCommand;
use crate::export::design_json;
use crate::i18n::t;
use crate::state::AppState;
use crate::viewport::FullscreenHost;

// ── Public actions ───────────────────────────────────────────

/// Copy the design records to the clipboard
pub fn action_save_design(ctx: &egui::Context, state: &AppState) {
    match design_json(state.canvas.items()) {
        Ok(json) => {
            tracing::info!("{}: {} items", t("status.saved"), state.canvas.items().len());
            ctx.copy_text(json);
        }
        Err(e) => tracing::warn!("{e}"),
    }
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let ctx = ui.ctx().clone();
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        ui.toggle_value(&mut state.panels.catalog, t("toolbar.catalog"));
        ui.separator();

        // Zoom
        if ui.button("−").on_hover_text(t("toolbar.zoom_out")).clicked() {
            commands.push(CanvasCommand::ZoomOut);
        }
        ui.label(format!("{}%", state.canvas.view().zoom_percent()));
        if ui.button("+").on_hover_text(t("toolbar.zoom_in")).clicked() {
            commands.push(CanvasCommand::ZoomIn);
        }
        ui.separator();

        // Lighting
        let light_label = match state.canvas.light_mode() {
            LightMode::Day => t("toolbar.day"),
            LightMode::Night => t("toolbar.night"),
        };
        if ui
            .button(light_label)
            .on_hover_text(t("toolbar.light_hint"))
            .clicked()
        {
            commands.push(CanvasCommand::ToggleLight);
        }

        // Fullscreen, label follows the live window state
        let mut host = EguiFullscreen::new(&ctx);
        let fullscreen_label = if host.is_fullscreen() {
            t("toolbar.exit_fullscreen")
        } else {
            t("toolbar.fullscreen")
        };
        if ui.button(fullscreen_label).on_hover_text("F11").clicked() {
            state.canvas.toggle_fullscreen(&mut host);
        }
        ui.separator();

        let has_items = !state.canvas.items().is_empty();
        if ui
            .add_enabled(has_items, egui::Button::new(t("toolbar.clear")))
            .on_hover_text(t("toolbar.clear_hint"))
            .clicked()
        {
            commands.push(CanvasCommand::Clear);
        }
        if ui.button(t("toolbar.save")).clicked() {
            action_save_design(&ctx, state);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(t("toolbar.settings")).clicked() {
                state.show_settings_window = !state.show_settings_window;
            }
        });
    });

    for command in commands {
        state.canvas.apply(command);
    }
}
