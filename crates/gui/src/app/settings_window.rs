//! Settings window

use eframe::egui;

use crate::i18n::t;
use crate::state::{AppState, EditorSettings, Language};

/// Show the settings window; returns true if any value changed this frame
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) -> bool {
    let mut open = state.show_settings_window;
    let mut changed = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                changed |= show_ui_settings(ui, state);
                changed |= show_canvas_settings(ui, state);
                changed |= show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open && state.show_settings_window;
    changed
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut state.settings.ui.font_size)
                    .speed(0.5)
                    .range(8.0..=32.0)
                    .suffix(" pt"),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.language"));
        egui::ComboBox::from_id_salt("language_combo")
            .selected_text(state.settings.ui.language.display_name())
            .show_ui(ui, |ui| {
                for lang in Language::all() {
                    changed |= ui
                        .selectable_value(&mut state.settings.ui.language, *lang, lang.display_name())
                        .changed();
                }
            });
    });
    ui.add_space(10.0);
    changed
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
            changed = true;
        }
    });
    changed
}

fn show_canvas_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.canvas"));
    let canvas = &mut state.settings.canvas;
    let mut changed = color_row(ui, t("settings.bg_color"), &mut canvas.background_color);
    changed |= color_row(ui, t("settings.item_color"), &mut canvas.item_color);
    changed |= color_row(ui, t("settings.sel_color"), &mut canvas.selection_color);

    ui.horizontal(|ui| {
        ui.label(t("settings.night_brightness"));
        changed |= ui
            .add(egui::Slider::new(&mut canvas.night_brightness, 0.2..=1.0))
            .changed();
    });
    ui.add_space(10.0);
    changed
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            changed = true;
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = EditorSettings::default();
            changed = true;
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
    changed
}
