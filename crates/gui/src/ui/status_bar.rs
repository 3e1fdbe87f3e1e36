use egui::Ui;

use crate::i18n::t;
use crate::state::{item_display_name, AppState};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let item_count = state.canvas.items().len();
        ui.weak(format!("{}: {item_count}", t("status.items")));

        ui.separator();

        let selected = state
            .canvas
            .selection()
            .and_then(|id| state.canvas.items().get(id));
        if let Some(product) = state.canvas.incoming() {
            ui.colored_label(
                egui::Color32::from_rgb(40, 110, 200),
                format!("{}: {}", t("status.dragging"), product.name),
            );
        } else if let Some(item) = selected {
            ui.label(format!("{}: {}", t("status.selected"), item_display_name(item)));
            ui.weak(format!("{}° ×{:.1}", item.rotation, item.scale));
        } else {
            ui.weak(t("status.ready"));
        }

        // Right-aligned zoom
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!(
                "{}: {}%",
                t("status.zoom"),
                state.canvas.view().zoom_percent()
            ));
        });
    });
}
