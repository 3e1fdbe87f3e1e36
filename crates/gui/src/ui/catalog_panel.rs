//! Catalog side panel: one drag source per product

use egui::Ui;

use crate::dnd::DragSource;
use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("catalog.title"));
    ui.weak(t("catalog.hint"));
    ui.separator();

    if state.catalog.is_empty() {
        ui.weak(t("catalog.empty"));
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for source in &mut state.catalog {
            product_card(ui, source);
        }
    });
}

fn product_card(ui: &mut Ui, source: &mut DragSource) {
    let id = egui::Id::new(("catalog_product", source.product().id.as_str()));
    source.set_dragging(ui.ctx().is_being_dragged(id));
    let opacity = source.opacity();
    let product = source.product();

    ui.dnd_drag_source(id, source.payload(), |ui| {
        ui.multiply_opacity(opacity);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(&product.name);
            let d = product.dimensions;
            ui.weak(format!("{:.0} × {:.0} × {:.0} cm", d.width, d.height, d.depth));
        });
    });
}
