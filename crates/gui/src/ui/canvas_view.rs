//! Central canvas: drop zone, item painter and item toolbar

use egui::{Color32, Pos2, Rect, Stroke, Ui};
use shared::{Point2D, RotateDirection, ScaleDirection};

use crate::canvas::CanvasCommand;
use crate::dnd::{DragPayload, DropHandler};
use crate::i18n::t;
use crate::state::{AppState, CanvasSettings};
use crate::viewport::{RenderFrame, RenderItem, ScreenRect};

const ITEM_CORNER_RADIUS: f32 = 3.0;
const TOOLBAR_GAP: f32 = 6.0;

fn to_point(pos: Pos2) -> Point2D {
    Point2D::new(pos.x as f64, pos.y as f64)
}

fn to_screen_rect(rect: Rect) -> ScreenRect {
    ScreenRect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

fn to_egui_rect(rect: &ScreenRect) -> Rect {
    Rect::from_min_size(
        egui::pos2(rect.left as f32, rect.top as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

/// Canvas colors with the light filter applied
struct Palette {
    background: Color32,
    floor: Color32,
    item: Color32,
    outline: Color32,
    selection: Color32,
    text: Color32,
}

impl Palette {
    fn new(settings: &CanvasSettings, brightness: f32) -> Self {
        let dim = |rgb: [u8; 3]| {
            let scale = |c: u8| (c as f32 * brightness).round().clamp(0.0, 255.0) as u8;
            Color32::from_rgb(scale(rgb[0]), scale(rgb[1]), scale(rgb[2]))
        };
        let [r, g, b] = settings.background_color;
        Self {
            background: dim([r.saturating_sub(20), g.saturating_sub(20), b.saturating_sub(20)]),
            floor: dim(settings.background_color),
            item: dim(settings.item_color),
            outline: dim([90, 70, 50]),
            selection: dim(settings.selection_color),
            text: dim([40, 30, 20]),
        }
    }
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
    state.canvas.fit_to(to_screen_rect(rect));
    let ctx = ui.ctx().clone();

    handle_drag_and_drop(&ctx, rect, state);

    let frame = state.canvas.render();
    let palette = Palette::new(&state.settings.canvas, frame.brightness);
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, palette.background);
    painter.rect_filled(to_egui_rect(&frame.container), 0.0, palette.floor);
    for item in &frame.items {
        paint_item(&painter, item, &palette);
    }

    if let Some(product) = state.canvas.incoming() {
        painter.text(
            rect.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            format!("{}: {}", t("status.dragging"), product.name),
            egui::FontId::proportional(14.0),
            palette.text,
        );
    }

    let mut commands = Vec::new();

    // Pointer press: topmost item under the cursor, or empty canvas
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let command = match frame.item_at(to_point(pos)) {
                Some(item) => CanvasCommand::ClickItem(item.id.clone()),
                None => CanvasCommand::ClickEmpty,
            };
            commands.push(command);
        }
    }

    if let Some(item) = frame.toolbar_item() {
        item_toolbar(&ctx, &frame, item, &mut commands);
    }

    for command in commands {
        state.canvas.apply(command);
    }
}

/// Route egui's drag-and-drop through the canvas `DropHandler`.
///
/// Every release with a product payload reaches `on_drop` so the drag ends;
/// a release outside the canvas panel arrives without an offset and is
/// discarded there.
fn handle_drag_and_drop(ctx: &egui::Context, canvas_rect: Rect, state: &mut AppState) {
    let Some(payload) = egui::DragAndDrop::payload::<DragPayload>(ctx) else {
        return;
    };
    if state.canvas.incoming().is_none() {
        state.canvas.on_drag_start(&payload);
    }
    if ctx.input(|i| i.pointer.any_released()) {
        egui::DragAndDrop::clear_payload(ctx);
        let offset = ctx
            .pointer_latest_pos()
            .filter(|pos| canvas_rect.contains(*pos))
            .map(to_point);
        state.canvas.on_drop(&payload, offset);
        state.end_drags();
    }
}

fn paint_item(painter: &egui::Painter, item: &RenderItem, palette: &Palette) {
    let rect = to_egui_rect(&item.rect);
    painter.rect_filled(rect, ITEM_CORNER_RADIUS, palette.item);

    let (outline, width) = if item.toolbar_visible {
        (palette.selection, 2.0)
    } else {
        (palette.outline, 1.0)
    };
    painter.rect_stroke(
        rect,
        ITEM_CORNER_RADIUS,
        Stroke::new(width, outline),
        egui::StrokeKind::Inside,
    );

    // Front edge marker: bottom at 0°, turning clockwise
    let (a, b) = match item.rotation {
        90 => (rect.left_top(), rect.left_bottom()),
        180 => (rect.left_top(), rect.right_top()),
        270 => (rect.right_top(), rect.right_bottom()),
        _ => (rect.left_bottom(), rect.right_bottom()),
    };
    painter.line_segment([a, b], Stroke::new(3.0, palette.outline));

    if rect.width() > 24.0 && rect.height() > 12.0 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &item.name,
            egui::FontId::proportional(11.0),
            palette.text,
        );
    }
}

fn item_toolbar(
    ctx: &egui::Context,
    frame: &RenderFrame,
    item: &RenderItem,
    commands: &mut Vec<CanvasCommand>,
) {
    let rect = to_egui_rect(&item.rect);
    let container = to_egui_rect(&frame.container);
    let anchor = egui::pos2(rect.left(), (rect.top() - TOOLBAR_GAP).max(container.top()));

    egui::Area::new(egui::Id::new("item_toolbar"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::LEFT_BOTTOM)
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    let id = &item.id;
                    if ui.small_button("⟲").on_hover_text(t("item.rotate_left")).clicked() {
                        commands.push(CanvasCommand::Rotate(id.clone(), RotateDirection::Left));
                    }
                    if ui.small_button("⟳").on_hover_text(t("item.rotate_right")).clicked() {
                        commands.push(CanvasCommand::Rotate(id.clone(), RotateDirection::Right));
                    }
                    if ui.small_button("+").on_hover_text(t("item.scale_up")).clicked() {
                        commands.push(CanvasCommand::Scale(id.clone(), ScaleDirection::Up));
                    }
                    if ui.small_button("−").on_hover_text(t("item.scale_down")).clicked() {
                        commands.push(CanvasCommand::Scale(id.clone(), ScaleDirection::Down));
                    }
                    ui.separator();
                    if ui.small_button("✕").on_hover_text(t("item.remove")).clicked() {
                        commands.push(CanvasCommand::Remove(id.clone()));
                    }
                });
            });
        });
}
