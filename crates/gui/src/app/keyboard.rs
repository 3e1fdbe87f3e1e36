//! Keyboard shortcut handling

use eframe::egui;
use shared::{RotateDirection, ScaleDirection};

use super::fullscreen::EguiFullscreen;
use crate::canvas::CanvasCommand;
use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let selected = state.canvas.selection().cloned();
    let mut commands = Vec::new();
    let mut toggle_fullscreen = false;

    ctx.input(|i| {
        let plus = i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals);
        let minus = i.key_pressed(egui::Key::Minus);

        // Ctrl+= / Ctrl+-: zoom
        if i.modifiers.command {
            if plus {
                commands.push(CanvasCommand::ZoomIn);
            }
            if minus {
                commands.push(CanvasCommand::ZoomOut);
            }
        }
        // Escape: deselect
        if i.key_pressed(egui::Key::Escape) {
            commands.push(CanvasCommand::ClickEmpty);
        }
        // L: day/night
        if i.key_pressed(egui::Key::L) && !i.modifiers.command {
            commands.push(CanvasCommand::ToggleLight);
        }
        // F11: fullscreen
        if i.key_pressed(egui::Key::F11) {
            toggle_fullscreen = true;
        }

        let Some(id) = selected.clone() else { return };
        // Delete: remove selected item
        if i.key_pressed(egui::Key::Delete) {
            commands.push(CanvasCommand::Remove(id.clone()));
        }
        // R / Shift+R: rotate right / left
        if i.key_pressed(egui::Key::R) && !i.modifiers.command {
            let direction = if i.modifiers.shift {
                RotateDirection::Left
            } else {
                RotateDirection::Right
            };
            commands.push(CanvasCommand::Rotate(id.clone(), direction));
        }
        // + / -: scale selected item
        if !i.modifiers.command {
            if plus {
                commands.push(CanvasCommand::Scale(id.clone(), ScaleDirection::Up));
            }
            if minus {
                commands.push(CanvasCommand::Scale(id, ScaleDirection::Down));
            }
        }
    });

    for command in commands {
        state.canvas.apply(command);
    }
    if toggle_fullscreen {
        state.canvas.toggle_fullscreen(&mut EguiFullscreen::new(ctx));
    }
}
