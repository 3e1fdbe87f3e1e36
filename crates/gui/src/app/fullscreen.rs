//! Fullscreen through the eframe viewport

use eframe::egui;

use crate::viewport::FullscreenHost;
use room_editor_lib::EditorResult;

/// Fullscreen host backed by the native window. Viewport commands apply
/// after the current frame, so `is_fullscreen` lags one frame behind a toggle.
pub struct EguiFullscreen<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiFullscreen<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl FullscreenHost for EguiFullscreen<'_> {
    fn is_fullscreen(&self) -> bool {
        self.ctx
            .input(|i| i.viewport().fullscreen)
            .unwrap_or(false)
    }

    fn request_fullscreen(&mut self) -> EditorResult<()> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> EditorResult<()> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }
}
