use crate::ruler::{Point, RulerWindow, Size};
use eframe::egui;

/// The part of `egui::Context` the ruler needs to drive its native window.
/// Tests substitute a recorder.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

pub fn window_level(stay_on_top: bool) -> egui::WindowLevel {
    if stay_on_top {
        egui::WindowLevel::AlwaysOnTop
    } else {
        egui::WindowLevel::Normal
    }
}

/// Remembers what the native window was last told so that only changes are
/// forwarded as viewport commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportSync {
    position: Point,
    size: Size,
    stay_on_top: bool,
    closing: bool,
}

impl ViewportSync {
    /// Seed with the state the viewport was built with.
    pub fn new(window: &RulerWindow) -> Self {
        Self {
            position: window.geometry().position,
            size: window.geometry().size,
            stay_on_top: window.display().stay_on_top,
            closing: false,
        }
    }

    /// Push every difference between `window` and the last synced state.
    /// Returns the number of commands sent.
    pub fn apply(&mut self, ctx: &impl ViewportCtx, window: &RulerWindow) -> usize {
        let mut sent = 0;
        let geometry = window.geometry();

        if geometry.position != self.position {
            self.position = geometry.position;
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                geometry.position.x as f32,
                geometry.position.y as f32,
            )));
            sent += 1;
        }

        if geometry.size != self.size {
            self.size = geometry.size;
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                geometry.size.width as f32,
                geometry.size.height as f32,
            )));
            sent += 1;
        }

        let stay_on_top = window.display().stay_on_top;
        if stay_on_top != self.stay_on_top {
            self.stay_on_top = stay_on_top;
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(window_level(stay_on_top)));
            sent += 1;
        }

        if window.close_requested() && !self.closing {
            self.closing = true;
            tracing::info!("closing ruler window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            sent += 1;
        }

        if sent > 0 {
            ctx.request_repaint();
        }
        sent
    }
}
