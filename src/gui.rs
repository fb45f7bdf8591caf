use crate::ruler::{
    CursorShape, DrawOp, FontMetrics, KeyCode, KeyEvent, KeyModifiers, MenuAction, MenuEntry,
    Point, RulerWindow,
};
use crate::viewport::ViewportSync;
use eframe::egui;

const FONT_SIZE: f32 = 12.0;
const RULER_FILL: egui::Color32 = egui::Color32::from_rgb(255, 255, 225);
const RULER_INK: egui::Color32 = egui::Color32::BLACK;
/// The menu gets its own native window: the ruler itself is usually far
/// too short to hold it.
pub const MENU_POPUP_SIZE: egui::Vec2 = egui::vec2(220.0, 300.0);

/// Text measurement backed by egui's font atlas.
struct EguiFontMetrics<'a> {
    ctx: &'a egui::Context,
    font: egui::FontId,
}

impl FontMetrics for EguiFontMetrics<'_> {
    fn line_height(&self) -> f32 {
        self.ctx.fonts(|f| f.row_height(&self.font))
    }

    fn text_width(&self, text: &str) -> f32 {
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), self.font.clone(), RULER_INK)
                .size()
                .x
        })
    }
}

/// An open context menu, anchored at the screen position of the click.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MenuPopup {
    anchor: egui::Pos2,
    had_focus: bool,
}

pub struct RulerApp {
    window: RulerWindow,
    sync: ViewportSync,
    menu: Option<MenuPopup>,
}

impl RulerApp {
    pub fn new(window: RulerWindow) -> Self {
        let sync = ViewportSync::new(&window);
        Self {
            window,
            sync,
            menu: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let events: Vec<KeyEvent> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some(KeyEvent {
                        key: key_code(*key),
                        modifiers: KeyModifiers {
                            ctrl: modifiers.ctrl || modifiers.command,
                            shift: modifiers.shift,
                        },
                    }),
                    _ => None,
                })
                .collect()
        });

        for event in events {
            self.window.key_down(event);
        }
    }

    /// Feed the primary button into the move/resize state machine.
    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let (pressed, released, down, pointer, origin) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
                i.viewport().outer_rect.map(|r| r.min),
            )
        });

        let Some(pointer) = pointer else {
            if released {
                self.window.pointer_up();
            }
            return;
        };

        // The native window may lag behind the last requested position, so
        // screen coordinates come from where the host says the window is.
        let origin = origin
            .map(|o| Point::new(o.x.round() as i32, o.y.round() as i32))
            .unwrap_or(self.window.geometry().position);
        let local = Point::new(pointer.x.floor() as i32, pointer.y.floor() as i32);
        let screen = origin + local;

        if response.secondary_clicked() {
            self.menu = Some(MenuPopup {
                anchor: egui::pos2(screen.x as f32, screen.y as f32),
                had_focus: false,
            });
        }

        if pressed && response.hovered() {
            self.menu = None;
            self.window.pointer_down(screen);
        } else if down {
            self.window.pointer_move(screen);
        }
        if released {
            self.window.pointer_up();
        }

        if response.hovered() || self.window.interaction_mode().is_active() {
            ctx.set_cursor_icon(cursor_icon(self.window.cursor_at(local)));
        }
    }

    fn paint(&self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        let opacity = self.window.display().opacity;
        let ink = RULER_INK.gamma_multiply(opacity);
        let stroke = egui::Stroke::new(1.0, ink);
        let font = egui::FontId::proportional(FONT_SIZE);

        painter.rect_filled(rect, 0.0, RULER_FILL.gamma_multiply(opacity));

        let metrics = EguiFontMetrics {
            ctx,
            font: font.clone(),
        };
        // Half pixel offset keeps one pixel strokes on the pixel grid.
        let at = |(x, y): (f32, f32)| rect.min + egui::vec2(x + 0.5, y + 0.5);
        for op in self.window.draw_ops(&metrics) {
            match op {
                DrawOp::Rect { min, max } => {
                    painter.rect_stroke(egui::Rect::from_min_max(at(min), at(max)), 0.0, stroke);
                }
                DrawOp::Line { from, to } => {
                    painter.line_segment([at(from), at(to)], stroke);
                }
                DrawOp::Text { pos, text } => {
                    painter.text(
                        rect.min + egui::vec2(pos.0, pos.1),
                        egui::Align2::LEFT_TOP,
                        text,
                        font.clone(),
                        ink,
                    );
                }
            }
        }
    }

    /// Show the context menu in a borderless popup viewport. It closes when
    /// an entry is picked, on Escape, or when it loses focus.
    fn show_menu(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        let popup = self.menu?;
        let entries = self.window.menu();
        let mut chosen = None;
        let mut focused = None;
        let mut dismissed = false;

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("ruler_menu"),
            egui::ViewportBuilder::default()
                .with_title("Screen Ruler menu")
                .with_position(popup.anchor)
                .with_inner_size(MENU_POPUP_SIZE)
                .with_decorations(false)
                .with_resizable(false)
                .with_window_level(egui::WindowLevel::AlwaysOnTop),
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    chosen = show_menu_entries(ui, &entries)
                        .into_iter()
                        .find(|(_, response)| response.clicked())
                        .map(|(action, _)| action);
                });
                let (escape, close, has_focus) = ctx.input(|i| {
                    (
                        i.key_pressed(egui::Key::Escape),
                        i.viewport().close_requested(),
                        i.viewport().focused,
                    )
                });
                dismissed = escape || close;
                focused = has_focus;
            },
        );

        match focused {
            Some(true) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.had_focus = true;
                }
            }
            Some(false) if popup.had_focus => dismissed = true,
            _ => {}
        }
        if chosen.is_some() || dismissed {
            self.menu = None;
        }
        chosen
    }

    fn show_about(&mut self, ctx: &egui::Context) {
        if !self.window.about_open() {
            return;
        }
        let mut close = false;
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("about"),
            egui::ViewportBuilder::default()
                .with_title("About Screen Ruler")
                .with_inner_size([320.0, 160.0])
                .with_resizable(false),
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(format!("Screen Ruler {}", env!("CARGO_PKG_VERSION")));
                    ui.label("Drag to move, drag the edges to resize.");
                    ui.label("Arrows move, Ctrl+arrows nudge, Ctrl+Shift+arrows resize.");
                    ui.label("Space switches between horizontal and vertical.");
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
                if ctx.input(|i| i.viewport().close_requested()) {
                    close = true;
                }
            },
        );
        if close {
            self.window.close_about();
        }
    }
}

impl eframe::App for RulerApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.interact(rect, ui.id().with("ruler"), egui::Sense::click_and_drag());
                self.handle_pointer(ctx, &response);
                self.paint(ctx, ui.painter(), rect);

                if let Some(text) = self.window.tooltip_text() {
                    response.on_hover_text(text.to_owned());
                }
            });

        if let Some(action) = self.show_menu(ctx) {
            self.window.apply_menu_action(action);
        }

        self.show_about(ctx);
        self.sync.apply(ctx, &self.window);
    }
}

/// Lay the menu out flat: the opacity presets wrap under their heading
/// instead of opening a nested popup. Returns every actionable entry with
/// its response.
fn show_menu_entries(
    ui: &mut egui::Ui,
    entries: &[MenuEntry],
) -> Vec<(MenuAction, egui::Response)> {
    let mut shown = Vec::new();
    for entry in entries {
        match entry {
            MenuEntry::Toggle {
                label,
                checked,
                action,
            } => {
                shown.push((*action, ui.selectable_label(*checked, label.as_str())));
            }
            MenuEntry::Submenu { label, entries } => {
                ui.label(label.as_str());
                ui.horizontal_wrapped(|ui| {
                    shown.extend(show_menu_entries(ui, entries));
                });
            }
            MenuEntry::Item { label, action } => {
                shown.push((*action, ui.button(label.as_str())));
            }
            MenuEntry::Separator => {
                ui.separator();
            }
        }
    }
    shown
}

fn key_code(key: egui::Key) -> KeyCode {
    match key {
        egui::Key::ArrowLeft => KeyCode::Left,
        egui::Key::ArrowRight => KeyCode::Right,
        egui::Key::ArrowUp => KeyCode::Up,
        egui::Key::ArrowDown => KeyCode::Down,
        egui::Key::Space => KeyCode::Space,
        _ => KeyCode::Other,
    }
}

fn cursor_icon(shape: CursorShape) -> egui::CursorIcon {
    match shape {
        CursorShape::Default => egui::CursorIcon::Default,
        CursorShape::ResizeHorizontal => egui::CursorIcon::ResizeHorizontal,
        CursorShape::ResizeVertical => egui::CursorIcon::ResizeVertical,
        CursorShape::ResizeNwSe => egui::CursorIcon::ResizeNwSe,
        CursorShape::ResizeNeSw => egui::CursorIcon::ResizeNeSw,
    }
}
