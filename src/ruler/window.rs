use crate::ruler::geometry::{Point, WindowGeometry};
use crate::ruler::hit_test::{hit_test, CursorShape, RESIZE_BORDER_WIDTH};
use crate::ruler::interaction::{
    map_key_event, InteractionMode, InteractionState, KeyCommand, KeyEvent, KeySteps,
};
use crate::ruler::menu::{menu_entries, MenuAction, MenuEntry};
use crate::ruler::render::{render_ruler, DrawOp, FontMetrics};

pub const DEFAULT_OPACITY: f32 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub opacity: f32,
    pub stay_on_top: bool,
    pub tooltip_enabled: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            stay_on_top: false,
            tooltip_enabled: false,
        }
    }
}

/// The ruler overlay: geometry, pointer interaction and display settings,
/// all mutated from the UI thread only.
#[derive(Debug, Clone)]
pub struct RulerWindow {
    geometry: WindowGeometry,
    interaction: InteractionState,
    display: DisplaySettings,
    steps: KeySteps,
    tooltip: Option<String>,
    about_open: bool,
    close_requested: bool,
}

impl Default for RulerWindow {
    fn default() -> Self {
        Self::new(WindowGeometry::default(), KeySteps::default())
    }
}

impl RulerWindow {
    pub fn new(geometry: WindowGeometry, steps: KeySteps) -> Self {
        Self {
            geometry,
            interaction: InteractionState::default(),
            display: DisplaySettings::default(),
            steps,
            tooltip: None,
            about_open: false,
            close_requested: false,
        }
    }

    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn about_open(&self) -> bool {
        self.about_open
    }

    pub fn close_about(&mut self) {
        self.about_open = false;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn pointer_down(&mut self, screen: Point) -> InteractionMode {
        self.interaction.left_down(screen, &self.geometry)
    }

    pub fn pointer_move(&mut self, screen: Point) -> bool {
        let changed = self.interaction.pointer_move(screen, &mut self.geometry);
        if changed {
            self.refresh_tooltip();
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        self.interaction.left_up();
    }

    /// Cursor for a window-local hover position. A running resize keeps its
    /// glyph even when the pointer slips off the edge.
    pub fn cursor_at(&self, local: Point) -> CursorShape {
        match self.interaction.mode() {
            InteractionMode::Resizing(direction) => direction.cursor(),
            InteractionMode::Dragging => CursorShape::Default,
            InteractionMode::Idle => {
                hit_test(local, self.geometry.size, RESIZE_BORDER_WIDTH).cursor()
            }
        }
    }

    pub fn key_down(&mut self, event: KeyEvent) -> bool {
        let Some(command) = map_key_event(event, self.steps) else {
            return false;
        };
        tracing::debug!(?command, "key command");
        match command {
            KeyCommand::Move { dx, dy } => self.geometry.move_by(dx, dy),
            KeyCommand::Resize { dw, dh } => self.geometry.resize_by(dw, dh),
            KeyCommand::ToggleOrientation => self.geometry.toggle_orientation(),
        }
        self.refresh_tooltip();
        true
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        menu_entries(&self.display, self.geometry.orientation)
    }

    pub fn apply_menu_action(&mut self, action: MenuAction) {
        tracing::debug!(?action, "menu action");
        match action {
            MenuAction::ToggleStayOnTop => {
                self.display.stay_on_top = !self.display.stay_on_top;
            }
            MenuAction::ToggleOrientation => {
                self.geometry.toggle_orientation();
                self.refresh_tooltip();
            }
            MenuAction::ToggleTooltip => {
                self.display.tooltip_enabled = !self.display.tooltip_enabled;
                self.refresh_tooltip();
            }
            MenuAction::SetOpacity(step) => {
                self.display.opacity = step.opacity();
            }
            MenuAction::About => self.about_open = true,
            MenuAction::Exit => self.close_requested = true,
        }
    }

    pub fn draw_ops(&self, metrics: &dyn FontMetrics) -> Vec<DrawOp> {
        render_ruler(self.geometry.size, self.geometry.orientation, metrics)
    }

    fn refresh_tooltip(&mut self) {
        self.tooltip = self.display.tooltip_enabled.then(|| {
            format!(
                "Width: {} pixels\nHeight: {} pixels",
                self.geometry.size.width, self.geometry.size.height
            )
        });
    }
}
