use crate::ruler::geometry::{Point, Rect, Size, WindowGeometry};
use crate::ruler::hit_test::{hit_test, ResizeDirection, RESIZE_BORDER_WIDTH};

pub const DEFAULT_COARSE_STEP: i32 = 5;
pub const DEFAULT_FINE_STEP: i32 = 1;
/// Largest step accepted from settings.
pub const MAX_STEP: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeDirection),
}

impl InteractionMode {
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Mouse driven move/resize state. All points handed in are in screen
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    drag_offset: Point,
    anchor_rect: Rect,
    anchor_mouse: Point,
}

impl InteractionState {
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Left button pressed. Enters `Resizing` when the press lands in the
    /// resize band, `Dragging` otherwise.
    pub fn left_down(&mut self, screen: Point, geometry: &WindowGeometry) -> InteractionMode {
        let local = screen - geometry.position;
        let direction = hit_test(local, geometry.size, RESIZE_BORDER_WIDTH);

        self.mode = if direction == ResizeDirection::None {
            self.drag_offset = screen - geometry.position;
            InteractionMode::Dragging
        } else {
            self.anchor_rect = geometry.rect();
            self.anchor_mouse = screen;
            InteractionMode::Resizing(direction)
        };
        tracing::debug!(mode = ?self.mode, ?screen, "pointer pressed");
        self.mode
    }

    /// Pointer moved while the button is held. Returns true when the
    /// geometry changed.
    pub fn pointer_move(&mut self, screen: Point, geometry: &mut WindowGeometry) -> bool {
        match self.mode {
            InteractionMode::Idle => false,
            InteractionMode::Dragging => {
                let target = screen - self.drag_offset;
                if target == geometry.position {
                    return false;
                }
                geometry.move_to(target);
                true
            }
            InteractionMode::Resizing(direction) => {
                let delta = screen - self.anchor_mouse;
                let mut size = geometry.size;
                if direction.resizes_width() {
                    size.width = self.anchor_rect.width.saturating_add(delta.x);
                }
                if direction.resizes_height() {
                    size.height = self.anchor_rect.height.saturating_add(delta.y);
                }
                let before = geometry.size;
                geometry.resize_to(size);
                geometry.size != before
            }
        }
    }

    /// Size the ruler had when the current resize started.
    pub fn anchor_size(&self) -> Option<Size> {
        match self.mode {
            InteractionMode::Resizing(_) => Some(self.anchor_rect.size()),
            _ => None,
        }
    }

    /// Button released: back to idle from any mode.
    pub fn left_up(&mut self) {
        if self.mode.is_active() {
            tracing::debug!(mode = ?self.mode, "pointer released");
        }
        self.mode = InteractionMode::Idle;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Left,
    Right,
    Up,
    Down,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Move { dx: i32, dy: i32 },
    Resize { dw: i32, dh: i32 },
    ToggleOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySteps {
    pub coarse: i32,
    pub fine: i32,
}

impl Default for KeySteps {
    fn default() -> Self {
        Self {
            coarse: DEFAULT_COARSE_STEP,
            fine: DEFAULT_FINE_STEP,
        }
    }
}

impl KeySteps {
    /// Steps outside `1..=MAX_STEP` fall back to their defaults.
    pub fn sanitized(self) -> Self {
        let valid = |step: i32| (1..=MAX_STEP).contains(&step);
        Self {
            coarse: if valid(self.coarse) {
                self.coarse
            } else {
                DEFAULT_COARSE_STEP
            },
            fine: if valid(self.fine) {
                self.fine
            } else {
                DEFAULT_FINE_STEP
            },
        }
    }
}

/// Arrow keys move by the coarse step, Ctrl+arrow by the fine step and
/// Ctrl+Shift+arrow resizes by the fine step. Space flips the orientation.
pub fn map_key_event(event: KeyEvent, steps: KeySteps) -> Option<KeyCommand> {
    let (ux, uy): (i32, i32) = match event.key {
        KeyCode::Space => return Some(KeyCommand::ToggleOrientation),
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        KeyCode::Other => return None,
    };

    match event.modifiers {
        KeyModifiers {
            ctrl: true,
            shift: true,
        } => Some(KeyCommand::Resize {
            dw: ux.saturating_mul(steps.fine),
            dh: uy.saturating_mul(steps.fine),
        }),
        KeyModifiers { ctrl: true, .. } => Some(KeyCommand::Move {
            dx: ux.saturating_mul(steps.fine),
            dy: uy.saturating_mul(steps.fine),
        }),
        _ => Some(KeyCommand::Move {
            dx: ux.saturating_mul(steps.coarse),
            dy: uy.saturating_mul(steps.coarse),
        }),
    }
}
