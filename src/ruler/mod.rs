pub mod geometry;
pub mod interaction;
pub mod menu;
pub mod render;
pub mod window;

pub use geometry::{Orientation, Point, Size, WindowGeometry};
pub use hit_test::{CursorShape, ResizeDirection};
pub use interaction::{InteractionMode, KeyCode, KeyEvent, KeyModifiers, KeySteps};
pub use menu::{MenuAction, MenuEntry, OpacityStep};
pub use render::{DrawOp, FontMetrics};
pub use window::{DisplaySettings, RulerWindow};
