use eframe::egui;
use screen_ruler::ruler::geometry::MIN_EXTENT;
use screen_ruler::ruler::{
    DrawOp, FontMetrics, InteractionMode, KeyCode, KeyEvent, KeyModifiers, KeySteps, MenuAction,
    OpacityStep, Point, ResizeDirection, RulerWindow, Size, WindowGeometry,
};
use screen_ruler::viewport::ViewportSync;

use mock_ctx::MockCtx;

struct FixedMetrics;

impl FontMetrics for FixedMetrics {
    fn line_height(&self) -> f32 {
        14.0
    }

    fn text_width(&self, text: &str) -> f32 {
        text.len() as f32 * 7.0
    }
}

#[test]
fn drag_then_resize_from_default_window() {
    let mut window = RulerWindow::default();
    let start = window.geometry().position;
    assert_eq!(window.geometry().size, Size::new(512, 128));

    // Grab the middle of the ruler and drag 50 right, 20 down.
    let grab = start + Point::new(256, 64);
    assert_eq!(window.pointer_down(grab), InteractionMode::Dragging);
    for step in 1..=5 {
        window.pointer_move(grab + Point::new(step * 10, step * 4));
    }
    window.pointer_up();
    assert_eq!(window.geometry().position, start + Point::new(50, 20));
    assert_eq!(window.geometry().size, Size::new(512, 128));

    // Grab the bottom-right corner and pull it by (30, 10).
    let moved = window.geometry().position;
    let corner = moved + Point::new(511, 127);
    assert_eq!(
        window.pointer_down(corner),
        InteractionMode::Resizing(ResizeDirection::SE)
    );
    window.pointer_move(corner + Point::new(30, 10));
    window.pointer_up();

    assert_eq!(window.geometry().size, Size::new(542, 138));
    assert_eq!(window.geometry().position, moved);
    assert_eq!(window.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn release_outside_the_window_still_ends_the_gesture() {
    let mut window = RulerWindow::default();
    window.pointer_down(Point::new(300, 150));
    window.pointer_move(Point::new(5000, 5000));
    window.pointer_up();
    assert_eq!(window.interaction_mode(), InteractionMode::Idle);

    let position = window.geometry().position;
    window.pointer_move(Point::new(0, 0));
    assert_eq!(window.geometry().position, position);
}

#[test]
fn resized_window_redraws_with_new_length() {
    let mut window = RulerWindow::default();
    let edge = window.geometry().position + Point::new(511, 64);
    window.pointer_down(edge);
    window.pointer_move(edge + Point::new(88, 0));
    window.pointer_up();

    let ops = window.draw_ops(&FixedMetrics);
    assert!(ops.contains(&DrawOp::Text {
        pos: (10.0, 57.0),
        text: "600 pixels".into()
    }));
}

#[test]
fn vertical_ruler_reports_height_as_length() {
    let mut window = RulerWindow::default();
    window.apply_menu_action(MenuAction::ToggleOrientation);
    window.apply_menu_action(MenuAction::SetOpacity(OpacityStep::new(90).unwrap()));

    let ops = window.draw_ops(&FixedMetrics);
    assert!(ops.iter().any(|op| matches!(
        op,
        DrawOp::Text { text, .. } if text == "512 pixels"
    )));
    assert_eq!(window.display().opacity, 0.9);
}

#[test]
fn mouse_resize_stops_at_minimum_extent_and_reaches_the_host() {
    let ctx = MockCtx::default();
    let mut window = RulerWindow::default();
    let mut sync = ViewportSync::new(&window);
    let origin = window.geometry().position;

    // East edge dragged far past the left side.
    let edge = origin + Point::new(511, 64);
    assert_eq!(
        window.pointer_down(edge),
        InteractionMode::Resizing(ResizeDirection::E)
    );
    window.pointer_move(edge + Point::new(-1000, 0));
    window.pointer_up();
    assert_eq!(window.geometry().size, Size::new(MIN_EXTENT, 128));

    assert_eq!(sync.apply(&ctx, &window), 1);
    let commands = ctx.take();
    assert!(matches!(
        commands.as_slice(),
        [egui::ViewportCommand::InnerSize(v)] if v.x == MIN_EXTENT as f32 && v.y == 128.0
    ));

    // South-east corner of the shrunk window dragged up and left.
    let corner = origin + Point::new(MIN_EXTENT - 1, 127);
    assert_eq!(
        window.pointer_down(corner),
        InteractionMode::Resizing(ResizeDirection::SE)
    );
    window.pointer_move(corner + Point::new(-500, -500));
    window.pointer_up();
    assert_eq!(window.geometry().size, Size::new(MIN_EXTENT, MIN_EXTENT));
    assert_eq!(window.geometry().position, origin);

    assert_eq!(sync.apply(&ctx, &window), 1);
    let commands = ctx.take();
    assert!(matches!(
        commands.as_slice(),
        [egui::ViewportCommand::InnerSize(v)]
            if v.x == MIN_EXTENT as f32 && v.y == MIN_EXTENT as f32
    ));
}

#[test]
fn arrow_keys_move_by_coarse_and_fine_steps() {
    let ctrl = KeyModifiers {
        ctrl: true,
        shift: false,
    };
    let ctrl_shift = KeyModifiers {
        ctrl: true,
        shift: true,
    };

    let mut window = RulerWindow::default();
    assert!(window.key_down(KeyEvent::plain(KeyCode::Right)));
    assert_eq!(window.geometry().position, Point::new(105, 100));
    assert!(window.key_down(KeyEvent::plain(KeyCode::Up)));
    assert_eq!(window.geometry().position, Point::new(105, 95));

    assert!(window.key_down(KeyEvent {
        key: KeyCode::Down,
        modifiers: ctrl,
    }));
    assert_eq!(window.geometry().position, Point::new(105, 96));
    assert!(window.key_down(KeyEvent {
        key: KeyCode::Left,
        modifiers: ctrl,
    }));
    assert_eq!(window.geometry().position, Point::new(104, 96));

    assert!(window.key_down(KeyEvent {
        key: KeyCode::Left,
        modifiers: ctrl_shift,
    }));
    assert_eq!(window.geometry().size, Size::new(511, 128));
    assert_eq!(window.geometry().position, Point::new(104, 96));

    // Steps from settings replace the defaults.
    let steps = KeySteps { coarse: 20, fine: 3 };
    let mut window = RulerWindow::new(WindowGeometry::default(), steps);
    window.key_down(KeyEvent::plain(KeyCode::Down));
    window.key_down(KeyEvent {
        key: KeyCode::Right,
        modifiers: ctrl,
    });
    assert_eq!(window.geometry().position, Point::new(103, 120));
}

#[test]
fn extreme_steps_do_not_overflow() {
    let steps = KeySteps {
        coarse: i32::MAX,
        fine: i32::MAX,
    };
    let mut window = RulerWindow::new(WindowGeometry::default(), steps);
    for _ in 0..3 {
        window.key_down(KeyEvent::plain(KeyCode::Right));
    }
    assert_eq!(window.geometry().position.x, i32::MAX);

    let grow = KeyEvent {
        key: KeyCode::Down,
        modifiers: KeyModifiers {
            ctrl: true,
            shift: true,
        },
    };
    window.key_down(grow);
    window.key_down(grow);
    assert_eq!(window.geometry().size.height, i32::MAX);
}
