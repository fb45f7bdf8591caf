use screen_ruler::gui::RulerApp;
use screen_ruler::icon::load_icon;
use screen_ruler::logging;
use screen_ruler::ruler::geometry::{WindowGeometry, MIN_EXTENT};
use screen_ruler::ruler::RulerWindow;
use screen_ruler::settings::RulerSettings;
use screen_ruler::viewport::window_level;

use eframe::egui;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let settings = RulerSettings::load(&RulerSettings::default_path())?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(Into::into),
    );

    let window = RulerWindow::new(WindowGeometry::default(), settings.key_steps());
    let geometry = *window.geometry();
    tracing::info!(?geometry, "starting ruler");

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Screen Ruler")
        .with_position([geometry.position.x as f32, geometry.position.y as f32])
        .with_inner_size([geometry.size.width as f32, geometry.size.height as f32])
        .with_min_inner_size([MIN_EXTENT as f32, MIN_EXTENT as f32])
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_maximize_button(false)
        .with_window_level(window_level(window.display().stay_on_top));
    if let Some(icon) = load_icon(settings.icon_path.as_deref().map(Path::new)) {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Screen Ruler",
        native_options,
        Box::new(move |_cc| Box::new(RulerApp::new(window))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run ruler window: {e}"))
}
