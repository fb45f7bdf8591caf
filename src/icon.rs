use eframe::egui;
use std::path::Path;

/// Decode a PNG (or ICO) file into window icon data.
pub fn decode_icon(bytes: &[u8]) -> anyhow::Result<egui::IconData> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Load the window icon. Any failure falls back to the platform default
/// icon, so this never fails.
pub fn load_icon(path: Option<&Path>) -> Option<egui::IconData> {
    let path = path?;
    let result = std::fs::read(path)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| decode_icon(&bytes));
    match result {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "using default window icon");
            None
        }
    }
}
