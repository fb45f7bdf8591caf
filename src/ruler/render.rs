//! Ruler scale as a list of backend independent draw operations.
//!
//! Everything is laid out in a "frame" where `along` runs the length of the
//! ruler and `across` runs over its thickness. [`AxisMap`] turns frame
//! coordinates into window coordinates, swapping the axes for a vertical
//! ruler so no rendering backend needs an affine transform. Labels stay
//! upright in both orientations.

use crate::ruler::geometry::{Orientation, Size};

pub const LABEL_INSET: f32 = 10.0;
pub const TICK_SPACING: usize = 2;
pub const MAJOR_TICK: i32 = 15;
pub const MEDIUM_TICK: i32 = 10;
pub const MINOR_TICK: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// One pixel outline through both corners, inclusive.
    Rect { min: (f32, f32), max: (f32, f32) },
    Line { from: (f32, f32), to: (f32, f32) },
    /// `pos` is the top-left corner of the text box.
    Text { pos: (f32, f32), text: String },
}

/// Text measurement supplied by the rendering backend.
pub trait FontMetrics {
    fn line_height(&self) -> f32;
    fn text_width(&self, text: &str) -> f32;
}

/// Height of the tick drawn at `position` along the ruler.
pub fn tick_height(position: i32) -> i32 {
    if position % 100 == 0 {
        MAJOR_TICK
    } else if position % 10 == 0 {
        MEDIUM_TICK
    } else {
        MINOR_TICK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    orientation: Orientation,
}

impl AxisMap {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn map(&self, along: f32, across: f32) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (along, across),
            Orientation::Vertical => (across, along),
        }
    }

    /// `(length, thickness)` of a window of the given size.
    pub fn frame_extent(&self, size: Size) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (size.width, size.height),
            Orientation::Vertical => (size.height, size.width),
        }
    }

    /// Room a label takes up across the ruler.
    pub fn text_thickness(&self, metrics: &dyn FontMetrics, text: &str) -> f32 {
        match self.orientation {
            Orientation::Horizontal => metrics.line_height(),
            Orientation::Vertical => metrics.text_width(text),
        }
    }

    fn text(&self, along: f32, across: f32, text: String) -> DrawOp {
        DrawOp::Text {
            pos: self.map(along, across),
            text,
        }
    }

    fn line(&self, along: f32, from_across: f32, to_across: f32) -> DrawOp {
        DrawOp::Line {
            from: self.map(along, from_across),
            to: self.map(along, to_across),
        }
    }
}

/// Produce the complete scale for a window of `size`. Pure: the same
/// inputs always give the same operations in the same order.
pub fn render_ruler(
    size: Size,
    orientation: Orientation,
    metrics: &dyn FontMetrics,
) -> Vec<DrawOp> {
    let axis = AxisMap::new(orientation);
    let (length, thickness) = axis.frame_extent(size);
    let thickness_f = thickness as f32;

    let mut ops = Vec::with_capacity(length.max(0) as usize + 4);
    ops.push(DrawOp::Rect {
        min: axis.map(0.0, 0.0),
        max: axis.map((length - 1) as f32, (thickness - 1) as f32),
    });

    let label = format!("{length} pixels");
    let label_across = thickness_f / 2.0 - axis.text_thickness(metrics, &label) / 2.0;
    ops.push(axis.text(LABEL_INSET, label_across, label));

    for position in (0..length.max(0)).step_by(TICK_SPACING) {
        let tick_px = tick_height(position);
        let tick = tick_px as f32;
        let along = position as f32;
        ops.push(axis.line(along, 0.0, tick));
        ops.push(axis.line(along, thickness_f, thickness_f - tick));

        if tick_px == MAJOR_TICK {
            let text = position.to_string();
            let bottom = thickness_f - tick - axis.text_thickness(metrics, &text);
            ops.push(axis.text(along, tick, text.clone()));
            ops.push(axis.text(along, bottom, text));
        }
    }

    ops
}
