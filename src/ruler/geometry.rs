use crate::ruler::hit_test::RESIZE_BORDER_WIDTH;

/// Smallest width or height the ruler may shrink to. Below this the midpoint
/// of an edge would fall inside a corner of the resize band.
pub const MIN_EXTENT: i32 = 2 * RESIZE_BORDER_WIDTH + 2;

pub const DEFAULT_SIZE: Size = Size::new(512, 128);
pub const DEFAULT_POSITION: Point = Point::new(100, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Raise both dimensions to at least [`MIN_EXTENT`].
    pub fn clamped(self) -> Self {
        Self::new(self.width.max(MIN_EXTENT), self.height.max(MIN_EXTENT))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn shrink(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
    pub orientation: Orientation,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_SIZE)
    }
}

impl WindowGeometry {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size: size.clamped(),
            orientation: Orientation::Horizontal,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Swaps width and height and flips the orientation flag. Applying it
    /// twice restores the original state.
    pub fn toggle_orientation(&mut self) {
        self.size = self.size.transposed();
        self.orientation = self.orientation.toggled();
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    pub fn resize_to(&mut self, size: Size) {
        self.size = size.clamped();
    }

    pub fn resize_by(&mut self, dw: i32, dh: i32) {
        self.resize_to(Size::new(
            self.size.width.saturating_add(dw),
            self.size.height.saturating_add(dh),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_orientation_twice_restores_geometry() {
        let mut geometry = WindowGeometry::default();
        let before = geometry;

        geometry.toggle_orientation();
        assert_eq!(geometry.size, Size::new(128, 512));
        assert_eq!(geometry.orientation, Orientation::Vertical);

        geometry.toggle_orientation();
        assert_eq!(geometry, before);
    }

    #[test]
    fn resize_never_drops_below_minimum_extent() {
        let mut geometry = WindowGeometry::default();
        geometry.resize_by(-1000, -1000);
        assert_eq!(geometry.size, Size::new(MIN_EXTENT, MIN_EXTENT));
    }

    #[test]
    fn extreme_offsets_saturate_instead_of_overflowing() {
        let mut geometry = WindowGeometry::default();
        geometry.move_by(i32::MAX, i32::MIN);
        assert_eq!(geometry.position, Point::new(i32::MAX, i32::MIN));

        geometry.resize_by(i32::MAX, i32::MIN);
        assert_eq!(geometry.size, Size::new(i32::MAX, MIN_EXTENT));

        let far = Point::new(i32::MIN, 0) - Point::new(1, 0);
        assert_eq!(far, Point::new(i32::MIN, 0));
    }

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(5, 5, 10, 10);
        assert!(rect.contains(Point::new(5, 5)));
        assert!(rect.contains(Point::new(14, 14)));
        assert!(!rect.contains(Point::new(15, 10)));
        assert!(!rect.contains(Point::new(10, 15)));
    }

    #[test]
    fn shrink_insets_every_side() {
        let rect = Rect::new(0, 0, 512, 128).shrink(5);
        assert_eq!(rect, Rect::new(5, 5, 502, 118));
    }
}
