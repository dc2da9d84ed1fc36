//! Geometry value types shared by the layout modules.

/// A 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size2 {
    pub width: f32,
    pub height: f32,
}

impl Size2 {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn size(&self) -> Size2 {
        Size2::new(self.width(), self.height())
    }

    pub fn left(&self) -> f32 {
        self.min[0]
    }

    pub fn top(&self) -> f32 {
        self.min[1]
    }

    /// Move the rect so its min corner sits at `point`, keeping its size
    pub fn with_min(self, point: Point) -> Self {
        Self::from_min_size([point.x, point.y], [self.width(), self.height()])
    }

    /// Keep the min corner and replace the size
    pub fn with_size(self, width: f32, height: f32) -> Self {
        Self::from_min_size(self.min, [width, height])
    }

    /// Shift both corners by the given delta
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.min[0] += dx;
        self.max[0] += dx;
        self.min[1] += dy;
        self.max[1] += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_min_keeps_size() {
        let rect = Rect::from_min_size([10.0, 20.0], [30.0, 40.0]);
        let moved = rect.with_min(Point::new(-5.0, 0.0));

        assert_eq!(moved.min, [-5.0, 0.0]);
        assert_eq!(moved.size(), Size2::new(30.0, 40.0));
    }

    #[test]
    fn test_translate() {
        let mut rect = Rect::from_min_size([0.0, 0.0], [10.0, 10.0]);
        rect.translate(3.0, -2.0);

        assert_eq!(rect.min, [3.0, -2.0]);
        assert_eq!(rect.max, [13.0, 8.0]);
        assert_eq!(rect.size(), Size2::new(10.0, 10.0));
    }
}
