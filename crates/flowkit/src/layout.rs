//! Flow direction and padding for wrap sizers.

use crate::primitives::Size2;

/// Flow direction of a wrap sizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Children pack left to right, lines stack downwards
    Horizontal,
    /// Children pack top to bottom, lines stack rightwards
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl Orientation {
    /// Extent of `size` along the flow axis
    pub fn primary(&self, size: Size2) -> f32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` along the axis lines stack on
    pub fn cross(&self, size: Size2) -> f32 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Build an `(x, y)` pair from flow-axis and cross-axis coordinates
    pub fn to_xy(&self, primary: f32, cross: f32) -> (f32, f32) {
        match self {
            Orientation::Horizontal => (primary, cross),
            Orientation::Vertical => (cross, primary),
        }
    }
}

/// Padding around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use flowkit::Spacing;
    /// let spacing = Spacing::symmetric(10.0, 20.0);
    /// assert_eq!(spacing.left, 10.0);
    /// assert_eq!(spacing.right, 10.0);
    /// assert_eq!(spacing.top, 20.0);
    /// assert_eq!(spacing.bottom, 20.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create spacing from individual top, right, bottom, left values (CSS-style)
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }

    /// Padding before content on the flow axis
    pub fn leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Padding after content on the flow axis
    pub fn trailing(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.right,
            Orientation::Vertical => self.bottom,
        }
    }

    /// Padding before content on the cross axis
    pub fn cross_leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.top,
            Orientation::Vertical => self.left,
        }
    }

    /// Sum of both paddings on the flow axis
    pub fn primary_total(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.get_horizontal(),
            Orientation::Vertical => self.get_vertical(),
        }
    }

    /// Sum of both paddings on the cross axis
    pub fn cross_total(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.get_vertical(),
            Orientation::Vertical => self.get_horizontal(),
        }
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_selection_follows_orientation() {
        let padding = Spacing::trbl(1.0, 2.0, 3.0, 4.0);

        assert_eq!(padding.leading(Orientation::Horizontal), 4.0);
        assert_eq!(padding.trailing(Orientation::Horizontal), 2.0);
        assert_eq!(padding.cross_leading(Orientation::Horizontal), 1.0);
        assert_eq!(padding.cross_total(Orientation::Horizontal), 4.0);

        assert_eq!(padding.leading(Orientation::Vertical), 1.0);
        assert_eq!(padding.trailing(Orientation::Vertical), 3.0);
        assert_eq!(padding.cross_leading(Orientation::Vertical), 4.0);
        assert_eq!(padding.cross_total(Orientation::Vertical), 6.0);
    }

    #[test]
    fn test_to_xy_swaps_for_vertical() {
        assert_eq!(Orientation::Horizontal.to_xy(1.0, 2.0), (1.0, 2.0));
        assert_eq!(Orientation::Vertical.to_xy(1.0, 2.0), (2.0, 1.0));
    }
}
