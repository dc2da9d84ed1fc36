//! Anchor-based placement of an element inside a zone.

use crate::primitives::{Point, Size2};

/// Horizontal anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// One of the nine anchor points of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    TopLeft,
    TopCenter,
    TopRight,
    LeftCenter,
    #[default]
    Center,
    RightCenter,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Align {
    pub const ALL: [Align; 9] = [
        Align::TopLeft,
        Align::TopCenter,
        Align::TopRight,
        Align::LeftCenter,
        Align::Center,
        Align::RightCenter,
        Align::BottomLeft,
        Align::BottomCenter,
        Align::BottomRight,
    ];

    /// Split into its horizontal and vertical components
    pub const fn split(self) -> (HorizontalAlign, VerticalAlign) {
        match self {
            Align::TopLeft => (HorizontalAlign::Left, VerticalAlign::Top),
            Align::TopCenter => (HorizontalAlign::Center, VerticalAlign::Top),
            Align::TopRight => (HorizontalAlign::Right, VerticalAlign::Top),
            Align::LeftCenter => (HorizontalAlign::Left, VerticalAlign::Center),
            Align::Center => (HorizontalAlign::Center, VerticalAlign::Center),
            Align::RightCenter => (HorizontalAlign::Right, VerticalAlign::Center),
            Align::BottomLeft => (HorizontalAlign::Left, VerticalAlign::Bottom),
            Align::BottomCenter => (HorizontalAlign::Center, VerticalAlign::Bottom),
            Align::BottomRight => (HorizontalAlign::Right, VerticalAlign::Bottom),
        }
    }

    /// Fraction of the free space left of and above the element, per axis
    pub fn factors(self) -> (f32, f32) {
        let (h, v) = self.split();
        let x = match h {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => 0.5,
            HorizontalAlign::Right => 1.0,
        };
        let y = match v {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Center => 0.5,
            VerticalAlign::Bottom => 1.0,
        };
        (x, y)
    }
}

/// Target bounds for a single placement.
///
/// Built per child and dropped right after; the wrap sizer always sizes it to
/// exactly match the child, so the anchor only matters for larger zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignZone {
    pub origin: Point,
    pub size: Size2,
}

impl AlignZone {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size2::new(width, height),
        }
    }
}

/// Top-left position that puts the `align` anchor of an element of `size`
/// onto the same anchor of `zone`.
///
/// Works on the free space, so an element that exactly fits the zone lands
/// on the zone's origin for every anchor.
pub fn align_in(size: Size2, zone: &AlignZone, align: Align) -> Point {
    let (fx, fy) = align.factors();
    Point::new(
        zone.origin.x + (zone.size.width - size.width) * fx,
        zone.origin.y + (zone.size.height - size.height) * fy,
    )
}
