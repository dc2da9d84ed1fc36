//! Partitioning of sizer children into wrapped lines.
//!
//! The wrap sizer hands its visible children to a [`WrapProvider`] together with
//! the capacity available along the flow axis. The provider returns the lines
//! and their stacked extent; the sizer then validates and positions them.

use crate::error::LayoutError;
use crate::layout::{Orientation, Spacing};
use crate::primitives::Size2;

/// A child as seen by the wrap provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapItem {
    /// Index of the child in its sizer
    pub index: usize,
    pub size: Size2,
    pub padding: Spacing,
}

impl WrapItem {
    /// Space taken along the flow axis, padding included
    pub fn primary_footprint(&self, orientation: Orientation) -> f32 {
        orientation.primary(self.size) + self.padding.primary_total(orientation)
    }

    /// Space taken along the cross axis, padding included
    pub fn cross_footprint(&self, orientation: Orientation) -> f32 {
        orientation.cross(self.size) + self.padding.cross_total(orientation)
    }
}

/// Input to a wrap pass
#[derive(Debug, Clone, Copy)]
pub struct WrapRequest<'a> {
    pub items: &'a [WrapItem],
    pub orientation: Orientation,
    /// Extent available along the flow axis
    pub capacity: f32,
    pub item_spacing: f32,
    pub line_spacing: f32,
}

/// One wrapped line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapLine {
    /// Child indices in placement order
    pub children: Vec<usize>,
    /// Used extent along the flow axis
    pub width: f32,
    /// Largest cross-axis footprint in the line
    pub height: f32,
}

/// Output of a wrap pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapResult {
    pub lines: Vec<WrapLine>,
    /// Widest line
    pub width: f32,
    /// Sum of line heights plus line spacing between them
    pub height: f32,
}

impl WrapResult {
    /// Child indices of all lines, in order
    pub fn flatten(&self) -> Vec<usize> {
        self.lines
            .iter()
            .flat_map(|line| line.children.iter().copied())
            .collect()
    }

    /// Check that the lines list `expected` exactly once each, in order.
    pub fn validate(&self, expected: &[usize]) -> Result<(), LayoutError> {
        let found = self.flatten();

        if let Some(&unknown) = found.iter().find(|index| !expected.contains(index)) {
            return Err(LayoutError::UnknownChild(unknown));
        }

        if found != expected {
            return Err(LayoutError::WrapInvariant {
                expected: expected.to_vec(),
                found,
            });
        }

        Ok(())
    }
}

/// Partitions children into lines.
///
/// Implementors must keep every item exactly once and in order, and must not let
/// a line exceed `capacity` unless it holds a single oversized item.
pub trait WrapProvider {
    fn wrap(&self, request: &WrapRequest<'_>) -> WrapResult;
}

impl<F> WrapProvider for F
where
    F: Fn(&WrapRequest<'_>) -> WrapResult,
{
    fn wrap(&self, request: &WrapRequest<'_>) -> WrapResult {
        self(request)
    }
}

/// First-fit line breaking: an item starts a new line when the space left on
/// the current one is smaller than its footprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyWrap;

impl WrapProvider for GreedyWrap {
    fn wrap(&self, request: &WrapRequest<'_>) -> WrapResult {
        let orientation = request.orientation;
        let mut lines: Vec<WrapLine> = Vec::new();
        let mut remainder = 0.0f32;

        for item in request.items {
            let footprint = item.primary_footprint(orientation);

            if lines.is_empty() || remainder < footprint {
                lines.push(WrapLine::default());
                remainder = request.capacity;
            }
            remainder -= footprint + request.item_spacing;

            let Some(line) = lines.last_mut() else {
                continue;
            };
            if line.children.is_empty() {
                line.width = footprint;
            } else {
                line.width += request.item_spacing + footprint;
            }
            line.height = line.height.max(item.cross_footprint(orientation));
            line.children.push(item.index);
        }

        let width = lines.iter().fold(0.0f32, |acc, line| acc.max(line.width));
        let height = lines.iter().map(|line| line.height).sum::<f32>()
            + request.line_spacing * lines.len().saturating_sub(1) as f32;

        WrapResult {
            lines,
            width,
            height,
        }
    }
}
