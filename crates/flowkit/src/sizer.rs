//! Wrap sizer: a container that flows its children into lines.
//!
//! Children are packed along the flow axis ([`Orientation`]) until the
//! container's inner extent is used up, then continue on a new line stacked
//! along the cross axis. Sizing, wrapping and placement happen in
//! [`WrapSizer::layout`].
//!
//! # Example
//!
//! ```
//! use flowkit::{SizerChild, SizerConfig, WrapSizer};
//!
//! let mut sizer = WrapSizer::new(SizerConfig::default().with_item_spacing(5.0))
//!     .with_child(SizerChild::element(30.0, 20.0))
//!     .with_child(SizerChild::element(40.0, 20.0));
//!
//! sizer.layout(Some(100.0), None).unwrap();
//! assert_eq!(sizer.children()[1].rect().left(), 35.0);
//! assert_eq!(sizer.height(), 20.0);
//! ```

use crate::align::{align_in, Align, AlignZone};
use crate::error::LayoutError;
use crate::events::InteractionState;
use crate::layout::{Orientation, Spacing};
use crate::primitives::{Point, Rect, Size2};
use crate::wrap::{GreedyWrap, WrapItem, WrapProvider, WrapRequest, WrapResult};
use flowkit_macros::WithBuilders;

/// Identifier for a sizer child, used to find it again after layout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Container-level layout settings
#[derive(Debug, Clone, WithBuilders)]
pub struct SizerConfig {
    pub orientation: Orientation,
    #[with_builders(into)]
    pub padding: Spacing,
    /// Gap between neighbouring children on the same line
    pub item_spacing: f32,
    /// Gap between stacked lines
    pub line_spacing: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            padding: Spacing::zero(),
            item_spacing: 0.0,
            line_spacing: 0.0,
            min_width: 0.0,
            min_height: 0.0,
        }
    }
}

/// Per-child layout settings
#[derive(Debug, Clone, Default, WithBuilders)]
pub struct ChildConfig {
    #[with_builders(into)]
    pub padding: Spacing,
    pub align: Align,
    /// Hidden children are neither wrapped nor moved
    pub hidden: bool,
}

/// Decorative element stretched over the sizer's bounds
#[derive(Debug, Clone, Default, WithBuilders)]
pub struct Background {
    #[with_builders(skip)]
    pub rect: Rect,
    #[with_builders(into)]
    pub padding: Spacing,
}

impl Background {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What a sizer child is made of
#[derive(Debug, Clone)]
pub enum ChildKind {
    /// A leaf element with an already resolved size
    Element(Rect),
    /// A nested sizer, laid out at its intrinsic size before its parent
    Sizer(Box<WrapSizer>),
}

/// A child of a [`WrapSizer`]
#[derive(Debug, Clone)]
pub struct SizerChild {
    id: Option<NodeId>,
    config: ChildConfig,
    state: InteractionState,
    kind: ChildKind,
}

impl SizerChild {
    /// A leaf element of the given size
    pub fn element(width: f32, height: f32) -> Self {
        Self::new(ChildKind::Element(Rect::from_min_size(
            [0.0, 0.0],
            [width, height],
        )))
    }

    /// A nested sizer
    pub fn sizer(sizer: WrapSizer) -> Self {
        Self::new(ChildKind::Sizer(Box::new(sizer)))
    }

    fn new(kind: ChildKind) -> Self {
        Self {
            id: None,
            config: ChildConfig::default(),
            state: InteractionState::Idle,
            kind,
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_config(mut self, config: ChildConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.config.padding = padding.into();
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.config.align = align;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.config.hidden = hidden;
        self
    }

    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn config(&self) -> &ChildConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChildConfig {
        &mut self.config
    }

    pub fn kind(&self) -> &ChildKind {
        &self.kind
    }

    /// The nested sizer, if this child is one
    pub fn as_sizer(&self) -> Option<&WrapSizer> {
        match &self.kind {
            ChildKind::Sizer(sizer) => Some(sizer),
            ChildKind::Element(_) => None,
        }
    }

    pub fn as_sizer_mut(&mut self) -> Option<&mut WrapSizer> {
        match &mut self.kind {
            ChildKind::Sizer(sizer) => Some(sizer),
            ChildKind::Element(_) => None,
        }
    }

    /// Current bounds in absolute coordinates
    pub fn rect(&self) -> Rect {
        match &self.kind {
            ChildKind::Element(rect) => *rect,
            ChildKind::Sizer(sizer) => sizer.rect(),
        }
    }

    pub fn size(&self) -> Size2 {
        self.rect().size()
    }

    /// Whether the child takes part in wrapping
    pub fn is_visible(&self) -> bool {
        if self.config.hidden {
            return false;
        }
        match &self.kind {
            ChildKind::Element(_) => true,
            ChildKind::Sizer(sizer) => sizer.is_visible(),
        }
    }

    /// Change the size of a leaf element. Nested sizers size themselves.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if let ChildKind::Element(rect) = &mut self.kind {
            *rect = rect.with_size(width, height);
        }
    }

    /// Move the child's top-left corner to `position`, dragging any nested children along
    pub fn set_position(&mut self, position: Point) {
        match &mut self.kind {
            ChildKind::Element(rect) => *rect = rect.with_min(position),
            ChildKind::Sizer(sizer) => sizer.move_to(position),
        }
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    pub fn set_interaction_state(&mut self, state: InteractionState) {
        self.state = state;
    }

    /// Clear transient interaction state after the child was moved
    pub fn reset_state(&mut self) {
        self.state = self.state.reset();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        match &mut self.kind {
            ChildKind::Element(rect) => rect.translate(dx, dy),
            ChildKind::Sizer(sizer) => sizer.translate(dx, dy),
        }
    }
}

/// Container that arranges its children into wrapped lines
#[derive(Debug, Clone)]
pub struct WrapSizer {
    config: SizerConfig,
    rect: Rect,
    visible: bool,
    children: Vec<SizerChild>,
    backgrounds: Vec<Background>,
    max_child_width: f32,
    max_child_height: f32,
    wrap_result: WrapResult,
}

impl Default for WrapSizer {
    fn default() -> Self {
        Self::new(SizerConfig::default())
    }
}

impl WrapSizer {
    pub fn new(config: SizerConfig) -> Self {
        Self {
            config,
            rect: Rect::default(),
            visible: true,
            children: Vec::new(),
            backgrounds: Vec::new(),
            max_child_width: 0.0,
            max_child_height: 0.0,
            wrap_result: WrapResult::default(),
        }
    }

    /// Place the sizer's top-left corner before the first layout
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.rect = self.rect.with_min(Point::new(x, y));
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_child(mut self, child: SizerChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SizerChild>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.backgrounds.push(background);
        self
    }

    pub fn add_child(&mut self, child: SizerChild) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn config(&self) -> &SizerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SizerConfig {
        &mut self.config
    }

    pub fn children(&self) -> &[SizerChild] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SizerChild] {
        &mut self.children
    }

    /// Find a child by id
    pub fn child(&self, id: &str) -> Option<&SizerChild> {
        self.children
            .iter()
            .find(|child| child.id().is_some_and(|child_id| child_id.as_str() == id))
    }

    pub fn backgrounds(&self) -> &[Background] {
        &self.backgrounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn left(&self) -> f32 {
        self.rect.left()
    }

    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// Widest visible child plus its horizontal padding, as of the last `layout_init`
    pub fn max_child_width(&self) -> f32 {
        self.max_child_width
    }

    /// Tallest visible child plus its vertical padding, as of the last `layout_init`
    pub fn max_child_height(&self) -> f32 {
        self.max_child_height
    }

    /// Lines produced by the last layout pass
    pub fn wrap_result(&self) -> &WrapResult {
        &self.wrap_result
    }

    /// Set the bounding box size. Children are not moved.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.rect = self.rect.with_size(width, height);
    }

    /// Move the sizer's top-left corner to `position`, together with everything inside it
    pub fn move_to(&mut self, position: Point) {
        let dx = position.x - self.rect.left();
        let dy = position.y - self.rect.top();
        if dx != 0.0 || dy != 0.0 {
            self.translate(dx, dy);
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.rect.translate(dx, dy);
        for child in &mut self.children {
            child.translate(dx, dy);
        }
        for background in &mut self.backgrounds {
            background.rect.translate(dx, dy);
        }
    }

    /// Lay out with the default [`GreedyWrap`] line breaking.
    ///
    /// `None` dimensions resolve to the intrinsic size: the widest (or tallest)
    /// child plus padding, but at least the configured minimum.
    pub fn layout(
        &mut self,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<&mut Self, LayoutError> {
        self.layout_with(&GreedyWrap, width, height)
    }

    /// Lay out using `provider` to break children into lines.
    ///
    /// Invisible sizers are left untouched.
    pub fn layout_with<P>(
        &mut self,
        provider: &P,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<&mut Self, LayoutError>
    where
        P: WrapProvider + ?Sized,
    {
        if !self.visible {
            return Ok(self);
        }

        self.layout_init(provider)?;

        let orientation = self.config.orientation;
        let padding = self.config.padding;

        let mut width = width.unwrap_or_else(|| {
            (self.max_child_width + padding.get_horizontal()).max(self.config.min_width)
        });
        let mut height = height.unwrap_or_else(|| {
            (self.max_child_height + padding.get_vertical()).max(self.config.min_height)
        });

        let capacity = match orientation {
            Orientation::Horizontal => width - padding.get_horizontal(),
            Orientation::Vertical => height - padding.get_vertical(),
        };

        let items = self.wrap_items();
        let expected: Vec<usize> = items.iter().map(|item| item.index).collect();
        let result = provider.wrap(&WrapRequest {
            items: &items,
            orientation,
            capacity,
            item_spacing: self.config.item_spacing,
            line_spacing: self.config.line_spacing,
        });

        if let Err(err) = result.validate(&expected) {
            log::error!("wrap sizer layout aborted: {err}");
            return Err(err);
        }

        // Lines may need more room on the cross axis than the resolved size gives
        match orientation {
            Orientation::Horizontal => {
                height = height.max(result.height + padding.get_vertical());
            }
            Orientation::Vertical => {
                width = width.max(result.height + padding.get_horizontal());
            }
        }
        self.resize(width, height);

        self.place_children(&result);
        self.layout_backgrounds();

        log::debug!(
            "wrap sizer laid out {} children in {} lines, size {}x{}",
            expected.len(),
            result.lines.len(),
            width,
            height
        );
        self.wrap_result = result;

        Ok(self)
    }

    /// Resolve nested sizers at their intrinsic size and refresh the
    /// `max_child_width` / `max_child_height` bounds.
    pub fn layout_init<P>(&mut self, provider: &P) -> Result<(), LayoutError>
    where
        P: WrapProvider + ?Sized,
    {
        for child in &mut self.children {
            if child.config.hidden {
                continue;
            }
            if let Some(sizer) = child.as_sizer_mut() {
                sizer.layout_with(provider, None, None)?;
            }
        }

        let mut max_width = 0.0f32;
        let mut max_height = 0.0f32;
        for child in self.children.iter().filter(|child| child.is_visible()) {
            let size = child.size();
            let padding = child.config.padding;
            max_width = max_width.max(size.width + padding.get_horizontal());
            max_height = max_height.max(size.height + padding.get_vertical());
        }
        self.max_child_width = max_width;
        self.max_child_height = max_height;

        Ok(())
    }

    /// Stretch every background over the sizer's bounds, minus its own padding
    pub fn layout_backgrounds(&mut self) {
        let rect = self.rect;
        for background in &mut self.backgrounds {
            let padding = background.padding;
            background.rect = Rect::from_min_size(
                [rect.left() + padding.left, rect.top() + padding.top],
                [
                    (rect.width() - padding.get_horizontal()).max(0.0),
                    (rect.height() - padding.get_vertical()).max(0.0),
                ],
            );
        }
    }

    fn wrap_items(&self) -> Vec<WrapItem> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_visible())
            .map(|(index, child)| WrapItem {
                index,
                size: child.size(),
                padding: child.config.padding,
            })
            .collect()
    }

    fn place_children(&mut self, result: &WrapResult) {
        let orientation = self.config.orientation;
        let padding = self.config.padding;
        let item_spacing = self.config.item_spacing;
        let line_spacing = self.config.line_spacing;

        let (line_start, cross_origin) = match orientation {
            Orientation::Horizontal => (self.rect.left(), self.rect.top()),
            Orientation::Vertical => (self.rect.top(), self.rect.left()),
        };
        let mut cross_cursor = cross_origin + padding.cross_leading(orientation);

        for line in &result.lines {
            let mut cursor = line_start;

            for (position_in_line, &index) in line.children.iter().enumerate() {
                let child = &mut self.children[index];
                let child_padding = child.config.padding;
                let size = child.size();

                let mut primary = cursor + child_padding.leading(orientation);
                if position_in_line == 0 {
                    primary += padding.leading(orientation);
                } else {
                    primary += item_spacing;
                }
                let cross = cross_cursor + child_padding.cross_leading(orientation);
                cursor = primary + orientation.primary(size) + child_padding.trailing(orientation);

                let (x, y) = orientation.to_xy(primary, cross);
                let zone = AlignZone::new(x, y, size.width, size.height);
                let position = align_in(size, &zone, child.config.align);
                child.set_position(position);
                child.reset_state();

                log::trace!(
                    "placed child {index} ({:?}) at ({}, {})",
                    child.id().map(NodeId::as_str),
                    position.x,
                    position.y
                );
            }

            cross_cursor += line.height + line_spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::WrapLine;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn positions(sizer: &WrapSizer) -> Vec<(f32, f32)> {
        sizer
            .children()
            .iter()
            .map(|child| (child.rect().left(), child.rect().top()))
            .collect()
    }

    #[test]
    fn test_single_line_with_item_spacing() {
        init_logger();
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_item_spacing(5.0)
                .with_line_spacing(10.0),
        )
        .with_child(SizerChild::element(30.0, 20.0))
        .with_child(SizerChild::element(40.0, 20.0));

        sizer.layout(Some(100.0), None).unwrap();

        assert_eq!(sizer.wrap_result().lines.len(), 1);
        assert_eq!(sizer.wrap_result().lines[0].height, 20.0);
        assert_eq!(positions(&sizer), vec![(0.0, 0.0), (35.0, 0.0)]);
        assert_eq!(sizer.width(), 100.0);
        assert_eq!(sizer.height(), 20.0);
    }

    #[test]
    fn test_lines_stack_by_height_and_spacing() {
        init_logger();
        let heights = [10.0, 20.0, 15.0, 5.0, 30.0, 25.0];
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_padding(Spacing::all(5.0))
                .with_item_spacing(5.0)
                .with_line_spacing(10.0),
        )
        .with_children(heights.iter().map(|&h| SizerChild::element(40.0, h)));

        // Inner width 90 fits two 40px children plus spacing
        sizer.layout(Some(100.0), None).unwrap();

        let lines = sizer.wrap_result().lines.clone();
        assert_eq!(lines.len(), 3);

        let mut expected_y = 5.0;
        for line in &lines {
            let first = &sizer.children()[line.children[0]];
            assert_eq!(first.rect().top(), expected_y);
            assert_eq!(first.rect().left(), 5.0);
            expected_y += line.height + 10.0;
        }

        // 20 + 15 + 30, two line gaps, top and bottom padding
        assert_eq!(sizer.height(), 20.0 + 15.0 + 30.0 + 20.0 + 10.0);
        assert_eq!(sizer.children()[1].rect().left(), 50.0);
    }

    #[test]
    fn test_child_padding_offsets_placement() {
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_padding(Spacing::trbl(3.0, 0.0, 0.0, 7.0))
                .with_item_spacing(2.0),
        )
        .with_child(SizerChild::element(10.0, 10.0).with_padding(Spacing::trbl(1.0, 4.0, 0.0, 2.0)))
        .with_child(SizerChild::element(10.0, 10.0).with_padding(Spacing::trbl(0.0, 0.0, 0.0, 3.0)));

        sizer.layout(Some(200.0), None).unwrap();

        // first: 2 (child left) + 7 (container left); second: 23 + 3 (child left) + 2 (spacing)
        assert_eq!(positions(&sizer), vec![(9.0, 4.0), (28.0, 3.0)]);
        assert_eq!(sizer.height(), 3.0 + 11.0);
    }

    #[test]
    fn test_vertical_flow_reconciles_width_with_side_padding() {
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_orientation(Orientation::Vertical)
                .with_padding(Spacing::trbl(1.0, 2.0, 3.0, 4.0))
                .with_item_spacing(2.0)
                .with_line_spacing(5.0),
        )
        .with_children((0..3).map(|_| SizerChild::element(10.0, 20.0)));

        sizer.layout(None, Some(50.0)).unwrap();

        assert_eq!(
            positions(&sizer),
            vec![(4.0, 1.0), (4.0, 23.0), (19.0, 1.0)]
        );
        // 10 + 5 + 10 stacked, plus left and right padding
        assert_eq!(sizer.width(), 31.0);
        assert_eq!(sizer.height(), 50.0);
    }

    #[test]
    fn test_intrinsic_size_uses_widest_child_and_minimums() {
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_padding(Spacing::symmetric(5.0, 0.0))
                .with_min_height(100.0),
        )
        .with_child(SizerChild::element(30.0, 10.0))
        .with_child(SizerChild::element(60.0, 10.0).with_padding(Spacing::symmetric(2.0, 0.0)));

        sizer.layout(None, None).unwrap();

        assert_eq!(sizer.max_child_width(), 64.0);
        assert_eq!(sizer.width(), 74.0);
        assert_eq!(sizer.height(), 100.0);
        assert_eq!(sizer.wrap_result().lines.len(), 2);

        sizer.config_mut().min_width = 200.0;
        sizer.layout(None, None).unwrap();
        assert_eq!(sizer.width(), 200.0);
        assert_eq!(sizer.wrap_result().lines.len(), 1);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut sizer = WrapSizer::new(
            SizerConfig::default()
                .with_padding(Spacing::all(4.0))
                .with_item_spacing(3.0)
                .with_line_spacing(6.0),
        )
        .with_position(10.0, 20.0)
        .with_children(
            [(30.0, 10.0), (25.0, 30.0), (50.0, 12.0), (10.0, 10.0)]
                .into_iter()
                .map(|(w, h)| SizerChild::element(w, h).with_align(Align::BottomRight)),
        );

        sizer.layout(Some(80.0), None).unwrap();
        let first = positions(&sizer);
        let first_rect = sizer.rect();

        sizer.layout(Some(80.0), None).unwrap();
        assert_eq!(positions(&sizer), first);
        assert_eq!(sizer.rect(), first_rect);
        assert_eq!(first[0], (14.0, 24.0));
    }

    #[test]
    fn test_invisible_sizer_is_untouched() {
        let mut sizer = WrapSizer::default()
            .with_visible(false)
            .with_child(SizerChild::element(30.0, 20.0).with_padding(Spacing::all(5.0)));

        sizer.layout(Some(100.0), Some(100.0)).unwrap();

        assert_eq!(sizer.width(), 0.0);
        assert_eq!(sizer.height(), 0.0);
        assert!(sizer.wrap_result().lines.is_empty());
        assert_eq!(positions(&sizer), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_hidden_children_are_skipped() {
        let mut sizer = WrapSizer::new(SizerConfig::default().with_item_spacing(1.0))
            .with_child(SizerChild::element(10.0, 10.0).with_id("a"))
            .with_child(SizerChild::element(500.0, 500.0).with_id("hidden").with_hidden(true))
            .with_child(SizerChild::element(10.0, 10.0).with_id("b"));

        sizer.layout(Some(50.0), None).unwrap();

        assert_eq!(sizer.wrap_result().flatten(), vec![0, 2]);
        assert_eq!(sizer.child("b").unwrap().rect().left(), 11.0);
        assert_eq!(sizer.child("hidden").unwrap().rect().left(), 0.0);
        assert_eq!(sizer.height(), 10.0);
    }

    #[test]
    fn test_invisible_nested_sizer_is_skipped() {
        let invisible = WrapSizer::default()
            .with_position(200.0, 200.0)
            .with_visible(false)
            .with_child(SizerChild::element(300.0, 300.0));
        let mut sizer = WrapSizer::new(SizerConfig::default().with_item_spacing(1.0))
            .with_child(SizerChild::element(10.0, 10.0).with_id("a"))
            .with_child(SizerChild::sizer(invisible).with_id("invisible"))
            .with_child(SizerChild::element(10.0, 10.0).with_id("b"));

        sizer.layout(Some(50.0), None).unwrap();

        assert_eq!(sizer.wrap_result().flatten(), vec![0, 2]);
        assert_eq!(sizer.wrap_result().lines.len(), 1);
        assert_eq!(sizer.height(), 10.0);
        assert_eq!(sizer.max_child_width(), 10.0);
        assert_eq!(sizer.max_child_height(), 10.0);
        assert_eq!(sizer.child("b").unwrap().rect().left(), 11.0);
        assert_eq!(sizer.child("invisible").unwrap().rect().left(), 200.0);
    }

    #[test]
    fn test_nested_sizer_moves_with_its_children() {
        let inner = WrapSizer::new(SizerConfig::default().with_padding(Spacing::all(2.0)))
            .with_child(SizerChild::element(10.0, 10.0).with_id("a"))
            .with_child(SizerChild::element(10.0, 10.0).with_id("b"));
        let mut outer = WrapSizer::default()
            .with_child(SizerChild::element(30.0, 10.0))
            .with_child(SizerChild::sizer(inner).with_id("inner"));

        outer.layout(Some(200.0), None).unwrap();
        outer.layout(Some(200.0), None).unwrap();

        let inner = outer.child("inner").unwrap().as_sizer().unwrap();
        assert_eq!(inner.rect(), Rect::from_min_size([30.0, 0.0], [14.0, 24.0]));
        assert_eq!(inner.child("a").unwrap().rect().min, [32.0, 2.0]);
        assert_eq!(inner.child("b").unwrap().rect().min, [32.0, 12.0]);
        assert_eq!(outer.height(), 24.0);
    }

    #[test]
    fn test_backgrounds_follow_final_bounds() {
        let mut sizer = WrapSizer::new(SizerConfig::default().with_padding(Spacing::all(5.0)))
            .with_position(100.0, 50.0)
            .with_background(Background::new())
            .with_background(Background::new().with_padding(Spacing::all(2.0)))
            .with_child(SizerChild::element(20.0, 20.0));

        sizer.layout(None, None).unwrap();

        let backgrounds = sizer.backgrounds();
        assert_eq!(
            backgrounds[0].rect,
            Rect::from_min_size([100.0, 50.0], [30.0, 30.0])
        );
        assert_eq!(
            backgrounds[1].rect,
            Rect::from_min_size([102.0, 52.0], [26.0, 26.0])
        );
    }

    #[test]
    fn test_placement_resets_interaction_state() {
        let mut sizer = WrapSizer::default()
            .with_child(SizerChild::element(10.0, 10.0))
            .with_child(SizerChild::element(10.0, 10.0));
        sizer.children_mut()[0].set_interaction_state(InteractionState::Active);
        sizer.children_mut()[1].set_interaction_state(InteractionState::Disabled);

        sizer.layout(None, None).unwrap();

        assert_eq!(
            sizer.children()[0].interaction_state(),
            InteractionState::Idle
        );
        assert_eq!(
            sizer.children()[1].interaction_state(),
            InteractionState::Disabled
        );
    }

    #[test]
    fn test_rejects_provider_that_drops_children() {
        init_logger();
        let mut sizer = WrapSizer::default()
            .with_child(SizerChild::element(10.0, 10.0))
            .with_child(SizerChild::element(10.0, 10.0));

        fn lossy(request: &WrapRequest<'_>) -> WrapResult {
            WrapResult {
                lines: vec![WrapLine {
                    children: vec![request.items[0].index],
                    width: 10.0,
                    height: 10.0,
                }],
                width: 10.0,
                height: 10.0,
            }
        }

        let err = sizer.layout_with(&lossy, Some(100.0), None).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WrapInvariant {
                expected: vec![0, 1],
                found: vec![0],
            }
        );
    }

    #[test]
    fn test_custom_provider_drives_placement() {
        // One child per line regardless of capacity
        fn one_per_line(request: &WrapRequest<'_>) -> WrapResult {
            let lines: Vec<WrapLine> = request
                .items
                .iter()
                .map(|item| WrapLine {
                    children: vec![item.index],
                    width: item.primary_footprint(request.orientation),
                    height: item.cross_footprint(request.orientation),
                })
                .collect();
            let height = lines.iter().map(|line| line.height).sum::<f32>()
                + request.line_spacing * lines.len().saturating_sub(1) as f32;
            WrapResult {
                lines,
                width: 0.0,
                height,
            }
        }
        let mut sizer = WrapSizer::new(SizerConfig::default().with_line_spacing(4.0))
            .with_child(SizerChild::element(10.0, 10.0))
            .with_child(SizerChild::element(10.0, 6.0));

        sizer.layout_with(&one_per_line, Some(100.0), None).unwrap();

        assert_eq!(positions(&sizer), vec![(0.0, 0.0), (0.0, 14.0)]);
        assert_eq!(sizer.height(), 20.0);
    }
}
