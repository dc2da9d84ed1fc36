//! Scrollable text window.
//!
//! A [`TextBlock`] shows a vertical window onto a multi-line text buffer. The
//! window position is the text offset `text_oy`: `0` aligns the first line with
//! the top of the viewport and more negative values scroll further down, never
//! past [`TextBlock::bottom_text_oy`] while clamp mode is on.
//!
//! Requests past either bound raise an [`EdgeEvent`] on the transition into the
//! exceeding state only. Events are queued until [`TextBlock::take_events`] and
//! are also handed to the optional listener as they happen.

use std::ops::Range;

use crate::events::{Edge, EdgeEvent, EdgeLatch};
use crate::text_lines::{TextKind, TextLines};
use flowkit_macros::WithBuilders;

/// Font metrics of the text object that renders the block
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct TextStyle {
    pub font_size: f32,
    pub stroke_thickness: f32,
    /// Extra gap between consecutive lines
    pub line_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            stroke_thickness: 0.0,
            line_spacing: 0.0,
        }
    }
}

impl TextStyle {
    /// Height of a single line, stroke included
    pub fn line_height(&self) -> f32 {
        self.font_size + self.stroke_thickness
    }
}

/// The rendering object a text block scrolls.
pub trait TextObject {
    fn style(&self) -> &TextStyle;

    /// Viewport height
    fn height(&self) -> f32;

    fn set_height(&mut self, height: f32);

    /// Shift the rendered text vertically to `text_oy`
    fn update_text_position(&mut self, text_oy: f32);
}

/// Default [`TextObject`]: records the geometry the renderer should use.
#[derive(Debug, Clone, Default)]
pub struct TextViewport {
    style: TextStyle,
    height: f32,
    offset_y: f32,
}

impl TextViewport {
    pub fn new(style: TextStyle, height: f32) -> Self {
        Self {
            style,
            height,
            offset_y: 0.0,
        }
    }

    /// Offset last applied through [`TextObject::update_text_position`]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }
}

impl TextObject for TextViewport {
    fn style(&self) -> &TextStyle {
        &self.style
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn update_text_position(&mut self, text_oy: f32) {
        self.offset_y = text_oy;
    }
}

/// Construction options for a [`TextBlock`]
#[derive(Debug, Clone, Copy, WithBuilders)]
pub struct TextBlockConfig {
    /// Keep `text_oy` within the content bounds
    pub clamp_text_oy: bool,
    pub text_kind: TextKind,
}

impl Default for TextBlockConfig {
    fn default() -> Self {
        Self {
            clamp_text_oy: true,
            text_kind: TextKind::Plain,
        }
    }
}

/// Vertical scroll controller over a line-based text buffer
pub struct TextBlock<T: TextObject = TextViewport> {
    text_object: T,
    text_kind: TextKind,
    lines: Option<TextLines>,
    text: String,
    text_oy: f32,
    top_latch: EdgeLatch,
    bottom_latch: EdgeLatch,
    clamp_text_oy: bool,
    events: Vec<EdgeEvent>,
    listener: Option<Box<dyn FnMut(&EdgeEvent)>>,
}

impl<T: TextObject> TextBlock<T> {
    pub fn new(text_object: T) -> Self {
        Self::with_config(text_object, TextBlockConfig::default())
    }

    pub fn with_config(text_object: T, config: TextBlockConfig) -> Self {
        Self {
            text_object,
            text_kind: config.text_kind,
            lines: None,
            text: String::new(),
            text_oy: 0.0,
            top_latch: EdgeLatch::new(),
            bottom_latch: EdgeLatch::new(),
            clamp_text_oy: config.clamp_text_oy,
            events: Vec::new(),
            listener: None,
        }
    }

    /// Call `f` for every edge event as it is raised
    pub fn on_edge_exceeded(mut self, f: impl FnMut(&EdgeEvent) + 'static) -> Self {
        self.listener = Some(Box::new(f));
        self
    }

    pub fn set_clamp_mode(&mut self, clamp: bool) -> &mut Self {
        self.clamp_text_oy = clamp;
        self
    }

    pub fn clamp_mode(&self) -> bool {
        self.clamp_text_oy
    }

    pub fn text_object(&self) -> &T {
        &self.text_object
    }

    pub fn text_object_mut(&mut self) -> &mut T {
        &mut self.text_object
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line buffer, once text has been set
    pub fn lines(&self) -> Option<&TextLines> {
        self.lines.as_ref()
    }

    /// Replace the text. The offset is kept as is.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        let kind = self.text_kind;
        self.lines
            .get_or_insert_with(|| TextLines::new(kind))
            .set_text(&self.text);
        self.text_object.update_text_position(self.text_oy);
        log::debug!("text block holds {} lines", self.total_lines_count());
        self
    }

    /// Change the viewport height and re-apply the current offset against the new bounds
    pub fn resize_viewport(&mut self, height: f32) -> &mut Self {
        self.text_object.set_height(height);
        self.set_text_oy(self.text_oy);
        self
    }

    // ========== Metrics ==========

    pub fn text_line_height(&self) -> f32 {
        self.text_object.style().line_height()
    }

    pub fn text_line_spacing(&self) -> f32 {
        self.text_object.style().line_spacing
    }

    pub fn total_lines_count(&self) -> usize {
        self.lines.as_ref().map_or(0, TextLines::lines_count)
    }

    /// Whole lines that fit in the viewport
    pub fn visible_lines_count(&self) -> usize {
        self.text_height_to_lines(self.text_object.height())
            .floor()
            .max(0.0) as usize
    }

    /// Height taken by `count` lines, spacing between them included
    pub fn lines_to_text_height(&self, count: usize) -> f32 {
        let spacing = self.text_line_spacing();
        (count as f32 * (self.text_line_height() + spacing) - spacing).max(0.0)
    }

    /// Fractional number of lines that fit in `height`
    pub fn text_height_to_lines(&self, height: f32) -> f32 {
        let step = self.text_line_height() + self.text_line_spacing();
        if step <= 0.0 {
            return 0.0;
        }
        (height + self.text_line_spacing()) / step
    }

    pub fn text_height(&self) -> f32 {
        self.lines_to_text_height(self.total_lines_count())
    }

    pub fn text_object_height(&self) -> f32 {
        self.text_object.height()
    }

    /// Content height hidden below the viewport when scrolled to the top
    pub fn text_visible_height(&self) -> f32 {
        (self.text_height() - self.text_object_height()).max(0.0)
    }

    pub fn top_text_oy(&self) -> f32 {
        0.0
    }

    pub fn bottom_text_oy(&self) -> f32 {
        -self.text_visible_height()
    }

    // ========== Offset ==========

    pub fn text_oy(&self) -> f32 {
        self.text_oy
    }

    pub fn text_oy_exceed_top(&self, oy: f32) -> bool {
        oy > self.top_text_oy()
    }

    pub fn text_oy_exceed_bottom(&self, oy: f32) -> bool {
        oy < self.bottom_text_oy()
    }

    pub fn is_exceeding_top(&self) -> bool {
        self.top_latch.is_exceeding()
    }

    pub fn is_exceeding_bottom(&self) -> bool {
        self.bottom_latch.is_exceeding()
    }

    /// Scroll to `oy`.
    ///
    /// With clamp mode on the stored offset stays within
    /// `[bottom_text_oy, top_text_oy]`, and is pinned to the top when all lines
    /// fit. Edge events compare the requested value, not the clamped one.
    /// A NaN request leaves the offset and the edge state untouched.
    pub fn set_text_oy(&mut self, oy: f32) -> &mut Self {
        if oy.is_nan() {
            log::warn!("ignoring NaN text offset, keeping {}", self.text_oy);
            return self;
        }
        let requested = oy;
        let top = self.top_text_oy();
        let bottom = self.bottom_text_oy();
        let exceeds_top = self.text_oy_exceed_top(requested);
        let exceeds_bottom = self.text_oy_exceed_bottom(requested);

        let mut oy = requested;
        if self.clamp_text_oy {
            if self.visible_lines_count() > self.total_lines_count() {
                oy = top;
            } else if exceeds_top {
                oy = top;
            } else if exceeds_bottom {
                oy = bottom;
            }
        }

        if self.text_oy != oy {
            log::debug!("text offset {} -> {} (requested {})", self.text_oy, oy, requested);
            self.text_oy = oy;
            self.text_object.update_text_position(oy);
        }

        if self.top_latch.transition(exceeds_top) {
            self.emit(EdgeEvent {
                edge: Edge::Top,
                oy: requested,
                bound: top,
            });
        }
        if self.bottom_latch.transition(exceeds_bottom) {
            self.emit(EdgeEvent {
                edge: Edge::Bottom,
                oy: requested,
                bound: bottom,
            });
        }

        self
    }

    /// Scroll to a fraction of the scrollable range; `0` is the top, `1` the bottom
    pub fn set_text_oy_by_percentage(&mut self, percentage: f32) -> &mut Self {
        let percentage = percentage.clamp(0.0, 1.0);
        self.set_text_oy(self.bottom_text_oy() * percentage)
    }

    /// Current offset as a fraction of the scrollable range, `0.0` when nothing scrolls
    pub fn text_oy_percentage(&self) -> f32 {
        let bottom = self.bottom_text_oy();
        if bottom == 0.0 {
            return 0.0;
        }
        self.text_oy / bottom
    }

    /// Indices of lines at least partly inside the viewport
    pub fn visible_line_range(&self) -> Range<usize> {
        let total = self.total_lines_count();
        let step = self.text_line_height() + self.text_line_spacing();
        if step <= 0.0 {
            return 0..total;
        }

        let scrolled = -self.text_oy;
        let first = ((scrolled / step).floor().max(0.0) as usize).min(total);
        let last = (((scrolled + self.text_object_height()) / step).ceil().max(0.0) as usize)
            .clamp(first, total);
        first..last
    }

    // ========== Events ==========

    /// Edge events raised since the last call
    pub fn take_events(&mut self) -> Vec<EdgeEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[EdgeEvent] {
        &self.events
    }

    fn emit(&mut self, event: EdgeEvent) {
        log::debug!("text block exceeded {:?} edge: {:?}", event.edge, event);
        if let Some(listener) = &mut self.listener {
            listener(&event);
        }
        self.events.push(event);
    }
}

impl<T: TextObject + std::fmt::Debug> std::fmt::Debug for TextBlock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBlock")
            .field("text_object", &self.text_object)
            .field("lines", &self.total_lines_count())
            .field("text_oy", &self.text_oy)
            .field("clamp_text_oy", &self.clamp_text_oy)
            .field("pending_events", &self.events.len())
            .finish()
    }
}
