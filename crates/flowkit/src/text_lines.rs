//! Line buffers backing a [`TextBlock`](crate::TextBlock).
//!
//! Plain text objects keep a flat list of lines. Tagged text objects keep a
//! segmented buffer of pens, where a line may be made of several differently
//! styled segments.

/// A styled run of text on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pen {
    pub text: String,
    pub line_index: usize,
    /// Style tag the segment was written with, if any
    pub tag: Option<String>,
}

/// Segmented text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenManager {
    pens: Vec<Pen>,
    current_line: usize,
    has_content: bool,
}

impl PenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from text, one untagged pen per line
    pub fn from_text(text: &str) -> Self {
        let mut manager = Self::new();
        manager.set_text(text);
        manager
    }

    /// Append a segment to the current line. `\n` inside `text` starts new lines.
    pub fn push_pen(&mut self, text: &str, tag: Option<&str>) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.new_line();
            }
            if part.is_empty() {
                continue;
            }
            self.pens.push(Pen {
                text: part.to_string(),
                line_index: self.current_line,
                tag: tag.map(str::to_string),
            });
        }
        self.has_content = true;
    }

    /// Close the current line
    pub fn new_line(&mut self) {
        self.current_line += 1;
        self.has_content = true;
    }

    /// Replace the buffer content, one untagged pen per line
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        if !text.is_empty() {
            self.push_pen(text, None);
        }
    }

    pub fn pens(&self) -> &[Pen] {
        &self.pens
    }

    pub fn lines_count(&self) -> usize {
        if self.has_content {
            self.current_line + 1
        } else {
            0
        }
    }

    /// Pens on line `index`, in order
    pub fn line_pens(&self, index: usize) -> impl Iterator<Item = &Pen> {
        self.pens.iter().filter(move |pen| pen.line_index == index)
    }

    /// Concatenated text of line `index`
    pub fn line_text(&self, index: usize) -> Option<String> {
        (index < self.lines_count())
            .then(|| self.line_pens(index).map(|pen| pen.text.as_str()).collect())
    }

    pub fn clear(&mut self) {
        self.pens.clear();
        self.current_line = 0;
        self.has_content = false;
    }
}

/// Which line buffer a text block uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    #[default]
    Plain,
    Tagged,
}

/// The two line-buffer representations, behind one read-only surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLines {
    Plain(Vec<String>),
    Tagged(PenManager),
}

impl TextLines {
    pub fn new(kind: TextKind) -> Self {
        match kind {
            TextKind::Plain => TextLines::Plain(Vec::new()),
            TextKind::Tagged => TextLines::Tagged(PenManager::new()),
        }
    }

    pub fn kind(&self) -> TextKind {
        match self {
            TextLines::Plain(_) => TextKind::Plain,
            TextLines::Tagged(_) => TextKind::Tagged,
        }
    }

    pub fn lines_count(&self) -> usize {
        match self {
            TextLines::Plain(lines) => lines.len(),
            TextLines::Tagged(pens) => pens.lines_count(),
        }
    }

    /// Text of line `index`
    pub fn line(&self, index: usize) -> Option<String> {
        match self {
            TextLines::Plain(lines) => lines.get(index).cloned(),
            TextLines::Tagged(pens) => pens.line_text(index),
        }
    }

    /// Rebuild the buffer from `text`, keeping the representation
    pub fn set_text(&mut self, text: &str) {
        match self {
            TextLines::Plain(lines) => {
                lines.clear();
                if !text.is_empty() {
                    lines.extend(text.split('\n').map(str::to_string));
                }
            }
            TextLines::Tagged(pens) => pens.set_text(text),
        }
    }

    pub fn clear(&mut self) {
        match self {
            TextLines::Plain(lines) => lines.clear(),
            TextLines::Tagged(pens) => pens.clear(),
        }
    }
}
