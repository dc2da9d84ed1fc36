//! Interaction state and edge-triggered scroll notifications.

/// Transient interaction state of a sizer child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Child is idle (not being interacted with)
    Idle,
    /// Pointer is hovering over the child
    Hovered,
    /// Child is being actively interacted with (pressed/dragged)
    Active,
    /// Child is disabled and cannot be interacted with
    Disabled,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionState {
    /// State after a layout pass moved the child. Disabled survives, anything else
    /// goes back to idle.
    pub fn reset(self) -> Self {
        match self {
            InteractionState::Disabled => InteractionState::Disabled,
            _ => InteractionState::Idle,
        }
    }
}

/// Scroll bound of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

/// Emitted when a requested text offset moves past one of the scroll bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEvent {
    pub edge: Edge,
    /// The offset that was requested, before clamping
    pub oy: f32,
    /// The bound that was crossed
    pub bound: f32,
}

/// Whether an offset currently lies past a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeState {
    #[default]
    Within,
    Exceeding,
}

/// Latch that reports only the transition into [`EdgeState::Exceeding`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeLatch {
    state: EdgeState,
}

impl EdgeLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn is_exceeding(&self) -> bool {
        self.state == EdgeState::Exceeding
    }

    /// Store the new condition. Returns true when it went from within to exceeding.
    pub fn transition(&mut self, exceeding: bool) -> bool {
        let next = if exceeding {
            EdgeState::Exceeding
        } else {
            EdgeState::Within
        };
        let fired = self.state == EdgeState::Within && next == EdgeState::Exceeding;
        self.state = next;
        fired
    }
}
