use std::cell::Cell;

/// The two states of the widget.
///
/// The only transition is `Prompting -> Previewing`, taken whenever a file is acquired. Nothing leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetState {
    /// The drop prompt is visible and no file has been chosen.
    #[default]
    Prompting,

    /// The prompt is hidden and the preview shows the selected file.
    Previewing,
}

impl WidgetState {
    /// Whether a file has been acquired.
    pub fn is_previewing(self) -> bool {
        matches!(self, WidgetState::Previewing)
    }
}

/// Identifies one selection. Reads started for an older selection carry an older token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(u64);

impl SelectionToken {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing [`SelectionToken`]s and remembers the latest one.
#[derive(Debug, Default)]
pub struct SelectionCounter {
    current: Cell<u64>,
}

impl SelectionCounter {
    /// Create a counter with no selections made.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection, invalidating every earlier token.
    pub fn next(&self) -> SelectionToken {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        SelectionToken(next)
    }

    /// Whether `token` belongs to the latest selection.
    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.current.get() == token.0
    }
}
