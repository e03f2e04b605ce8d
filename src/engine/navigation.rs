//! Keyboard-navigable suggestion list.
//!
//! ```text
//!            text change / focus (non-empty list)
//!   Closed ───────────────────────────────────────▶ Open(index 0)
//!     ▲                                               │  ▲
//!     │  Enter / click (commit), blur                 │  │ ArrowUp / ArrowDown
//!     └───────────────────────────────────────────────┘  │ (clamped, no wrap)
//!                                                     └──┘
//! ```
//!
//! States are values: every transition returns a new state.

use crate::Suggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Suggestions on screen and the highlighted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSuggestionState {
    pub suggestions: Vec<Suggestion>,
    pub active_index: usize,
    pub visible: bool,
}

impl ActiveSuggestionState {
    /// Open on `suggestions` with the first entry active.
    ///
    /// An empty list, or `visible == false`, yields a closed state.
    pub fn open(suggestions: Vec<Suggestion>, visible: bool) -> Self {
        let visible = visible && !suggestions.is_empty();
        ActiveSuggestionState { suggestions, active_index: 0, visible }
    }

    /// Same list, hidden, index back to 0.
    pub fn closed(&self) -> Self {
        ActiveSuggestionState { suggestions: self.suggestions.clone(), active_index: 0, visible: false }
    }

    pub fn is_open(&self) -> bool {
        self.visible && self.active_index < self.suggestions.len()
    }

    /// The highlighted suggestion while the list is open.
    pub fn active(&self) -> Option<&Suggestion> {
        if !self.is_open() {
            return None;
        }
        self.suggestions.get(self.active_index)
    }
}

/// Move the highlight one step, clamped to the list bounds.
///
/// A closed list is returned unchanged.
pub fn navigate(state: &ActiveSuggestionState, direction: Direction) -> ActiveSuggestionState {
    if !state.is_open() {
        return state.clone();
    }

    let last = state.suggestions.len() - 1;
    let active_index = match direction {
        Direction::Up => state.active_index.saturating_sub(1),
        Direction::Down => (state.active_index + 1).min(last),
    };

    ActiveSuggestionState { active_index, ..state.clone() }
}
