//! Caller-owned autocomplete state.
//!
//! The matcher has no timers. A front end that debounces keystrokes starts a
//! search with [`AutocompleteState::with_input`], runs it whenever its quiet
//! window expires, and hands the results back with
//! [`AutocompleteState::apply_results`]. Results whose ticket no longer
//! matches the latest input are dropped.
//!
//! Every transition consumes the state and returns the next one.

use serde::{Deserialize, Serialize};

use crate::core::ScoredSong;

/// Query an autocomplete search was started for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTicket {
    pub query: String,
}

/// Keyboard keys the suggestion panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Result of a key press
#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// Key consumed, nothing chosen
    Handled,
    /// Enter on a highlighted suggestion
    Selected(ScoredSong),
    /// Key not consumed; let the input handle it
    Ignored,
}

/// Autocomplete UI state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteState {
    /// Latest text typed by the user
    pub input: String,

    /// A search for `input` is pending
    pub searching: bool,

    /// Suggestions currently on display
    pub suggestions: Vec<ScoredSong>,

    /// Highlighted suggestion, `None` when nothing is highlighted
    pub selected: Option<usize>,

    /// Suggestion panel open
    pub visible: bool,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record new input and get the ticket for its search
    pub fn with_input(mut self, input: impl Into<String>) -> (Self, SearchTicket) {
        self.input = input.into();
        self.searching = true;
        let ticket = SearchTicket {
            query: self.input.clone(),
        };
        (self, ticket)
    }

    /// Whether results for `ticket` still belong to the latest input
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.query == self.input
    }

    /// Install results for `ticket`, or drop them if the input moved on
    pub fn apply_results(mut self, ticket: &SearchTicket, suggestions: Vec<ScoredSong>) -> Self {
        if !self.is_current(ticket) {
            tracing::trace!(
                "Dropping stale suggestions for \"{}\" (input is \"{}\")",
                ticket.query,
                self.input
            );
            return self;
        }

        self.searching = false;
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
        self
    }

    /// React to a navigation key
    pub fn navigate(mut self, key: NavKey) -> (Self, NavOutcome) {
        match key {
            NavKey::Down => {
                let next = self.selected.map_or(0, |i| i + 1);
                if next < self.suggestions.len() {
                    self.selected = Some(next);
                }
                (self, NavOutcome::Handled)
            }
            NavKey::Up => {
                self.selected = match self.selected {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                (self, NavOutcome::Handled)
            }
            NavKey::Enter => {
                let chosen = self.selected_song().cloned();
                match chosen {
                    Some(song) => (self.hide(), NavOutcome::Selected(song)),
                    None => (self, NavOutcome::Ignored),
                }
            }
            NavKey::Escape => (self.hide(), NavOutcome::Handled),
        }
    }

    /// Close the panel and clear the highlight
    pub fn hide(mut self) -> Self {
        self.visible = false;
        self.selected = None;
        self
    }

    /// Highlighted suggestion, if any
    pub fn selected_song(&self) -> Option<&ScoredSong> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Song;

    fn suggestions() -> Vec<ScoredSong> {
        vec![
            ScoredSong::new(Song::new("1", "Bohemian Rhapsody", "Queen"), 0.8),
            ScoredSong::new(Song::new("2", "Vogue", "Madonna"), 0.4),
        ]
    }

    #[test]
    fn test_fresh_results_are_applied() {
        let (state, ticket) = AutocompleteState::new().with_input("Bohe");
        assert!(state.searching);

        let state = state.apply_results(&ticket, suggestions());
        assert!(!state.searching);
        assert!(state.visible);
        assert_eq!(state.suggestions.len(), 2);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let (state, old_ticket) = AutocompleteState::new().with_input("Bo");
        let (state, new_ticket) = state.with_input("Bohe");

        let state = state.apply_results(&old_ticket, suggestions());
        assert!(state.suggestions.is_empty());
        assert!(state.searching);
        assert!(!state.visible);

        let state = state.apply_results(&new_ticket, suggestions());
        assert_eq!(state.suggestions.len(), 2);
    }

    #[test]
    fn test_empty_results_keep_panel_closed() {
        let (state, ticket) = AutocompleteState::new().with_input("zz");
        let state = state.apply_results(&ticket, Vec::new());
        assert!(!state.visible);
        assert!(!state.searching);
    }

    #[test]
    fn test_keyboard_navigation() {
        let (state, ticket) = AutocompleteState::new().with_input("Bohe");
        let state = state.apply_results(&ticket, suggestions());

        let (state, outcome) = state.navigate(NavKey::Down);
        assert_eq!(outcome, NavOutcome::Handled);
        assert_eq!(state.selected, Some(0));

        let (state, _) = state.navigate(NavKey::Down);
        let (state, _) = state.navigate(NavKey::Down);
        // stops at the last suggestion
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.selected_song().map(|s| s.song.id.as_str()), Some("2"));

        let (state, _) = state.navigate(NavKey::Up);
        let (state, _) = state.navigate(NavKey::Up);
        let (state, outcome) = state.navigate(NavKey::Up);
        assert_eq!(outcome, NavOutcome::Handled);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_enter_selects_and_hides() {
        let (state, ticket) = AutocompleteState::new().with_input("Bohe");
        let state = state.apply_results(&ticket, suggestions());

        let (state, outcome) = state.navigate(NavKey::Enter);
        assert_eq!(outcome, NavOutcome::Ignored);
        assert!(state.visible);

        let (state, _) = state.navigate(NavKey::Down);
        let (state, outcome) = state.navigate(NavKey::Enter);
        match outcome {
            NavOutcome::Selected(song) => assert_eq!(song.song.title, "Bohemian Rhapsody"),
            other => panic!("expected selection, got {:?}", other),
        }
        assert!(!state.visible);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_escape_hides() {
        let (state, ticket) = AutocompleteState::new().with_input("Bohe");
        let (state, _) = state.apply_results(&ticket, suggestions()).navigate(NavKey::Down);

        let (state, outcome) = state.navigate(NavKey::Escape);
        assert_eq!(outcome, NavOutcome::Handled);
        assert!(!state.visible);
        assert_eq!(state.selected, None);
        // suggestions survive hiding
        assert_eq!(state.suggestions.len(), 2);
    }
}
