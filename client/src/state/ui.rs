//! Presentation toggles for the gallery page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Whether floating wishes are rendered. On by default.
    pub show_wishes: bool,
    /// Whether the "our story" modal is open.
    pub show_story: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_wishes: true, show_story: false }
    }
}

impl UiState {
    /// Flip the wishes toggle and return the new value.
    pub fn toggle_wishes(&mut self) -> bool {
        self.show_wishes = !self.show_wishes;
        self.show_wishes
    }

    pub fn open_story(&mut self) {
        self.show_story = true;
    }

    pub fn close_story(&mut self) {
        self.show_story = false;
    }
}
