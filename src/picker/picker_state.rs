use crate::choice::ChoiceSet;

/// How a picking session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user applied their selection; pairs are in choice order.
    Applied(Vec<(String, bool)>),
    /// The user backed out; nothing is reported.
    Cancelled,
}

/// Drives the checklist: a backing `ChoiceSet`, the cursor row, and the
/// scroll window the render keeps the cursor inside.
pub struct PickerState {
    choices: ChoiceSet<String>,
    cursor: usize,
    scroll_offset: usize,
    outcome: Option<SessionOutcome>,
}

impl PickerState {
    pub fn new(choices: ChoiceSet<String>) -> Self {
        Self {
            choices,
            cursor: 0,
            scroll_offset: 0,
            outcome: None,
        }
    }

    /// Every choice with its current state, in display order.
    pub fn rows(&self) -> Vec<(String, bool)> {
        self.choices.snapshot()
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    pub fn selected_count(&self) -> usize {
        self.choices
            .snapshot()
            .iter()
            .filter(|(_, selected)| *selected)
            .count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Moves the cursor down one row, wrapping at the bottom.
    pub fn select_next(&mut self) {
        let count = self.choices.len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    /// Moves the cursor up one row, wrapping at the top.
    pub fn select_previous(&mut self) {
        let count = self.choices.len();
        if count > 0 {
            self.cursor = if self.cursor == 0 {
                count - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Keeps the cursor row inside a viewport of `height` rows by sliding
    /// the scroll offset. Called by the render before slicing rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Flips the choice under the cursor. A toggle the backing store
    /// refuses is dropped so key handling stays best-effort; the store's
    /// own API still reports such errors to direct callers.
    pub fn toggle_at_cursor(&mut self) {
        let Some(choice) = self.choices.choices().get(self.cursor).cloned() else {
            return;
        };

        match self.choices.state_of(&choice) {
            Ok(true) => {
                let _ = self.choices.mark_unselected(&choice);
            }
            Ok(false) => {
                let _ = self.choices.mark_selected(&choice);
            }
            Err(_) => {}
        }
    }

    /// Unselects everything.
    pub fn reset(&mut self) {
        self.choices.reset();
    }

    /// Ends the session, capturing the current snapshot as the result.
    pub fn apply(&mut self) {
        self.outcome = Some(SessionOutcome::Applied(self.choices.snapshot()));
    }

    /// Ends the session without a result.
    pub fn cancel(&mut self) {
        self.outcome = Some(SessionOutcome::Cancelled);
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }
}
