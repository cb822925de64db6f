//! Filterable multi-choice list for one axis.
//!
//! DESIGN
//! ======
//! Visibility and selection are stored side by side but never derived from
//! each other: a filter keystroke only touches `visible`, and only the
//! explicit mutators below touch `selected`. The keyboard cursor is the one
//! piece of state that must follow visibility, so every filter change
//! re-checks it.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

/// One entry in the list. Value and label are the variable name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub label: String,
    pub visible: bool,
    pub selected: bool,
}

impl SelectorOption {
    fn new(label: String) -> Self {
        Self { label, visible: true, selected: false }
    }
}

/// Which part of the selector owns keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectorFocus {
    #[default]
    None,
    Filter,
    List,
}

/// Cursor movement within the visible options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStep {
    Up,
    Down,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisSelector {
    options: Vec<SelectorOption>,
    filter: String,
    cursor: Option<usize>,
    focus: SelectorFocus,
}

impl AxisSelector {
    /// Build a selector over `labels`, kept in the given order.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self { options: labels.into_iter().map(SelectorOption::new).collect(), ..Self::default() }
    }

    #[must_use]
    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Label under the keyboard cursor, if any.
    #[must_use]
    pub fn cursor_label(&self) -> Option<&str> {
        self.cursor.and_then(|i| self.options.get(i)).map(|o| o.label.as_str())
    }

    #[must_use]
    pub fn focus(&self) -> SelectorFocus {
        self.focus
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Recompute visibility from `raw`. Empty text shows everything.
    ///
    /// Clears the cursor when it lands on a hidden option.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = raw.to_owned();
        let needle = raw.to_lowercase();
        for option in &mut self.options {
            option.visible = needle.is_empty() || option.label.to_lowercase().contains(&needle);
        }
        if self.cursor.is_some_and(|i| !self.options[i].visible) {
            self.cursor = None;
        }
    }

    #[must_use]
    pub fn is_visible(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label && o.visible)
    }

    #[must_use]
    pub fn visible_labels(&self) -> Vec<&str> {
        self.options.iter().filter(|o| o.visible).map(|o| o.label.as_str()).collect()
    }

    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label && o.selected)
    }

    /// Selected labels in display order.
    #[must_use]
    pub fn selected_values(&self) -> Vec<String> {
        self.options.iter().filter(|o| o.selected).map(|o| o.label.clone()).collect()
    }

    /// Flip one option. Returns `false` when no option carries `label`.
    pub fn toggle(&mut self, label: &str) -> bool {
        let mut found = false;
        for option in self.options.iter_mut().filter(|o| o.label == label) {
            option.selected = !option.selected;
            found = true;
        }
        found
    }

    /// Set membership of every option carrying `label`.
    pub fn set_selected(&mut self, label: &str, selected: bool) -> bool {
        let mut found = false;
        for option in self.options.iter_mut().filter(|o| o.label == label) {
            option.selected = selected;
            found = true;
        }
        found
    }

    /// Mark every currently visible option as selected. Hidden ones are untouched.
    pub fn select_visible(&mut self) {
        for option in self.options.iter_mut().filter(|o| o.visible) {
            option.selected = true;
        }
    }

    /// Deselect everything regardless of visibility.
    pub fn clear(&mut self) {
        for option in &mut self.options {
            option.selected = false;
        }
    }

    pub fn focus_filter(&mut self) {
        self.focus = SelectorFocus::Filter;
    }

    pub fn blur(&mut self) {
        self.focus = SelectorFocus::None;
    }

    /// Confirm key in the filter box hands focus to the list.
    pub fn confirm_filter(&mut self) {
        self.focus = SelectorFocus::List;
    }

    /// Put the cursor on `label` if it is visible. Returns whether it moved.
    pub fn focus_option(&mut self, label: &str) -> bool {
        match self.options.iter().position(|o| o.label == label && o.visible) {
            Some(index) => {
                self.cursor = Some(index);
                self.focus = SelectorFocus::List;
                true
            }
            None => false,
        }
    }

    /// Move the cursor to the next/previous visible option, stopping at the ends.
    pub fn move_cursor(&mut self, step: CursorStep) {
        let visible: Vec<usize> = (0..self.options.len()).filter(|&i| self.options[i].visible).collect();
        if visible.is_empty() {
            self.cursor = None;
            return;
        }
        let position = self.cursor.and_then(|c| visible.iter().position(|&i| i == c));
        let next = match (position, step) {
            (None, CursorStep::Down) => 0,
            (None, CursorStep::Up) => visible.len() - 1,
            (Some(p), CursorStep::Down) => (p + 1).min(visible.len() - 1),
            (Some(p), CursorStep::Up) => p.saturating_sub(1),
        };
        self.cursor = Some(visible[next]);
        self.focus = SelectorFocus::List;
    }

    /// Toggle the option under the cursor. Returns the label that changed.
    pub fn toggle_at_cursor(&mut self) -> Option<String> {
        let index = self.cursor?;
        let option = self.options.get_mut(index)?;
        option.selected = !option.selected;
        Some(option.label.clone())
    }
}
