//! Row/column selection coordinator.
//!
//! DESIGN
//! ======
//! Each axis owns a selector and its chip summary. Every mutator that can
//! change selection re-renders that axis's chips before returning, so any
//! read after a mutation sees chips and selector in agreement.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

#[cfg(not(feature = "hydrate"))]
use std::cmp::Ordering;

use super::chips::ChipSummary;
use super::selector::{AxisSelector, CursorStep};

/// One of the two cross-tabulation dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// DOM id of the axis's option list; the focus handoff targets it.
    #[must_use]
    pub fn list_dom_id(self) -> &'static str {
        match self {
            Self::Row => "rowSelect",
            Self::Column => "colSelect",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Row => "Linhas",
            Self::Column => "Colunas",
        }
    }
}

/// Selector + chip summary pair for a single axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisState {
    pub selector: AxisSelector,
    pub chips: ChipSummary,
}

impl AxisState {
    fn new(axis: Axis, labels: Vec<String>) -> Self {
        Self { selector: AxisSelector::new(labels), chips: ChipSummary::new(axis) }
    }

    fn rerender(&mut self) {
        self.chips.render(&self.selector);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    rows: AxisState,
    cols: AxisState,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { rows: AxisState::new(Axis::Row, Vec::new()), cols: AxisState::new(Axis::Column, Vec::new()) }
    }
}

impl SelectionState {
    /// Populate both axes with the same variable list, sorted for display.
    /// Filters, selection and chips start fresh.
    #[must_use]
    pub fn from_variables(mut names: Vec<String>) -> Self {
        sort_variable_names(&mut names);
        names.dedup();
        Self { rows: AxisState::new(Axis::Row, names.clone()), cols: AxisState::new(Axis::Column, names) }
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        }
    }

    /// Selected variable names for `axis`, in display order.
    #[must_use]
    pub fn selected_values(&self, axis: Axis) -> Vec<String> {
        self.axis(axis).selector.selected_values()
    }

    pub fn set_filter(&mut self, axis: Axis, raw: &str) {
        self.axis_mut(axis).selector.set_filter(raw);
    }

    pub fn focus_filter(&mut self, axis: Axis) {
        self.axis_mut(axis).selector.focus_filter();
    }

    pub fn confirm_filter(&mut self, axis: Axis) {
        self.axis_mut(axis).selector.confirm_filter();
    }

    /// Direct click on an option in the list.
    pub fn toggle(&mut self, axis: Axis, value: &str) {
        let state = self.axis_mut(axis);
        state.selector.toggle(value);
        state.selector.focus_option(value);
        state.rerender();
    }

    pub fn move_cursor(&mut self, axis: Axis, step: CursorStep) {
        self.axis_mut(axis).selector.move_cursor(step);
    }

    /// Keyboard toggle of the option under the cursor.
    pub fn toggle_at_cursor(&mut self, axis: Axis) {
        let state = self.axis_mut(axis);
        if state.selector.toggle_at_cursor().is_some() {
            state.rerender();
        }
    }

    /// Chip remove action: deselect every option matching `value`.
    pub fn remove_chip(&mut self, axis: Axis, value: &str) {
        let state = self.axis_mut(axis);
        state.selector.set_selected(value, false);
        state.rerender();
    }

    pub fn select_visible(&mut self, axis: Axis) {
        let state = self.axis_mut(axis);
        state.selector.select_visible();
        state.rerender();
    }

    pub fn clear(&mut self, axis: Axis) {
        let state = self.axis_mut(axis);
        state.selector.clear();
        state.rerender();
    }

    /// Re-derive chips for `axis` from its selector.
    pub fn render_chips(&mut self, axis: Axis) {
        self.axis_mut(axis).rerender();
    }

    /// Names shared by both axes (the loaded variable list).
    #[must_use]
    pub fn variable_names(&self) -> Vec<String> {
        self.rows.selector.options().iter().map(|o| o.label.clone()).collect()
    }
}

/// Locale the browser collator sorts variable names in.
pub const COLLATION_LOCALE: &str = "pt-BR";

/// Sort names in `pt-BR` collation order.
///
/// In the browser this is `String.prototype.localeCompare`. Natively a
/// three-level key stands in for it: base letters first (accents and case
/// ignored, punctuation before digits before letters), then accents, then
/// case with lowercase first.
pub fn sort_variable_names(names: &mut [String]) {
    #[cfg(feature = "hydrate")]
    {
        let locales = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(COLLATION_LOCALE));
        let options = js_sys::Object::new();
        names.sort_by(|a, b| {
            js_sys::JsString::from(a.as_str())
                .locale_compare(b, &locales, &options)
                .cmp(&0)
                .then_with(|| a.cmp(b))
        });
    }
    #[cfg(not(feature = "hydrate"))]
    names.sort_by(|a, b| compare_names(a, b));
}

#[cfg(not(feature = "hydrate"))]
fn compare_names(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (CollationKey::new(a), CollationKey::new(b));
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.secondary.cmp(&kb.secondary))
        .then_with(|| ka.tertiary.cmp(&kb.tertiary))
        .then_with(|| a.cmp(b))
}

#[cfg(not(feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
struct CollationKey {
    /// `(class, base char)` per character.
    primary: Vec<(u8, char)>,
    /// Lowercased text with accents kept as combining marks.
    secondary: Vec<char>,
    /// Uppercase flag per base character.
    tertiary: Vec<bool>,
}

#[cfg(not(feature = "hydrate"))]
impl CollationKey {
    fn new(name: &str) -> Self {
        use unicode_normalization::UnicodeNormalization;
        use unicode_normalization::char::is_combining_mark;

        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        let mut tertiary = Vec::new();
        for c in name.nfd() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            secondary.push(lower);
            if is_combining_mark(c) {
                continue;
            }
            primary.push((char_class(c), lower));
            tertiary.push(c.is_uppercase());
        }
        Self { primary, secondary, tertiary }
    }
}

/// Punctuation and symbols, then digits, then letters.
#[cfg(not(feature = "hydrate"))]
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}
