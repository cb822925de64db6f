//! Removable-tag summary of one axis's selection.
//!
//! DESIGN
//! ======
//! Chips are a projection, not a source of truth. `render` always rebuilds
//! the whole list from the selector, so a chip can never outlive the
//! selection it stands for.

#[cfg(test)]
#[path = "chips_test.rs"]
mod chips_test;

use super::selection::Axis;
use super::selector::AxisSelector;

/// One selected variable shown as a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chip {
    pub axis: Axis,
    pub value: String,
}

impl Chip {
    /// Tag text, e.g. `Idade ×`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} ×", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipSummary {
    axis: Axis,
    chips: Vec<Chip>,
}

impl ChipSummary {
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis, chips: Vec::new() }
    }

    #[must_use]
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Chip values in display order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.chips.iter().map(|c| c.value.as_str()).collect()
    }

    /// Rebuild every chip from the selector's current selection. Idempotent.
    pub fn render(&mut self, selector: &AxisSelector) {
        self.chips = selector
            .selected_values()
            .into_iter()
            .map(|value| Chip { axis: self.axis, value })
            .collect();
    }
}
