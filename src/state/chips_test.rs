use super::*;

fn selector_with(selected: &[&str]) -> AxisSelector {
    let mut sel = AxisSelector::new(vec!["A".to_owned(), "B".to_owned(), "C".to_owned()]);
    for label in selected {
        sel.toggle(label);
    }
    sel
}

#[test]
fn new_summary_is_empty() {
    let summary = ChipSummary::new(Axis::Row);
    assert!(summary.chips().is_empty());
}

#[test]
fn render_mirrors_selection_in_display_order() {
    let sel = selector_with(&["C", "A"]);
    let mut summary = ChipSummary::new(Axis::Column);
    summary.render(&sel);
    assert_eq!(summary.values(), vec!["A", "C"]);
    assert!(summary.chips().iter().all(|c| c.axis == Axis::Column));
}

#[test]
fn render_is_idempotent() {
    let sel = selector_with(&["B"]);
    let mut summary = ChipSummary::new(Axis::Row);
    summary.render(&sel);
    let first = summary.clone();
    summary.render(&sel);
    assert_eq!(summary, first);
}

#[test]
fn render_drops_deselected_values() {
    let mut sel = selector_with(&["A", "B"]);
    let mut summary = ChipSummary::new(Axis::Row);
    summary.render(&sel);
    sel.toggle("A");
    summary.render(&sel);
    assert_eq!(summary.values(), vec!["B"]);
}

#[test]
fn chip_caption_appends_remove_mark() {
    let chip = Chip { axis: Axis::Row, value: "Idade".to_owned() };
    assert_eq!(chip.caption(), "Idade ×");
}
