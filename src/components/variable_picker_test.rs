use super::*;

#[test]
fn arrow_keys_move_cursor() {
    assert_eq!(
        list_key_event(Axis::Row, "ArrowDown"),
        Some(UiEvent::CursorMoved { axis: Axis::Row, step: CursorStep::Down })
    );
    assert_eq!(
        list_key_event(Axis::Column, "ArrowUp"),
        Some(UiEvent::CursorMoved { axis: Axis::Column, step: CursorStep::Up })
    );
}

#[test]
fn space_and_enter_toggle_cursor_option() {
    assert_eq!(list_key_event(Axis::Row, " "), Some(UiEvent::CursorToggled(Axis::Row)));
    assert_eq!(list_key_event(Axis::Row, "Enter"), Some(UiEvent::CursorToggled(Axis::Row)));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(list_key_event(Axis::Row, "a"), None);
    assert_eq!(list_key_event(Axis::Row, "Tab"), None);
}

#[test]
fn filter_ids_differ_per_axis() {
    assert_ne!(filter_dom_id(Axis::Row), filter_dom_id(Axis::Column));
}
