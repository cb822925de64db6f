//! Filterable multi-select list for one axis.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter input narrows the visible options without touching selection.
//! Options are toggled with a plain click (no modifier keys). The list element
//! owns a keyboard cursor: arrow keys move it, Space/Enter toggles the option
//! under it. Enter in the filter input moves focus to the list.

#[cfg(test)]
#[path = "variable_picker_test.rs"]
mod variable_picker_test;

use leptos::prelude::*;

use crate::components::chip_list::ChipList;
use crate::state::events::UiEvent;
use crate::state::selection::Axis;
use crate::state::selector::CursorStep;
use crate::state::workspace::WorkspaceState;
use crate::util::dispatch::emit;

/// Map a key pressed on the option list to an event.
pub fn list_key_event(axis: Axis, key: &str) -> Option<UiEvent> {
    match key {
        "ArrowUp" => Some(UiEvent::CursorMoved { axis, step: CursorStep::Up }),
        "ArrowDown" => Some(UiEvent::CursorMoved { axis, step: CursorStep::Down }),
        " " | "Enter" => Some(UiEvent::CursorToggled(axis)),
        _ => None,
    }
}

fn filter_dom_id(axis: Axis) -> &'static str {
    match axis {
        Axis::Row => "rowFilter",
        Axis::Column => "colFilter",
    }
}

/// Filter input, option list, bulk buttons and chip summary for `axis`.
#[component]
pub fn VariablePicker(axis: Axis) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let filter = move || workspace.with(|w| w.selection.axis(axis).selector.filter().to_owned());
    let is_empty = move || workspace.with(|w| w.selection.axis(axis).selector.is_empty());

    let options = move || {
        workspace.with(|w| {
            let selector = &w.selection.axis(axis).selector;
            let cursor = selector.cursor();
            selector
                .options()
                .iter()
                .enumerate()
                .map(|(idx, opt)| (opt.label.clone(), opt.visible, opt.selected, cursor == Some(idx)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="picker">
            <h2 class="picker__title">{axis.title()}</h2>
            <input
                class="picker__filter"
                type="search"
                id=filter_dom_id(axis)
                placeholder="Filtrar variáveis…"
                prop:value=filter
                on:input=move |ev| emit(workspace, UiEvent::FilterInput { axis, text: event_target_value(&ev) })
                on:focus=move |_| emit(workspace, UiEvent::FilterFocused(axis))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        emit(workspace, UiEvent::FilterConfirmed(axis));
                    }
                }
            />
            <ul
                class="picker__list"
                id=axis.list_dom_id()
                tabindex="0"
                role="listbox"
                aria-multiselectable="true"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if let Some(event) = list_key_event(axis, &ev.key()) {
                        ev.prevent_default();
                        emit(workspace, event);
                    }
                }
            >
                <Show when=move || !is_empty()>
                    {move || {
                        options()
                            .into_iter()
                            .map(|(label, visible, selected, under_cursor)| {
                                let value = label.clone();
                                view! {
                                    <li
                                        class="picker__option"
                                        class:picker__option--selected=selected
                                        class:picker__option--cursor=under_cursor
                                        role="option"
                                        aria-selected=if selected { "true" } else { "false" }
                                        style:display=if visible { "" } else { "none" }
                                        on:mousedown=move |ev| ev.prevent_default()
                                        on:click=move |_| {
                                            emit(workspace, UiEvent::OptionClicked { axis, value: value.clone() });
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </ul>
            <div class="picker__actions">
                <button class="btn" on:click=move |_| emit(workspace, UiEvent::SelectVisible(axis))>
                    "Selecionar visíveis"
                </button>
                <button class="btn" on:click=move |_| emit(workspace, UiEvent::ClearAxis(axis))>
                    "Limpar"
                </button>
            </div>
            <ChipList axis=axis/>
        </section>
    }
}
