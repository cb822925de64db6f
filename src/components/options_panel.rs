//! Statistic checkboxes, non-integer weight mode and weight variable input.

use leptos::prelude::*;

use crate::state::events::UiEvent;
use crate::state::options::{NiwMode, StatOption};
use crate::state::workspace::WorkspaceState;
use crate::util::dispatch::emit;

const WEIGHT_DATALIST_ID: &str = "weightOptions";

/// Request options panel.
#[component]
pub fn OptionsPanel() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let weight = move || workspace.with(|w| w.options.weight.clone());
    let placeholder = move || workspace.with(|w| w.config.weight_placeholder.clone());
    let variable_names = move || workspace.with(|w| w.selection.variable_names());

    let stat_boxes = StatOption::ALL
        .into_iter()
        .map(|option| {
            let checked = move || workspace.with(|w| w.options.is_enabled(option));
            view! {
                <label class="options__check">
                    <input
                        type="checkbox"
                        value=option.wire_name()
                        prop:checked=checked
                        on:change=move |ev| {
                            emit(workspace, UiEvent::StatToggled { option, enabled: event_target_checked(&ev) });
                        }
                    />
                    {option.label()}
                </label>
            }
        })
        .collect_view();

    let niw_radios = NiwMode::ALL
        .into_iter()
        .map(|mode| {
            let checked = move || workspace.with(|w| w.options.niw_mode == mode);
            view! {
                <label class="options__radio">
                    <input
                        type="radio"
                        name="niw_mode"
                        value=mode.wire_name()
                        prop:checked=checked
                        on:change=move |_| emit(workspace, UiEvent::NiwModeChanged(mode))
                    />
                    {mode.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="options">
            <fieldset class="options__group">
                <legend>"Estatísticas"</legend>
                {stat_boxes}
            </fieldset>
            <fieldset class="options__group">
                <legend>"Pesos não inteiros"</legend>
                {niw_radios}
            </fieldset>
            <label class="options__weight">
                "Variável de peso"
                <input
                    type="text"
                    list=WEIGHT_DATALIST_ID
                    placeholder=placeholder
                    prop:value=weight
                    on:input=move |ev| emit(workspace, UiEvent::WeightChanged(event_target_value(&ev)))
                />
            </label>
            <datalist id=WEIGHT_DATALIST_ID>
                {move || {
                    variable_names()
                        .into_iter()
                        .map(|name| view! { <option value=name/> })
                        .collect_view()
                }}
            </datalist>
        </section>
    }
}
