//! Removable chips summarizing one axis' selection.

use leptos::prelude::*;

use crate::state::events::UiEvent;
use crate::state::selection::Axis;
use crate::state::workspace::WorkspaceState;
use crate::util::dispatch::emit;

/// Chip strip for `axis`. Clicking a chip deselects its variable.
#[component]
pub fn ChipList(axis: Axis) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let chips = move || {
        workspace.with(|w| {
            w.selection
                .axis(axis)
                .chips
                .chips()
                .iter()
                .map(|chip| (chip.value.clone(), chip.caption()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="chips" aria-live="polite">
            {move || {
                chips()
                    .into_iter()
                    .map(|(value, caption)| {
                        view! {
                            <button
                                class="chip"
                                title="Remover"
                                on:click=move |_| {
                                    emit(workspace, UiEvent::ChipRemoved { axis, value: value.clone() });
                                }
                            >
                                {caption}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
