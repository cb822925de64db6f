//! Crosstab page: upload, axis pickers, options, run/export and results.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single page of the client. Layout only; every interaction is an event
//! emitted into the workspace.

#[cfg(test)]
#[path = "crosstab_test.rs"]
mod crosstab_test;

use leptos::prelude::*;

use crate::components::options_panel::OptionsPanel;
use crate::components::results_view::ResultsView;
use crate::components::status_header::StatusHeader;
use crate::components::upload_panel::UploadPanel;
use crate::components::variable_picker::VariablePicker;
use crate::state::events::UiEvent;
use crate::state::selection::Axis;
use crate::state::workspace::WorkspaceState;
use crate::util::dispatch::emit;

/// Run button caption. Requests may overlap, so the button stays enabled.
pub fn run_label(busy: bool) -> &'static str {
    if busy { "Gerando…" } else { "Gerar tabela" }
}

#[component]
pub fn CrosstabPage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let busy = move || workspace.with(WorkspaceState::is_busy);
    let error = move || workspace.with(|w| w.error.clone());
    let export_enabled = move || workspace.with(|w| w.export_enabled);

    view! {
        <div class="crosstab-page">
            <StatusHeader/>
            <UploadPanel/>
            <div class="crosstab-page__axes">
                <VariablePicker axis=Axis::Row/>
                <VariablePicker axis=Axis::Column/>
            </div>
            <OptionsPanel/>
            <div class="crosstab-page__actions">
                <button class="btn btn--primary" on:click=move |_| emit(workspace, UiEvent::RunRequested)>
                    {move || run_label(busy())}
                </button>
                <button
                    class="btn"
                    disabled=move || !export_enabled()
                    on:click=move |_| emit(workspace, UiEvent::ExportRequested)
                >
                    "Exportar Excel"
                </button>
            </div>
            <Show when=move || error().is_some()>
                <p class="crosstab-page__error" role="alert">{move || error().unwrap_or_default()}</p>
            </Show>
            <ResultsView/>
        </div>
    }
}
