//! Page header with dataset status and the theme toggle.

use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;
use crate::util::theme::{self, Theme};

/// Header bar: status dot, status caption, theme button.
#[component]
pub fn StatusHeader() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let current_theme = expect_context::<RwSignal<Theme>>();

    let online = move || workspace.with(|w| w.dataset.is_online());
    let caption = move || workspace.with(|w| w.dataset.caption());

    let on_toggle_theme = move |_| {
        let next = theme::toggle(current_theme.get_untracked());
        current_theme.set(next);
    };

    view! {
        <header class="status-header">
            <h1 class="status-header__title">"Tabulação cruzada"</h1>
            <span class="status-header__dot" class:status-header__dot--online=online></span>
            <span class="status-header__caption" id="status">{caption}</span>
            <button
                class="btn status-header__theme"
                title="Alternar tema"
                on:click=on_toggle_theme
            >
                {move || current_theme.get().toggle_icon()}
            </button>
        </header>
    }
}
