//! Bridge between Leptos event handlers and the pure dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call [`emit`] with a [`UiEvent`]. The event is applied to the
//! workspace signal in one update, and the returned [`Effect`] (if any) is run
//! here: HTTP calls are spawned on the local executor and report back through
//! another `emit`, focus and navigation go straight to the DOM. Outside the
//! browser every effect is a no-op.

use leptos::prelude::*;

use crate::state::events::{Effect, UiEvent, dispatch};
use crate::state::workspace::WorkspaceState;

/// Apply `event` to the workspace and run the resulting effect.
pub fn emit(workspace: RwSignal<WorkspaceState>, event: UiEvent) {
    let mut effect = None;
    workspace.update(|state| effect = dispatch(state, event));
    if let Some(effect) = effect {
        run_effect(workspace, effect);
    }
}

fn run_effect(workspace: RwSignal<WorkspaceState>, effect: Effect) {
    match effect {
        Effect::SendCrosstab { ticket, request } => {
            #[cfg(feature = "hydrate")]
            {
                let config = workspace.with_untracked(|s| s.config.clone());
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::post_crosstab(&config, &request).await;
                    emit(workspace, UiEvent::CrosstabFinished { ticket, outcome });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (ticket, request);
        }
        Effect::CloseDataset => {
            #[cfg(feature = "hydrate")]
            {
                let config = workspace.with_untracked(|s| s.config.clone());
                leptos::task::spawn_local(async move {
                    match crate::net::api::close_dataset(&config).await {
                        Ok(resp) => emit(workspace, UiEvent::DatasetClosed { message: resp.message }),
                        Err(e) => {
                            leptos::logging::warn!("close failed: {e}");
                            emit(workspace, UiEvent::LifecycleMessage(e.user_message()));
                        }
                    }
                });
            }
        }
        Effect::FocusSelector(axis) => focus_element(axis.list_dom_id()),
        Effect::NavigateExport => {
            let url = workspace.with_untracked(|s| s.config.export_url());
            navigate_to(&url);
        }
    }
}

fn focus_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
