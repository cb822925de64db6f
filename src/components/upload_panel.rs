//! Dataset upload and close controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploading sends the chosen `.sav` file to the server and turns the answer
//! into a "loaded" event. Closing goes through the dispatcher, which only asks
//! the server when a dataset is actually open.

#[cfg(test)]
#[path = "upload_panel_test.rs"]
mod upload_panel_test;

use leptos::prelude::*;

use crate::net::types::UploadResponse;
use crate::state::events::UiEvent;
use crate::state::workspace::{LoadedDataset, WorkspaceState};
use crate::util::dispatch::emit;

/// Translate an upload answer into the "loaded" payload.
pub fn loaded_from_upload(resp: UploadResponse) -> LoadedDataset {
    LoadedDataset {
        variables: resp.variables.into_iter().map(|v| v.name).collect(),
        suggested_weight: resp.suggested_weight,
        filename: resp.filename,
        message: resp.message,
    }
}

/// Whether the file picker must be emptied after a status change.
///
/// Only an online → offline transition clears it, so a failed upload keeps
/// the chosen file for a retry.
pub fn should_reset_file_input(was_online: Option<bool>, now_online: bool) -> bool {
    was_online == Some(true) && !now_online
}

/// File picker plus upload/close buttons and the last lifecycle message.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let uploading = RwSignal::new(false);

    let message = move || workspace.with(|w| w.lifecycle_message.clone());
    let online = Memo::new(move |_| workspace.with(|w| w.dataset.is_online()));

    Effect::new(move |was_online: Option<bool>| {
        let now_online = online.get();
        if should_reset_file_input(was_online, now_online) {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input) = file_ref.get_untracked() {
                    input.set_value("");
                }
            }
        }
        now_online
    });

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let file = file_ref.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            let Some(file) = file else {
                emit(workspace, UiEvent::LifecycleMessage(crate::error::MISSING_FILE_MESSAGE.to_owned()));
                return;
            };
            uploading.set(true);
            let config = workspace.with_untracked(|w| w.config.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_dataset(&config, &file).await {
                    Ok(resp) => emit(workspace, UiEvent::DatasetLoaded(loaded_from_upload(resp))),
                    Err(e) => {
                        leptos::logging::warn!("upload failed: {e}");
                        emit(workspace, UiEvent::LifecycleMessage(e.user_message()));
                    }
                }
                uploading.set(false);
            });
        }
    };

    view! {
        <section class="upload">
            <input class="upload__file" type="file" accept=".sav" node_ref=file_ref/>
            <button class="btn btn--primary" disabled=move || uploading.get() on:click=on_upload>
                {move || if uploading.get() { "Enviando…" } else { "Enviar" }}
            </button>
            <button
                class="btn"
                disabled=move || !online.get()
                on:click=move |_| emit(workspace, UiEvent::CloseRequested)
            >
                "Fechar arquivo"
            </button>
            <p class="upload__message">{message}</p>
        </section>
    }
}
