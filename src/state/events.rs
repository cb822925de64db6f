//! Event dispatcher for the crosstab page.
//!
//! ARCHITECTURE
//! ============
//! Every user or network event is a [`UiEvent`]. [`dispatch`] applies it to
//! the [`WorkspaceState`] and returns at most one [`Effect`] for the caller
//! to run (network, focus, navigation). The function itself never touches
//! the browser, so handlers are tested directly against plain state.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::error::CrosstabError;
use crate::net::types::CrosstabRequest;

use super::options::{NiwMode, StatOption};
use super::results::ResultSet;
use super::selection::Axis;
use super::selector::CursorStep;
use super::workspace::{LoadedDataset, RequestTicket, ResponseDisposition, WorkspaceState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    FilterInput { axis: Axis, text: String },
    FilterFocused(Axis),
    /// Confirm key pressed in the filter box.
    FilterConfirmed(Axis),
    OptionClicked { axis: Axis, value: String },
    CursorMoved { axis: Axis, step: CursorStep },
    CursorToggled(Axis),
    ChipRemoved { axis: Axis, value: String },
    SelectVisible(Axis),
    ClearAxis(Axis),
    StatToggled { option: StatOption, enabled: bool },
    NiwModeChanged(NiwMode),
    WeightChanged(String),
    RunRequested,
    CrosstabFinished { ticket: RequestTicket, outcome: Result<ResultSet, CrosstabError> },
    DatasetLoaded(LoadedDataset),
    CloseRequested,
    DatasetClosed { message: String },
    /// Upload/close failure or local upload validation message.
    LifecycleMessage(String),
    ExportRequested,
}

/// Side effect requested by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SendCrosstab { ticket: RequestTicket, request: CrosstabRequest },
    FocusSelector(Axis),
    CloseDataset,
    NavigateExport,
}

/// Apply `event` to `state`, returning the effect to run, if any.
pub fn dispatch(state: &mut WorkspaceState, event: UiEvent) -> Option<Effect> {
    match event {
        UiEvent::FilterInput { axis, text } => {
            state.selection.set_filter(axis, &text);
            None
        }
        UiEvent::FilterFocused(axis) => {
            state.selection.focus_filter(axis);
            None
        }
        UiEvent::FilterConfirmed(axis) => {
            state.selection.confirm_filter(axis);
            Some(Effect::FocusSelector(axis))
        }
        UiEvent::OptionClicked { axis, value } => {
            state.selection.toggle(axis, &value);
            None
        }
        UiEvent::CursorMoved { axis, step } => {
            state.selection.move_cursor(axis, step);
            None
        }
        UiEvent::CursorToggled(axis) => {
            state.selection.toggle_at_cursor(axis);
            None
        }
        UiEvent::ChipRemoved { axis, value } => {
            state.selection.remove_chip(axis, &value);
            None
        }
        UiEvent::SelectVisible(axis) => {
            state.selection.select_visible(axis);
            None
        }
        UiEvent::ClearAxis(axis) => {
            state.selection.clear(axis);
            None
        }
        UiEvent::StatToggled { option, enabled } => {
            state.options.set_enabled(option, enabled);
            None
        }
        UiEvent::NiwModeChanged(mode) => {
            state.options.niw_mode = mode;
            None
        }
        UiEvent::WeightChanged(weight) => {
            state.options.weight = weight;
            None
        }
        UiEvent::RunRequested => run_crosstab(state),
        UiEvent::CrosstabFinished { ticket, outcome } => {
            settle_crosstab(state, ticket, outcome);
            None
        }
        UiEvent::DatasetLoaded(loaded) => {
            leptos::logging::log!("dataset loaded: {} variables", loaded.variables.len());
            state.load_dataset(loaded);
            None
        }
        UiEvent::CloseRequested => state.dataset.is_online().then_some(Effect::CloseDataset),
        UiEvent::DatasetClosed { message } => {
            state.close_dataset(message);
            None
        }
        UiEvent::LifecycleMessage(message) => {
            state.lifecycle_message = message;
            None
        }
        UiEvent::ExportRequested => state.export_enabled.then_some(Effect::NavigateExport),
    }
}

fn run_crosstab(state: &mut WorkspaceState) -> Option<Effect> {
    match state.begin_crosstab() {
        Ok((ticket, request)) => {
            leptos::logging::log!(
                "crosstab request #{}: {} rows x {} cols",
                ticket.seq,
                request.rows.len(),
                request.cols.len()
            );
            Some(Effect::SendCrosstab { ticket, request })
        }
        Err(_) => None,
    }
}

fn settle_crosstab(state: &mut WorkspaceState, ticket: RequestTicket, outcome: Result<ResultSet, CrosstabError>) {
    let detail = outcome.as_ref().err().map(ToString::to_string);
    match state.finish_crosstab(ticket, outcome) {
        ResponseDisposition::Applied => {
            leptos::logging::log!("crosstab response #{} applied ({} tables)", ticket.seq, state.results.len());
        }
        ResponseDisposition::Failed => {
            leptos::logging::warn!("crosstab request #{} failed: {}", ticket.seq, detail.unwrap_or_default());
        }
        ResponseDisposition::Discarded => {
            leptos::logging::log!("crosstab response #{} discarded: dataset changed", ticket.seq);
        }
    }
}
