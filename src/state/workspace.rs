//! Page-wide state: dataset status, both axes, options, rendered results and
//! request bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single state object behind the crosstab page. Components read
//! it through one `RwSignal` and change it only through
//! [`super::events::dispatch`].
//!
//! Request identity is a `(epoch, seq)` ticket. The epoch moves whenever a
//! dataset is loaded or closed, so answers to requests from an earlier
//! session are dropped. Within one epoch every answer is applied in arrival
//! order; the most recent arrival is what stays on screen.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use std::collections::BTreeSet;

use crate::config::ClientConfig;
use crate::error::CrosstabError;
use crate::net::types::CrosstabRequest;

use super::options::RequestOptions;
use super::render::{RenderedTable, render_result_set};
use super::results::ResultSet;
use super::selection::{Axis, SelectionState};

pub const OFFLINE_STATUS: &str = "Aguardando arquivo…";
pub const DEFAULT_FILENAME: &str = "arquivo carregado";

/// Whether a dataset is loaded on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DatasetStatus {
    #[default]
    Offline,
    Online { filename: String },
}

impl DatasetStatus {
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }

    /// Header text, e.g. `Online — dados.sav`.
    #[must_use]
    pub fn caption(&self) -> String {
        match self {
            Self::Offline => OFFLINE_STATUS.to_owned(),
            Self::Online { filename } => format!("Online — {filename}"),
        }
    }
}

/// Payload of the "loaded" lifecycle signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDataset {
    pub variables: Vec<String>,
    pub suggested_weight: Option<String>,
    pub filename: Option<String>,
    pub message: String,
}

/// Identity of one issued crosstab request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket {
    pub epoch: u64,
    pub seq: u64,
}

/// What happened to a response when it arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseDisposition {
    /// Tables replaced, error cleared, export enabled.
    Applied,
    /// Error surface updated; tables untouched.
    Failed,
    /// Belonged to a previous dataset session.
    Discarded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceState {
    pub config: ClientConfig,
    pub dataset: DatasetStatus,
    /// Last upload/close message.
    pub lifecycle_message: String,
    pub selection: SelectionState,
    pub options: RequestOptions,
    pub results: Vec<RenderedTable>,
    pub error: Option<String>,
    pub export_enabled: bool,
    epoch: u64,
    next_seq: u64,
    in_flight: BTreeSet<RequestTicket>,
    last_applied: Option<RequestTicket>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl WorkspaceState {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            dataset: DatasetStatus::Offline,
            lifecycle_message: String::new(),
            selection: SelectionState::default(),
            options: RequestOptions::default(),
            results: Vec::new(),
            error: None,
            export_enabled: false,
            epoch: 0,
            next_seq: 0,
            in_flight: BTreeSet::new(),
            last_applied: None,
        }
    }

    /// True while at least one request of the current session is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<RequestTicket> {
        self.last_applied
    }

    /// Apply the "loaded" signal: fresh axes, no results, new session.
    pub fn load_dataset(&mut self, loaded: LoadedDataset) {
        self.start_new_session();
        self.selection = SelectionState::from_variables(loaded.variables);
        if let Some(weight) = loaded.suggested_weight.filter(|w| !w.trim().is_empty()) {
            self.options.weight = weight;
        }
        let filename = loaded.filename.filter(|f| !f.is_empty()).unwrap_or_else(|| DEFAULT_FILENAME.to_owned());
        self.dataset = DatasetStatus::Online { filename };
        self.lifecycle_message = loaded.message;
    }

    /// Apply the "closed" signal: every selection and result is discarded.
    pub fn close_dataset(&mut self, message: String) {
        self.start_new_session();
        self.selection = SelectionState::default();
        self.dataset = DatasetStatus::Offline;
        self.lifecycle_message = message;
    }

    fn start_new_session(&mut self) {
        self.epoch += 1;
        self.in_flight.clear();
        self.last_applied = None;
        self.results.clear();
        self.error = None;
        self.export_enabled = false;
    }

    /// Validate the selection and issue a ticket for a new request.
    ///
    /// Clears the error surface first; on validation failure it shows the
    /// validation message instead.
    ///
    /// # Errors
    ///
    /// Returns [`CrosstabError::Validation`] when either axis has no selection.
    pub fn begin_crosstab(&mut self) -> Result<(RequestTicket, CrosstabRequest), CrosstabError> {
        self.error = None;
        let request = self.build_request().inspect_err(|e| self.error = Some(e.user_message()))?;
        self.next_seq += 1;
        let ticket = RequestTicket { epoch: self.epoch, seq: self.next_seq };
        self.in_flight.insert(ticket);
        Ok((ticket, request))
    }

    /// Snapshot the current selection and options as a request body.
    ///
    /// # Errors
    ///
    /// Returns [`CrosstabError::Validation`] when either axis has no selection.
    pub fn build_request(&self) -> Result<CrosstabRequest, CrosstabError> {
        let rows = self.selection.selected_values(Axis::Row);
        let cols = self.selection.selected_values(Axis::Column);
        if rows.is_empty() || cols.is_empty() {
            return Err(CrosstabError::Validation);
        }
        Ok(CrosstabRequest {
            rows,
            cols,
            weight: self.options.effective_weight(&self.config.weight_placeholder),
            options: self.options.wire_names(),
            niw_mode: self.options.niw_mode.wire_name().to_owned(),
        })
    }

    /// Settle a response. Exactly one of apply / fail / discard happens.
    pub fn finish_crosstab(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ResultSet, CrosstabError>,
    ) -> ResponseDisposition {
        if ticket.epoch != self.epoch {
            return ResponseDisposition::Discarded;
        }
        self.in_flight.remove(&ticket);
        match outcome {
            Ok(set) => {
                self.results = render_result_set(&set, &self.config.residual_prefix);
                self.error = None;
                self.export_enabled = true;
                self.last_applied = Some(ticket);
                ResponseDisposition::Applied
            }
            Err(err) => {
                self.error = Some(err.user_message());
                ResponseDisposition::Failed
            }
        }
    }
}
