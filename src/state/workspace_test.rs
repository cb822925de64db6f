use super::*;
use crate::error::VALIDATION_MESSAGE;
use crate::state::results::{CellContent, TableResult};

fn loaded(names: &[&str]) -> LoadedDataset {
    LoadedDataset {
        variables: names.iter().map(|s| (*s).to_owned()).collect(),
        suggested_weight: Some("peso".to_owned()),
        filename: Some("dados.sav".to_owned()),
        message: "Arquivo carregado: dados.sav".to_owned(),
    }
}

fn ready_workspace() -> WorkspaceState {
    let mut ws = WorkspaceState::default();
    ws.load_dataset(loaded(&["sexo", "voto", "peso"]));
    ws.selection.toggle(Axis::Row, "sexo");
    ws.selection.toggle(Axis::Column, "voto");
    ws
}

fn result_titled(title: &str) -> ResultSet {
    ResultSet::single(
        "Tabela",
        TableResult {
            title: Some(title.to_owned()),
            columns: vec!["c".to_owned()],
            index: vec!["r".to_owned()],
            data: vec![vec![CellContent::Text("1".to_owned())]],
            flag_mask: None,
        },
    )
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_workspace_is_offline_and_idle() {
    let ws = WorkspaceState::default();
    assert_eq!(ws.dataset, DatasetStatus::Offline);
    assert_eq!(ws.dataset.caption(), OFFLINE_STATUS);
    assert!(!ws.is_busy());
    assert!(!ws.export_enabled);
}

#[test]
fn load_dataset_populates_axes_and_weight() {
    let mut ws = WorkspaceState::default();
    ws.load_dataset(loaded(&["voto", "Sexo"]));
    assert_eq!(ws.selection.variable_names(), vec!["Sexo".to_owned(), "voto".to_owned()]);
    assert_eq!(ws.options.weight, "peso");
    assert_eq!(ws.dataset.caption(), "Online — dados.sav");
    assert_eq!(ws.lifecycle_message, "Arquivo carregado: dados.sav");
}

#[test]
fn load_dataset_without_filename_uses_default_caption() {
    let mut ws = WorkspaceState::default();
    let mut payload = loaded(&["a"]);
    payload.filename = None;
    payload.suggested_weight = None;
    ws.options.weight = "fator".to_owned();
    ws.load_dataset(payload);
    assert_eq!(ws.dataset.caption(), "Online — arquivo carregado");
    assert_eq!(ws.options.weight, "fator");
}

#[test]
fn close_dataset_discards_selection_and_results() {
    let mut ws = ready_workspace();
    let (ticket, _) = ws.begin_crosstab().unwrap();
    ws.finish_crosstab(ticket, Ok(result_titled("t")));
    ws.close_dataset("Arquivo fechado e memória limpa.".to_owned());
    assert!(ws.selection.variable_names().is_empty());
    assert!(ws.results.is_empty());
    assert!(!ws.export_enabled);
    assert!(!ws.dataset.is_online());
}

// =============================================================
// Request pipeline
// =============================================================

#[test]
fn empty_row_selection_fails_validation_without_ticket() {
    let mut ws = WorkspaceState::default();
    ws.load_dataset(loaded(&["sexo", "voto"]));
    ws.selection.toggle(Axis::Column, "voto");
    assert_eq!(ws.begin_crosstab().unwrap_err(), CrosstabError::Validation);
    assert_eq!(ws.error.as_deref(), Some(VALIDATION_MESSAGE));
    assert!(!ws.is_busy());
}

#[test]
fn begin_crosstab_snapshots_selection_and_options() {
    let mut ws = ready_workspace();
    ws.options.weight = String::new();
    let (ticket, request) = ws.begin_crosstab().unwrap();
    assert_eq!(ticket.seq, 1);
    assert_eq!(request.rows, vec!["sexo".to_owned()]);
    assert_eq!(request.cols, vec!["voto".to_owned()]);
    assert_eq!(request.weight, "peso");
    assert_eq!(request.options, vec!["observed", "col_pct", "adj_std_resid"]);
    assert_eq!(request.niw_mode, "round_cell");
    assert!(ws.is_busy());
}

#[test]
fn begin_crosstab_clears_previous_error() {
    let mut ws = ready_workspace();
    ws.error = Some("old".to_owned());
    ws.begin_crosstab().unwrap();
    assert!(ws.error.is_none());
}

#[test]
fn success_replaces_results_and_enables_export() {
    let mut ws = ready_workspace();
    let (ticket, _) = ws.begin_crosstab().unwrap();
    assert_eq!(ws.finish_crosstab(ticket, Ok(result_titled("Sexo × Voto"))), ResponseDisposition::Applied);
    assert_eq!(ws.results.len(), 1);
    assert_eq!(ws.results[0].title, "Sexo × Voto");
    assert!(ws.export_enabled);
    assert!(!ws.is_busy());
    assert_eq!(ws.last_applied(), Some(ticket));
}

#[test]
fn failure_keeps_results_and_export_state() {
    let mut ws = ready_workspace();
    let (first, _) = ws.begin_crosstab().unwrap();
    ws.finish_crosstab(first, Ok(result_titled("kept")));
    let (second, _) = ws.begin_crosstab().unwrap();
    let disposition = ws.finish_crosstab(second, Err(CrosstabError::request(None, "Erro ao gerar tabela.")));
    assert_eq!(disposition, ResponseDisposition::Failed);
    assert_eq!(ws.results[0].title, "kept");
    assert!(ws.export_enabled);
    assert_eq!(ws.error.as_deref(), Some("Erro ao gerar tabela."));
}

#[test]
fn failure_before_any_success_leaves_export_disabled() {
    let mut ws = ready_workspace();
    let (ticket, _) = ws.begin_crosstab().unwrap();
    ws.finish_crosstab(ticket, Err(CrosstabError::MalformedResponse("x".to_owned())));
    assert!(!ws.export_enabled);
    assert!(ws.results.is_empty());
}

#[test]
fn overlapping_requests_most_recent_arrival_wins() {
    let mut ws = ready_workspace();
    let (first, _) = ws.begin_crosstab().unwrap();
    ws.selection.toggle(Axis::Row, "peso");
    let (second, _) = ws.begin_crosstab().unwrap();

    assert_eq!(ws.finish_crosstab(second, Ok(result_titled("request 2"))), ResponseDisposition::Applied);
    assert!(ws.is_busy());
    assert_eq!(ws.finish_crosstab(first, Ok(result_titled("request 1"))), ResponseDisposition::Applied);

    assert_eq!(ws.results[0].title, "request 1");
    assert_eq!(ws.last_applied(), Some(first));
    assert!(!ws.is_busy());
}

#[test]
fn responses_from_previous_session_are_discarded() {
    let mut ws = ready_workspace();
    let (ticket, _) = ws.begin_crosstab().unwrap();
    ws.load_dataset(loaded(&["a", "b"]));
    assert_eq!(ws.finish_crosstab(ticket, Ok(result_titled("stale"))), ResponseDisposition::Discarded);
    assert!(ws.results.is_empty());
    assert!(!ws.export_enabled);
}
