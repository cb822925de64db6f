use super::*;
use crate::error::{CROSSTAB_FALLBACK_MESSAGE, UPLOAD_FALLBACK_MESSAGE};
use crate::state::results::CellContent;

fn decode(ok: bool, body: &str) -> Result<ResultSet, CrosstabError> {
    decode_crosstab_response(ok, body, "Tabela", CROSSTAB_FALLBACK_MESSAGE)
}

// =============================================================
// CrosstabRequest
// =============================================================

#[test]
fn crosstab_request_serializes_expected_fields() {
    let req = CrosstabRequest {
        rows: vec!["sexo".to_owned()],
        cols: vec!["voto".to_owned(), "regiao".to_owned()],
        weight: "peso".to_owned(),
        options: vec!["observed".to_owned()],
        niw_mode: "round_cell".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "rows": ["sexo"],
            "cols": ["voto", "regiao"],
            "weight": "peso",
            "options": ["observed"],
            "niw_mode": "round_cell"
        })
    );
}

// =============================================================
// Crosstab responses
// =============================================================

#[test]
fn single_table_is_keyed_with_default_key() {
    let set = decode(true, r#"{"table": {"columns": ["c"], "index": ["r"], "data": [["1"]]}}"#).unwrap();
    assert_eq!(set.keys(), vec!["Tabela"]);
}

#[test]
fn tables_keep_document_order() {
    let body = r#"{"tables": {
        "Z": {"title": "Zeta", "columns": ["c"], "index": ["r"], "data": [["1"]]},
        "A": {"columns": ["c"], "index": ["r"], "data": [[["Observed: 2"]]]}
    }}"#;
    let set = decode(true, body).unwrap();
    assert_eq!(set.keys(), vec!["Z", "A"]);
    let (_, a) = set.iter().nth(1).unwrap();
    assert_eq!(a.data[0][0], CellContent::Lines(vec!["Observed: 2".to_owned()]));
}

#[test]
fn failure_status_uses_server_error_message() {
    let err = decode(false, r#"{"error": "Nenhum arquivo carregado."}"#).unwrap_err();
    assert_eq!(err, CrosstabError::Request { message: "Nenhum arquivo carregado.".to_owned() });
}

#[test]
fn failure_status_with_unreadable_body_uses_fallback() {
    let err = decode(false, "<html>502</html>").unwrap_err();
    assert_eq!(err.user_message(), CROSSTAB_FALLBACK_MESSAGE);
}

#[test]
fn success_without_tables_is_malformed() {
    let err = decode(true, r#"{"message": "ok"}"#).unwrap_err();
    assert!(matches!(err, CrosstabError::MalformedResponse(_)));
}

#[test]
fn success_with_non_json_body_is_malformed() {
    let err = decode(true, "not json").unwrap_err();
    assert!(matches!(err, CrosstabError::MalformedResponse(_)));
}

#[test]
fn success_with_mismatched_mask_is_malformed() {
    let body = r#"{"table": {"columns": ["a", "b"], "index": ["r"], "data": [["1", "2"]], "flagMask": [[true]]}}"#;
    let err = decode(true, body).unwrap_err();
    assert!(matches!(err, CrosstabError::MalformedResponse(_)));
}

#[test]
fn success_status_carrying_only_error_is_request_error() {
    let err = decode(true, r#"{"error": "Falha ao gerar a tabela: boom"}"#).unwrap_err();
    assert_eq!(err.user_message(), "Falha ao gerar a tabela: boom");
}

// =============================================================
// Upload / close bodies
// =============================================================

#[test]
fn upload_response_reads_variables_and_suggestion() {
    let body = r#"{
        "message": "Arquivo carregado: dados.sav",
        "variables": [{"name": "sexo", "dtype": "float64"}, {"name": "peso"}],
        "suggested_weight": "peso",
        "filename": "dados.sav"
    }"#;
    let resp: UploadResponse = decode_json(true, body, UPLOAD_FALLBACK_MESSAGE).unwrap();
    assert_eq!(resp.variables.len(), 2);
    assert_eq!(resp.variables[1].dtype, None);
    assert_eq!(resp.suggested_weight.as_deref(), Some("peso"));
    assert_eq!(resp.filename.as_deref(), Some("dados.sav"));
}

#[test]
fn upload_failure_reports_server_message() {
    let err = decode_json::<UploadResponse>(false, r#"{"error": "Envie um arquivo .sav"}"#, UPLOAD_FALLBACK_MESSAGE)
        .unwrap_err();
    assert_eq!(err.user_message(), "Envie um arquivo .sav");
}

#[test]
fn close_response_defaults_missing_message() {
    let resp: MessageResponse = decode_json(true, "{}", "x").unwrap();
    assert_eq!(resp.message, "");
}
