use super::*;
use crate::net::types::VariableInfo;

// =============================================================
// loaded_from_upload
// =============================================================

#[test]
fn loaded_from_upload_keeps_variable_names_in_server_order() {
    let resp = UploadResponse {
        message: "Arquivo carregado.".to_owned(),
        variables: vec![
            VariableInfo { name: "sexo".to_owned(), dtype: Some("float64".to_owned()) },
            VariableInfo { name: "Idade".to_owned(), dtype: None },
        ],
        suggested_weight: Some("peso".to_owned()),
        filename: Some("dados.sav".to_owned()),
    };

    let loaded = loaded_from_upload(resp);
    assert_eq!(loaded.variables, vec!["sexo".to_owned(), "Idade".to_owned()]);
    assert_eq!(loaded.suggested_weight.as_deref(), Some("peso"));
    assert_eq!(loaded.filename.as_deref(), Some("dados.sav"));
    assert_eq!(loaded.message, "Arquivo carregado.");
}

#[test]
fn loaded_from_upload_passes_missing_fields_through() {
    let resp = UploadResponse { message: String::new(), variables: Vec::new(), suggested_weight: None, filename: None };

    let loaded = loaded_from_upload(resp);
    assert!(loaded.variables.is_empty());
    assert_eq!(loaded.suggested_weight, None);
    assert_eq!(loaded.filename, None);
}

// =============================================================
// should_reset_file_input
// =============================================================

#[test]
fn file_input_resets_when_dataset_closes() {
    assert!(should_reset_file_input(Some(true), false));
}

#[test]
fn file_input_kept_on_first_run_and_while_offline() {
    assert!(!should_reset_file_input(None, false));
    assert!(!should_reset_file_input(Some(false), false));
}

#[test]
fn file_input_kept_when_dataset_loads() {
    assert!(!should_reset_file_input(Some(false), true));
    assert!(!should_reset_file_input(Some(true), true));
}
