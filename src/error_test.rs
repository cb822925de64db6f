use super::*;

#[test]
fn validation_error_shows_selection_message() {
    assert_eq!(CrosstabError::Validation.user_message(), VALIDATION_MESSAGE);
    assert_eq!(CrosstabError::Validation.to_string(), VALIDATION_MESSAGE);
}

#[test]
fn request_error_prefers_server_message() {
    let err = CrosstabError::request(Some("Nenhum arquivo carregado.".to_owned()), CROSSTAB_FALLBACK_MESSAGE);
    assert_eq!(err.user_message(), "Nenhum arquivo carregado.");
}

#[test]
fn request_error_falls_back_when_message_missing_or_blank() {
    let missing = CrosstabError::request(None, CROSSTAB_FALLBACK_MESSAGE);
    let blank = CrosstabError::request(Some("  ".to_owned()), UPLOAD_FALLBACK_MESSAGE);
    assert_eq!(missing.user_message(), CROSSTAB_FALLBACK_MESSAGE);
    assert_eq!(blank.user_message(), UPLOAD_FALLBACK_MESSAGE);
}

#[test]
fn malformed_response_displays_as_request_failure() {
    let err = CrosstabError::MalformedResponse("missing `tables`".to_owned());
    assert_eq!(err.user_message(), "Erro ao gerar tabela. (missing `tables`)");
    assert_eq!(err.to_string(), "malformed response: missing `tables`");
}
