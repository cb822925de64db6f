//! Error taxonomy for the crosstab client.
//!
//! ERROR HANDLING
//! ==============
//! Every error is recovered at the boundary of the operation that raised it
//! and ends up as a single string on the page's error surface. Nothing here
//! is fatal: the user can always adjust the selection and retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const VALIDATION_MESSAGE: &str = "Selecione ao menos uma variável para linha e coluna.";
pub const CROSSTAB_FALLBACK_MESSAGE: &str = "Erro ao gerar tabela.";
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Falha no upload.";
pub const CLOSE_FALLBACK_MESSAGE: &str = "Falha ao fechar.";
pub const MISSING_FILE_MESSAGE: &str = "Selecione um arquivo .sav.";

/// Errors produced by the request pipeline and the dataset lifecycle calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrosstabError {
    /// One of the axes has no selected variable; no request was sent.
    #[error("Selecione ao menos uma variável para linha e coluna.")]
    Validation,

    /// Transport failure or non-success status.
    #[error("{message}")]
    Request { message: String },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl CrosstabError {
    /// Build a request error from an optional server message and a fallback.
    #[must_use]
    pub fn request(server_message: Option<String>, fallback: &str) -> Self {
        let message = server_message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Request { message }
    }

    /// Text shown on the error surface.
    ///
    /// Malformed responses display like request errors, with the generic
    /// fallback in front of the detail.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => VALIDATION_MESSAGE.to_owned(),
            Self::Request { message } => message.clone(),
            Self::MalformedResponse(detail) => format!("{CROSSTAB_FALLBACK_MESSAGE} ({detail})"),
        }
    }
}
