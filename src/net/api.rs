//! HTTP calls to the dataset server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: stubs returning an error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, CrosstabError>`. Transport failures,
//! non-success statuses and unexpected bodies all land on the error surface
//! instead of panicking inside a spawned task.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
use crate::error::CrosstabError;
use crate::state::results::ResultSet;

use super::types::{CrosstabRequest, MessageResponse};
#[cfg(feature = "hydrate")]
use super::types::{UploadResponse, decode_crosstab_response, decode_json};

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(detail: &str) -> String {
    format!("falha de comunicação com o servidor: {detail}")
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(detail: &str) -> CrosstabError {
    CrosstabError::Request { message: transport_failed_message(detail) }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> CrosstabError {
    CrosstabError::Request { message: "not available on server".to_owned() }
}

/// Submit the selection via `POST /crosstab` and decode the tables.
///
/// # Errors
///
/// Returns a request error on transport failure or non-success status, and a
/// malformed-response error when the body lacks a usable table set.
pub async fn post_crosstab(config: &ClientConfig, request: &CrosstabRequest) -> Result<ResultSet, CrosstabError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.crosstab_url())
            .json(request)
            .map_err(|e| transport_error(&e.to_string()))?
            .send()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| transport_error(&e.to_string()))?;
        decode_crosstab_response(ok, &body, &config.default_table_key, crate::error::CROSSTAB_FALLBACK_MESSAGE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Upload a dataset file via multipart `POST /upload`.
///
/// # Errors
///
/// Returns a request error on transport failure or non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_dataset(config: &ClientConfig, file: &web_sys::File) -> Result<UploadResponse, CrosstabError> {
    let form = web_sys::FormData::new().map_err(|_| transport_error("FormData indisponível"))?;
    form.append_with_blob("file", file)
        .map_err(|_| transport_error("não foi possível anexar o arquivo"))?;
    let resp = gloo_net::http::Request::post(&config.upload_url())
        .body(form)
        .map_err(|e| transport_error(&e.to_string()))?
        .send()
        .await
        .map_err(|e| transport_error(&e.to_string()))?;
    let ok = resp.ok();
    let body = resp.text().await.map_err(|e| transport_error(&e.to_string()))?;
    decode_json(ok, &body, crate::error::UPLOAD_FALLBACK_MESSAGE)
}

/// Close the server-side dataset via `POST /close`.
///
/// # Errors
///
/// Returns a request error on transport failure or non-success status.
pub async fn close_dataset(config: &ClientConfig) -> Result<MessageResponse, CrosstabError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.close_url())
            .send()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| transport_error(&e.to_string()))?;
        decode_json(ok, &body, crate::error::CLOSE_FALLBACK_MESSAGE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(unavailable())
    }
}
