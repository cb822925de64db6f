//! Wire DTOs for the dataset server and response decoding.
//!
//! DESIGN
//! ======
//! Decoding is split from transport: `api` hands over the HTTP status and the
//! raw body text, and the `decode_*` functions here turn that into either a
//! typed value or a [`CrosstabError`]. That keeps every response-shape rule
//! testable without a browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CrosstabError;
use crate::state::results::{ResultSet, TableResult};

/// Body of `POST /crosstab`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CrosstabRequest {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub weight: String,
    pub options: Vec<String>,
    pub niw_mode: String,
}

/// A dataset column as listed by `POST /upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    #[serde(default)]
    pub dtype: Option<String>,
}

/// Success body of `POST /upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub variables: Vec<VariableInfo>,
    #[serde(default)]
    pub suggested_weight: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Success body of `POST /close`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrosstabResponseBody {
    #[serde(default)]
    table: Option<TableResult>,
    #[serde(default)]
    tables: Option<OrderedTables>,
    #[serde(default)]
    error: Option<String>,
}

/// `tables` object read entry by entry so document order survives.
#[derive(Debug)]
struct OrderedTables(Vec<(String, TableResult)>);

impl<'de> Deserialize<'de> for OrderedTables {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedTablesVisitor;

        impl<'de> Visitor<'de> for OrderedTablesVisitor {
            type Value = OrderedTables;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of named tables")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, table)) = map.next_entry::<String, TableResult>()? {
                    entries.push((key, table));
                }
                Ok(OrderedTables(entries))
            }
        }

        deserializer.deserialize_map(OrderedTablesVisitor)
    }
}

/// Decode a `POST /crosstab` response.
///
/// # Errors
///
/// - [`CrosstabError::Request`] for a non-success status (server message or `fallback`).
/// - [`CrosstabError::MalformedResponse`] when a success body lacks `table`/`tables`
///   or a table's dimensions are inconsistent.
pub fn decode_crosstab_response(
    status_ok: bool,
    body: &str,
    default_key: &str,
    fallback: &str,
) -> Result<ResultSet, CrosstabError> {
    if !status_ok {
        return Err(error_from_body(body, fallback));
    }
    let parsed: CrosstabResponseBody =
        serde_json::from_str(body).map_err(|e| CrosstabError::MalformedResponse(e.to_string()))?;

    let set = match (parsed.tables, parsed.table, parsed.error) {
        (Some(OrderedTables(entries)), _, _) => ResultSet::from_entries(entries),
        (None, Some(table), _) => ResultSet::single(default_key, table),
        (None, None, Some(message)) => return Err(CrosstabError::request(Some(message), fallback)),
        (None, None, None) => {
            return Err(CrosstabError::MalformedResponse("missing `table` or `tables`".to_owned()));
        }
    };
    set.validate().map_err(CrosstabError::MalformedResponse)?;
    Ok(set)
}

/// Decode a JSON success body, or turn a failure status into a request error.
///
/// # Errors
///
/// - [`CrosstabError::Request`] for a non-success status.
/// - [`CrosstabError::MalformedResponse`] when the success body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(status_ok: bool, body: &str, fallback: &str) -> Result<T, CrosstabError> {
    if !status_ok {
        return Err(error_from_body(body, fallback));
    }
    serde_json::from_str(body).map_err(|e| CrosstabError::MalformedResponse(e.to_string()))
}

fn error_from_body(body: &str, fallback: &str) -> CrosstabError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    CrosstabError::request(parsed.error, fallback)
}
