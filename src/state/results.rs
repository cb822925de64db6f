//! Cross-tabulation result model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server answers with either one `table` or a keyed `tables` object.
//! Both are normalized into a [`ResultSet`] that keeps the server's key
//! order, which is the order tables are displayed in.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Content of one cell: a single value or stacked statistic lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Text(String),
    Lines(Vec<String>),
}

impl<'de> Deserialize<'de> for CellContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(Self::Empty),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map(Self::Lines)
                .ok_or_else(|| D::Error::custom("cell lines must be scalar values")),
            other => scalar_text(other)
                .map(Self::Text)
                .ok_or_else(|| D::Error::custom("cell must be a scalar or a list of lines")),
        }
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => Some(String::new()),
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

/// One named table as sent by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TableResult {
    #[serde(default)]
    pub title: Option<String>,
    pub columns: Vec<String>,
    /// Row labels.
    pub index: Vec<String>,
    /// Cells addressed by `[row][column]`.
    pub data: Vec<Vec<CellContent>>,
    #[serde(default, rename = "flagMask")]
    pub flag_mask: Option<Vec<Vec<bool>>>,
}

impl TableResult {
    /// Check that data and mask line up with the row/column labels.
    ///
    /// # Errors
    ///
    /// Returns a description of the first mismatch found.
    pub fn validate(&self) -> Result<(), String> {
        if self.data.len() != self.index.len() {
            return Err(format!("{} data rows for {} row labels", self.data.len(), self.index.len()));
        }
        if let Some((i, row)) = self.data.iter().enumerate().find(|(_, r)| r.len() != self.columns.len()) {
            return Err(format!("row {i} has {} cells for {} columns", row.len(), self.columns.len()));
        }
        if let Some(mask) = &self.flag_mask {
            let same_shape = mask.len() == self.data.len()
                && mask.iter().zip(&self.data).all(|(m, d)| m.len() == d.len());
            if !same_shape {
                return Err("flagMask dimensions differ from data".to_owned());
            }
        }
        Ok(())
    }

    /// Whether `(row, col)` is marked in the flag mask. No mask means nothing is flagged.
    #[must_use]
    pub fn is_flagged(&self, row: usize, col: usize) -> bool {
        self.flag_mask
            .as_ref()
            .and_then(|m| m.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Heading shown above the table: its own title, else its key.
    #[must_use]
    pub fn display_title<'a>(&'a self, key: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => key,
        }
    }
}

/// Tables keyed by name, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    tables: Vec<(String, TableResult)>,
}

impl ResultSet {
    /// Normalize a single-table response under `key`.
    #[must_use]
    pub fn single(key: &str, table: TableResult) -> Self {
        Self { tables: vec![(key.to_owned(), table)] }
    }

    /// Build from ordered entries. A repeated key replaces the earlier table in place.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, TableResult)>) -> Self {
        let mut tables: Vec<(String, TableResult)> = Vec::with_capacity(entries.len());
        for (key, table) in entries {
            match tables.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = table,
                None => tables.push((key, table)),
            }
        }
        Self { tables }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableResult)> {
        self.tables.iter().map(|(k, t)| (k.as_str(), t))
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.tables.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Validate every table.
    ///
    /// # Errors
    ///
    /// Returns the first table key with a shape problem and its description.
    pub fn validate(&self) -> Result<(), String> {
        for (key, table) in &self.tables {
            table.validate().map_err(|e| format!("table `{key}`: {e}"))?;
        }
        Ok(())
    }
}
