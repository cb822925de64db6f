//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so overrides are baked in with
//! `option_env!` when the crate is compiled. `from_lookup` keeps the parsing
//! testable without touching the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WEIGHT_PLACEHOLDER: &str = "peso";
pub const DEFAULT_TABLE_KEY: &str = "Tabela";
pub const DEFAULT_RESIDUAL_PREFIX: &str = "Adjusted Standardized Residual:";

pub const UPLOAD_PATH: &str = "/upload";
pub const CLOSE_PATH: &str = "/close";
pub const CROSSTAB_PATH: &str = "/crosstab";
pub const EXPORT_PATH: &str = "/export_excel";

/// Endpoints and presentation defaults shared by the whole client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every endpoint path. Empty means same origin.
    pub api_base: String,
    /// Weight variable sent when the weight input is blank.
    pub weight_placeholder: String,
    /// Key used when a response carries a single `table`.
    pub default_table_key: String,
    /// Line prefix that marks an adjusted residual inside a cell.
    pub residual_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            weight_placeholder: DEFAULT_WEIGHT_PLACEHOLDER.to_owned(),
            default_table_key: DEFAULT_TABLE_KEY.to_owned(),
            residual_prefix: DEFAULT_RESIDUAL_PREFIX.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from values captured when the crate was compiled.
    ///
    /// Optional:
    /// - `CROSSTAB_API_BASE`: endpoint prefix, default same origin
    /// - `CROSSTAB_WEIGHT_PLACEHOLDER`: default `peso`
    /// - `CROSSTAB_DEFAULT_TABLE_KEY`: default `Tabela`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base = read("CROSSTAB_API_BASE")
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let weight_placeholder = read("CROSSTAB_WEIGHT_PLACEHOLDER").unwrap_or(defaults.weight_placeholder);
        let default_table_key = read("CROSSTAB_DEFAULT_TABLE_KEY").unwrap_or(defaults.default_table_key);

        Self { api_base, weight_placeholder, default_table_key, residual_prefix: defaults.residual_prefix }
    }

    #[must_use]
    pub fn upload_url(&self) -> String {
        self.endpoint(UPLOAD_PATH)
    }

    #[must_use]
    pub fn close_url(&self) -> String {
        self.endpoint(CLOSE_PATH)
    }

    #[must_use]
    pub fn crosstab_url(&self) -> String {
        self.endpoint(CROSSTAB_PATH)
    }

    #[must_use]
    pub fn export_url(&self) -> String {
        self.endpoint(EXPORT_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "CROSSTAB_API_BASE" => option_env!("CROSSTAB_API_BASE"),
        "CROSSTAB_WEIGHT_PLACEHOLDER" => option_env!("CROSSTAB_WEIGHT_PLACEHOLDER"),
        "CROSSTAB_DEFAULT_TABLE_KEY" => option_env!("CROSSTAB_DEFAULT_TABLE_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}
