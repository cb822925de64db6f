//! Auxiliary request options: statistic toggles, missing-value mode, weight.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::collections::BTreeSet;

/// Per-cell statistics the server can stack inside each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatOption {
    Observed,
    Expected,
    RowPct,
    ColPct,
    TotalPct,
    Resid,
    StdResid,
    AdjStdResid,
}

impl StatOption {
    /// Display and wire order.
    pub const ALL: [Self; 8] = [
        Self::Observed,
        Self::Expected,
        Self::RowPct,
        Self::ColPct,
        Self::TotalPct,
        Self::Resid,
        Self::StdResid,
        Self::AdjStdResid,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Observed => "observed",
            Self::Expected => "expected",
            Self::RowPct => "row_pct",
            Self::ColPct => "col_pct",
            Self::TotalPct => "total_pct",
            Self::Resid => "resid",
            Self::StdResid => "std_resid",
            Self::AdjStdResid => "adj_std_resid",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Observed => "Observed",
            Self::Expected => "Expected",
            Self::RowPct => "% Row",
            Self::ColPct => "% Column",
            Self::TotalPct => "% Total",
            Self::Resid => "Residual (O−E)",
            Self::StdResid => "Standardized Residual",
            Self::AdjStdResid => "Adjusted Standardized Residual",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.wire_name() == raw)
    }
}

/// How non-integer weights are handled. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NiwMode {
    None,
    #[default]
    RoundCell,
    TruncCell,
    RoundCase,
    TruncCase,
}

impl NiwMode {
    pub const ALL: [Self; 5] = [Self::None, Self::RoundCell, Self::TruncCell, Self::RoundCase, Self::TruncCase];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::RoundCell => "round_cell",
            Self::TruncCell => "trunc_cell",
            Self::RoundCase => "round_case",
            Self::TruncCase => "trunc_case",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Sem ajuste",
            Self::RoundCell => "Arredondar contagens de célula",
            Self::TruncCell => "Truncar contagens de célula",
            Self::RoundCase => "Arredondar pesos de caso",
            Self::TruncCase => "Truncar pesos de caso",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.wire_name() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    enabled: BTreeSet<StatOption>,
    pub niw_mode: NiwMode,
    /// Raw weight input; see [`RequestOptions::effective_weight`].
    pub weight: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            enabled: [StatOption::Observed, StatOption::ColPct, StatOption::AdjStdResid].into_iter().collect(),
            niw_mode: NiwMode::default(),
            weight: String::new(),
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn is_enabled(&self, option: StatOption) -> bool {
        self.enabled.contains(&option)
    }

    pub fn set_enabled(&mut self, option: StatOption, enabled: bool) {
        if enabled {
            self.enabled.insert(option);
        } else {
            self.enabled.remove(&option);
        }
    }

    /// Enabled option wire names in display order.
    #[must_use]
    pub fn wire_names(&self) -> Vec<String> {
        self.enabled.iter().map(|o| o.wire_name().to_owned()).collect()
    }

    /// Weight variable to send; blank input means `placeholder`.
    #[must_use]
    pub fn effective_weight(&self, placeholder: &str) -> String {
        let trimmed = self.weight.trim();
        if trimmed.is_empty() { placeholder.to_owned() } else { trimmed.to_owned() }
    }
}
