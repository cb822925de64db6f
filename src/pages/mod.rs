//! Route-level page components.

pub mod crosstab;
