//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the crosstab page panels. They read the workspace from
//! Leptos context and change it only by emitting events.

pub mod chip_list;
pub mod options_panel;
pub mod results_view;
pub mod status_header;
pub mod upload_panel;
pub mod variable_picker;
