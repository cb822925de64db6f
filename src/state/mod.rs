//! Client-side state for the crosstab page.
//!
//! DESIGN
//! ======
//! Leaf models (`selector`, `chips`, `options`, `results`) know nothing about
//! each other. `selection` pairs selectors with chip summaries per axis,
//! `render` shapes responses for display, and `workspace` + `events` hold
//! the page-wide state and the only entry point that mutates it.

pub mod chips;
pub mod events;
pub mod options;
pub mod render;
pub mod results;
pub mod selection;
pub mod selector;
pub mod workspace;
