//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the state layer stays free of DOM calls.

pub mod dispatch;
pub mod theme;
