//! Networking modules for the dataset server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema plus the
//! status/body decoding rules shared by every call.

pub mod api;
pub mod types;
