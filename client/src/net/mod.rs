//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
