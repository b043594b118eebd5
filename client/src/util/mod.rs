//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the session
//! state machine from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod bootstrap;
pub mod browser;
pub mod format;
pub mod guard;
pub mod handshake;
pub mod payment_watch;
