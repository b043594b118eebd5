//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared surfaces while reading/writing
//! session and toast state from Leptos context providers.

pub mod ai_banner;
pub mod booking_card;
pub mod booking_form;
pub mod confirm_dialog;
pub mod guarded;
pub mod loading_screen;
pub mod modal;
pub mod navbar;
pub mod stat_card;
pub mod toast_host;
