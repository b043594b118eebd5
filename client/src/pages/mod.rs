//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages assume `Guarded` already admitted the visitor.

pub mod admin_dashboard;
pub mod dashboard;
pub mod landing;
pub mod marketplace;
pub mod payment_cancel;
pub mod payment_success;
pub mod technician_dashboard;
pub mod technicians;
