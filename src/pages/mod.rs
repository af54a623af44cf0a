//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, backend calls,
//! navigation) and keeps its input validation in plain functions so it is
//! testable without a browser.

pub mod home;
pub mod login;
pub mod register;
pub mod section;
