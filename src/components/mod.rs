//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AppContext` and `UiSignals` from Leptos
//! context; the guard gate wraps the route outlet.

pub mod notice_bar;
pub mod route_guard;
