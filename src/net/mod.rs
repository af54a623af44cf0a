//! Networking modules for the library REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the single HTTP wrapper (credential header, envelope
//! unwrapping, 401 handling), `api` holds the per-resource endpoint wrappers,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod client;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod types;
