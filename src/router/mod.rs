//! Client-side routing: the route table, the pre-navigation guard, and the
//! navigation seam used by non-component code.

pub mod guard;
pub mod navigator;
pub mod routes;
