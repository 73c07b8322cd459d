//! Network layer: wire types and REST helpers for the storefront backend.

pub mod api;
pub mod types;
