//! Routed pages.

pub mod contact;
