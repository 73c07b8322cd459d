//! Browser glue that components share.

pub mod scroll;
