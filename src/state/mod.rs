//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! All protocol logic lives here as plain structs with no DOM, network, or
//! framework dependencies, so it is unit-testable natively. Components wrap
//! these in `RwSignal`s and stay thin: they translate events into method
//! calls and state into markup.

pub mod alerts;
pub mod errors;
pub mod fields;
pub mod scroll_lock;
pub mod submission;
