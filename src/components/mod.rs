//! Leptos view components. Each is a thin adapter over the state modules.

pub mod alert_stack;
pub mod back_to_top;
pub mod contact_form;
pub mod modal;
