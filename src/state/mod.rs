//! Screen state kept apart from the views so it can be driven in tests.
pub mod gate;
pub mod login;
pub mod panel;
pub mod public;
