//! Inventory dashboard: product table, summary widgets and buy/sell pickers kept in
//! step with the server's mutation responses.
//!
//! - api.rs: mutation dispatcher (form post, outcome classification)
//! - state.rs: typed view state and the synchronizer
//! - guard.rs: advisory sell quantity check
//! - view_model.rs: commands wiring dispatcher, synchronizer and notifier
//! - ui/: Leptos components

pub mod api;
pub mod guard;
pub mod state;
pub mod ui;
pub mod view_model;
