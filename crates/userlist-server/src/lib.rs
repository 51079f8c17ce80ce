//! userlist server library entry.
//!
//! Wires the config loader, shared state, and the `/users` route into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
