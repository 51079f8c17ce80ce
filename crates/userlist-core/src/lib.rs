//! userlist core: the user record model, the read-only record store, and the
//! shared error type.
//!
//! This crate carries no HTTP or runtime dependencies; the server crate wires
//! it behind a route.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Fallible paths
//! surface as `UserListError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{Result, UserListError};
pub use model::User;
pub use store::{InMemoryUserStore, UserStore};
