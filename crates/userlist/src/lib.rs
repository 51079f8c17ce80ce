//! Top-level facade crate for userlist.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use userlist_core::*;
}

pub mod server {
    pub use userlist_server::*;
}
