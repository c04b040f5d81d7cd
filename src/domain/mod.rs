//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types as the rest of the crate sees them
//! - `wire.rs` — Request/response bodies that only exist on the wire
//! - `client.rs` — Sub-client with the HTTP methods for that resource

pub mod book;
pub mod order;
