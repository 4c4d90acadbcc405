//! Shared types for the order management workspace.

mod types;

pub use types::OrderId;
