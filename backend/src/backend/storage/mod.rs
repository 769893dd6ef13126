//! # Storage Module
//!
//! Data persistence for the volunteer registry. The domain layer only
//! depends on the traits in [`traits`]; the in-memory implementations in
//! [`memory`] are the current (mock) backend.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
