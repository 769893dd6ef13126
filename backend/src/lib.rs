//! Civil Defence Pakistan volunteer registry.
//!
//! Library entry point exposing the backend layers; the binary in
//! `main.rs` wires them to an HTTP listener.

pub mod backend;
