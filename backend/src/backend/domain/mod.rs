//! # Domain Module
//!
//! Business logic for the volunteer registry. Everything here is
//! independent of the HTTP layer and of any concrete storage backend.
//!
//! ## Module Organization
//!
//! - **validation**: pure format validators for CNIC, phone, email, name,
//!   age, and required fields
//! - **geography_service**: cascading Province -> Division -> District ->
//!   Tehsil -> Union Council lookups with synthesized tehsil fallbacks
//! - **registration_wizard**: the 4-step registration state machine
//! - **registration_service**: draft validation/submission orchestration
//! - **volunteer_service**: filtering, selection, and bulk status updates
//! - **export_service**: CSV export of the filtered volunteer view
//! - **auth_service**: admin login/logout with explicit session objects
//! - **commands**: internal command/query/result types
//! - **models**: domain entities

pub mod auth_service;
pub mod commands;
pub mod export_service;
pub mod geography_service;
pub mod models;
pub mod registration_service;
pub mod registration_wizard;
pub mod validation;
pub mod volunteer_service;

pub use auth_service::*;
pub use export_service::*;
pub use geography_service::*;
pub use registration_service::*;
pub use registration_wizard::*;
pub use volunteer_service::*;
