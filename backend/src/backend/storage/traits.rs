//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! interchangeable backends. The shipped implementations are in-memory
//! (see [`super::memory`]); a real database backend can be substituted
//! without touching the domain services.

use anyhow::Result;

use crate::backend::domain::models::geography::GeographyNode;
use crate::backend::domain::models::session::AdminSession;
use crate::backend::domain::models::volunteer::{Volunteer, VolunteerStatus};

/// Interface for volunteer record storage.
pub trait VolunteerStorage: Send + Sync {
    /// Store a newly registered volunteer
    fn store_volunteer(&self, volunteer: &Volunteer) -> Result<()>;

    /// Retrieve a specific volunteer by ID
    fn get_volunteer(&self, volunteer_id: &str) -> Result<Option<Volunteer>>;

    /// List all volunteers in registration (source) order
    fn list_volunteers(&self) -> Result<Vec<Volunteer>>;

    /// Set the status of the given volunteers.
    /// Returns the ids that were not found.
    fn update_status(&self, volunteer_ids: &[String], status: VolunteerStatus) -> Result<Vec<String>>;
}

/// Interface for loading the administrative-geography dataset.
///
/// The dataset is loaded once at startup and treated as immutable.
pub trait GeographyStorage: Send + Sync {
    /// Load every node of the hierarchy, parents before children
    fn load_nodes(&self) -> Result<Vec<GeographyNode>>;
}

/// Interface for admin session storage.
pub trait SessionStorage: Send + Sync {
    /// Persist an issued session
    fn store_session(&self, session: &AdminSession) -> Result<()>;

    /// Look up a session by token
    fn get_session(&self, token: &str) -> Result<Option<AdminSession>>;

    /// Remove a session by token.
    /// Returns true if a session was found and removed.
    fn delete_session(&self, token: &str) -> Result<bool>;
}
