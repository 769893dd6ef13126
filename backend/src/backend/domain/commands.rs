//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are not
//! exposed over the public API; the REST layer maps the DTOs in the
//! `shared` crate to these internal types.

pub mod registration {
    use std::collections::BTreeMap;

    use crate::backend::domain::models::volunteer::Volunteer;

    /// Input for validating one wizard step of a draft.
    #[derive(Debug, Clone)]
    pub struct ValidateStepCommand {
        /// Step number, 1 through 4
        pub step: u8,
        /// Field name -> value, as collected so far
        pub draft: BTreeMap<String, String>,
    }

    /// Result of validating one wizard step.
    #[derive(Debug, Clone)]
    pub struct ValidateStepResult {
        pub step: u8,
        pub valid: bool,
        pub errors: BTreeMap<String, String>,
    }

    /// Input for submitting a completed draft.
    #[derive(Debug, Clone)]
    pub struct SubmitRegistrationCommand {
        pub draft: BTreeMap<String, String>,
    }

    /// Result of a successful submission.
    #[derive(Debug, Clone)]
    pub struct SubmitRegistrationResult {
        pub volunteer: Volunteer,
        pub success_message: String,
    }
}

pub mod volunteers {
    use crate::backend::domain::models::volunteer::VolunteerStatus;

    /// Filter facets for the volunteer table. Empty strings apply no
    /// constraint; `search` is a substring match, the rest are exact.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct FilterCriteria {
        pub search: String,
        pub province: String,
        pub division: String,
        pub district: String,
        pub status: String,
        pub education: String,
        pub availability: String,
    }

    /// Command for setting the status of several volunteers at once.
    #[derive(Debug, Clone)]
    pub struct BulkStatusCommand {
        pub volunteer_ids: Vec<String>,
        pub status: VolunteerStatus,
    }

    /// Result of a bulk status update.
    #[derive(Debug, Clone)]
    pub struct BulkStatusResult {
        pub updated_count: usize,
        pub not_found_ids: Vec<String>,
        pub success_message: String,
    }
}

pub mod auth {
    use crate::backend::domain::models::session::AdminSession;

    /// Input for admin login.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }

    /// Result of a successful login.
    #[derive(Debug, Clone)]
    pub struct LoginResult {
        pub session: AdminSession,
        pub success_message: String,
    }

    /// Input for ending a session.
    #[derive(Debug, Clone)]
    pub struct LogoutCommand {
        pub token: String,
    }

    /// Result of a logout.
    #[derive(Debug, Clone)]
    pub struct LogoutResult {
        pub success_message: String,
    }
}

pub mod export {
    use crate::backend::domain::commands::volunteers::FilterCriteria;

    /// Input for exporting volunteers as CSV. An empty `selected_ids`
    /// exports everything that matches the criteria.
    #[derive(Debug, Clone, Default)]
    pub struct ExportVolunteersCommand {
        pub criteria: FilterCriteria,
        pub selected_ids: Vec<String>,
    }

    /// Generated CSV content plus its suggested filename.
    #[derive(Debug, Clone)]
    pub struct ExportDataResult {
        pub csv_content: String,
        pub filename: String,
        pub record_count: usize,
    }

    /// Input for writing an export directly to disk.
    #[derive(Debug, Clone, Default)]
    pub struct ExportToPathCommand {
        pub criteria: FilterCriteria,
        pub selected_ids: Vec<String>,
        /// Target directory; defaults to the user's Documents folder
        pub custom_path: Option<String>,
    }

    /// Outcome of an export-to-path request. File-system problems are
    /// reported here rather than as errors.
    #[derive(Debug, Clone)]
    pub struct ExportToPathResult {
        pub success: bool,
        pub message: String,
        pub file_path: String,
        pub record_count: usize,
    }
}
